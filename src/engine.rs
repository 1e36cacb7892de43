use crate::{Config, Grid, Pattern};
use anyhow::{anyhow, Context, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RunState {
    Stopped,
    Running,
}

/// Game of Life on a torus together with its run state.
///
/// `step` only advances the field while the engine is running; a stopped
/// engine keeps its generation no matter how often the driving loop ticks.
pub struct Engine {
    grid: Grid,
    state: RunState,
    generation: u64, // Number of generations since the last reset of the field.
    fill_rate: f64,  // Probability used by `Event::Randomize`.
    rng: ChaCha8Rng,
}

impl Engine {
    /// Creates a stopped engine with all cells dead.
    pub fn new(n: usize) -> Result<Self> {
        Self::with_rng(n, ChaCha8Rng::from_entropy())
    }

    /// Same as [`Engine::new`], with a fixed seed for randomization.
    pub fn with_seed(n: usize, seed: u64) -> Result<Self> {
        Self::with_rng(n, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Builds an engine from validated settings; loads the pattern file if
    /// one is configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let mut engine = match config.seed {
            Some(seed) => Self::with_seed(config.grid_dims, seed)?,
            None => Self::new(config.grid_dims)?,
        };
        engine.fill_rate = config.fill_rate;

        if let Some(path) = &config.pattern {
            let data = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read pattern {}", path.display()))?;
            let pattern = Pattern::from_rle(&data)
                .with_context(|| format!("Failed to parse pattern {}", path.display()))?;
            engine.load_pattern(&pattern)?;
        }
        Ok(engine)
    }

    fn with_rng(n: usize, rng: ChaCha8Rng) -> Result<Self> {
        Ok(Self {
            grid: Grid::blank(n)?,
            state: RunState::Stopped,
            generation: 0,
            fill_rate: Config::FILL_RATE,
            rng,
        })
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn fill_rate(&self) -> f64 {
        self.fill_rate
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.grid.get(row, col)
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        self.grid.set(row, col, alive);
    }

    pub fn toggle(&mut self, row: usize, col: usize) {
        self.grid.toggle(row, col);
    }

    pub fn count_live_neighbors(&self, row: usize, col: usize) -> usize {
        self.grid.count_live_neighbors(row, col)
    }

    /// Makes every cell alive with the given probability, independently.
    ///
    /// # Panics
    ///
    /// If `probability` is outside of `[0, 1]`.
    pub fn randomize(&mut self, probability: f64) {
        assert!(
            (0.0..=1.0).contains(&probability),
            "Probability {probability} is outside of [0, 1]"
        );
        let rng = &mut self.rng;
        self.grid.fill_with(|| rng.gen_bool(probability));
        self.generation = 0;
        log::info!(
            "Randomized the field with p = {probability:.3}: {} cells alive",
            self.grid.population()
        );
    }

    /// Kills every cell and stops the simulation.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.state = RunState::Stopped;
        self.generation = 0;
        log::info!("Cleared the field");
    }

    /// Clears the field and places `pattern` in its middle.
    pub fn load_pattern(&mut self, pattern: &Pattern) -> Result<()> {
        let n = self.size();
        if pattern.width() > n || pattern.height() > n {
            return Err(anyhow!(
                "Pattern {}x{} does not fit into the {n}x{n} field",
                pattern.width(),
                pattern.height()
            ));
        }
        self.grid.clear();
        let (top, left) = ((n - pattern.height()) / 2, (n - pattern.width()) / 2);
        for &(row, col) in pattern.alive() {
            self.grid.set(top + row, left + col, true);
        }
        self.generation = 0;
        log::info!(
            "Loaded a {}x{} pattern with {} live cells",
            pattern.width(),
            pattern.height(),
            pattern.alive().len()
        );
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn set_running(&mut self, running: bool) {
        let state = if running {
            RunState::Running
        } else {
            RunState::Stopped
        };
        if state != self.state {
            log::info!("{state:?} at generation {}", self.generation);
        }
        self.state = state;
    }

    pub fn toggle_running(&mut self) {
        self.set_running(!self.is_running());
    }

    /// Advances the field by one generation if the engine is running.
    ///
    /// Returns whether a generation was computed.
    pub fn step(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.grid.update();
        self.generation += 1;
        log::trace!(
            "Generation {}: {} cells alive",
            self.generation,
            self.grid.population()
        );
        true
    }

    /// Iterates over all cells in row-major order.
    pub fn iterate(&self) -> Cells<'_> {
        Cells {
            cells: self.grid.cells(),
            n: self.size(),
            pos: 0,
        }
    }
}

/// Row-major iterator over `(row, col, alive)` of every cell.
#[derive(Clone)]
pub struct Cells<'a> {
    cells: &'a [bool],
    n: usize,
    pos: usize,
}

impl Iterator for Cells<'_> {
    type Item = (usize, usize, bool);

    fn next(&mut self) -> Option<Self::Item> {
        let &alive = self.cells.get(self.pos)?;
        let item = (self.pos / self.n, self.pos % self.n, alive);
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.cells.len() - self.pos;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Cells<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{BLOCK, GLIDER};

    const SEED: u64 = 42;

    #[test]
    fn new_engine_is_empty_and_stopped() {
        let engine = Engine::new(7).unwrap();
        assert_eq!(engine.size(), 7);
        assert_eq!(engine.state(), RunState::Stopped);
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.iterate().len(), 49);
        assert!(engine.iterate().all(|(_, _, alive)| !alive));
        assert!(Engine::new(0).is_err());
    }

    #[test]
    fn iterate_is_row_major_and_restartable() {
        let mut engine = Engine::with_seed(3, SEED).unwrap();
        engine.set(1, 2, true);
        let coords = engine.iterate().map(|(r, c, _)| (r, c)).collect::<Vec<_>>();
        assert_eq!(coords[0], (0, 0));
        assert_eq!(coords[1], (0, 1));
        assert_eq!(coords[3], (1, 0));
        assert_eq!(coords[8], (2, 2));

        let first = engine.iterate().collect::<Vec<_>>();
        let second = engine.iterate().collect::<Vec<_>>();
        assert_eq!(first, second);
        assert_eq!(first.iter().filter(|c| c.2).count(), 1);
        assert!(first[5].2);
    }

    #[test]
    fn step_is_gated_by_run_state() {
        let mut engine = Engine::with_seed(16, SEED).unwrap();
        engine.set(4, 4, true);
        assert!(!engine.step());
        assert!(engine.get(4, 4));
        assert_eq!(engine.generation(), 0);

        engine.set_running(true);
        assert!(engine.step());
        assert!(!engine.get(4, 4));
        assert_eq!(engine.generation(), 1);
    }

    #[test]
    fn mutations_keep_run_state() {
        let mut engine = Engine::with_seed(10, SEED).unwrap();
        engine.set_running(true);
        engine.toggle(0, 0);
        engine.set(9, 9, true);
        engine.randomize(0.5);
        assert!(engine.is_running());

        engine.clear();
        assert!(!engine.is_running());
        assert_eq!(engine.population(), 0);

        engine.randomize(0.5);
        assert!(!engine.is_running());
    }

    #[test]
    fn randomize_extremes() {
        let mut engine = Engine::with_seed(20, SEED).unwrap();
        engine.randomize(1.);
        assert_eq!(engine.population(), 400);
        engine.randomize(0.);
        assert_eq!(engine.population(), 0);
    }

    #[test]
    #[should_panic(expected = "outside of [0, 1]")]
    fn randomize_rejects_bad_probability() {
        Engine::with_seed(4, SEED).unwrap().randomize(1.5);
    }

    #[test]
    fn pattern_is_centred() {
        let mut engine = Engine::with_seed(10, SEED).unwrap();
        engine.randomize(0.5);
        engine.load_pattern(&Pattern::from_rle(BLOCK).unwrap()).unwrap();
        assert_eq!(engine.population(), 4);
        for (row, col) in [(4, 4), (4, 5), (5, 4), (5, 5)] {
            assert!(engine.get(row, col));
        }

        let mut tiny = Engine::with_seed(2, SEED).unwrap();
        assert!(tiny.load_pattern(&Pattern::from_rle(GLIDER).unwrap()).is_err());
    }

    #[test]
    fn config_pattern_file() {
        let path = std::env::temp_dir().join(format!("toroidal_life_{}.rle", std::process::id()));
        std::fs::write(&path, GLIDER).unwrap();
        let config = Config {
            grid_dims: 12,
            seed: Some(SEED),
            fill_rate: 0.25,
            pattern: Some(path.clone()),
            ..Default::default()
        };
        let engine = Engine::from_config(&config).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(engine.population(), 5);
        assert_eq!(engine.fill_rate(), 0.25);

        let missing = Config {
            pattern: Some(path),
            ..Default::default()
        };
        assert!(Engine::from_config(&missing).is_err());
    }
}
