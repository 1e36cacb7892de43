use anyhow::{anyhow, Result};

/// Square field of `n x n` cells with opposite edges stitched together.
///
/// Cells are stored row-major in a flat buffer. A second buffer of the same
/// shape receives the next generation, so a sweep never reads a cell that was
/// already updated in the same pass.
#[derive(Clone, Debug)]
pub struct Grid {
    cells_curr: Vec<bool>,
    cells_next: Vec<bool>,
    n: usize,
}

impl Grid {
    /// Creates a blank field; fails only when `n == 0`.
    pub fn blank(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(anyhow!("Grid side length must be positive"));
        }
        let size = n.checked_mul(n).ok_or_else(|| anyhow!("Grid {n}x{n} is too large"))?;
        Ok(Self {
            cells_curr: vec![false; size],
            cells_next: vec![false; size],
            n,
        })
    }

    pub fn size(&self) -> usize {
        self.n
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.n && col < self.n,
            "Cell ({row}, {col}) is outside of the {n}x{n} grid",
            n = self.n
        );
        row * self.n + col
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells_curr[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        let idx = self.index(row, col);
        self.cells_curr[idx] = alive;
    }

    pub fn toggle(&mut self, row: usize, col: usize) {
        let idx = self.index(row, col);
        self.cells_curr[idx] = !self.cells_curr[idx];
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.cells_curr.fill(false);
    }

    /// Overwrites the field cell by cell in row-major order.
    pub fn fill_with(&mut self, mut f: impl FnMut() -> bool) {
        for cell in self.cells_curr.iter_mut() {
            *cell = f();
        }
    }

    pub fn population(&self) -> usize {
        self.cells_curr.iter().filter(|&&c| c).count()
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells_curr
    }

    pub fn count_live_neighbors(&self, row: usize, col: usize) -> usize {
        self.index(row, col);
        count_neibs(&self.cells_curr, self.n, row, col)
    }

    /// Advances the field by one generation.
    pub fn update(&mut self) {
        let n = self.n;
        let curr = &self.cells_curr;

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            self.cells_next
                .par_chunks_mut(n)
                .enumerate()
                .for_each(|(row, dst)| update_row(curr, n, row, dst));
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.cells_next
                .chunks_mut(n)
                .enumerate()
                .for_each(|(row, dst)| update_row(curr, n, row, dst));
        }

        std::mem::swap(&mut self.cells_next, &mut self.cells_curr);
    }
}

/// B3/S23.
#[inline]
fn next_state(alive: bool, neibs: usize) -> bool {
    matches!((alive, neibs), (true, 2) | (_, 3))
}

fn count_neibs(cells: &[bool], n: usize, row: usize, col: usize) -> usize {
    let r1 = if row == 0 { n - 1 } else { row - 1 };
    let r2 = if row == n - 1 { 0 } else { row + 1 };
    let c1 = if col == 0 { n - 1 } else { col - 1 };
    let c2 = if col == n - 1 { 0 } else { col + 1 };
    let (r0, c0) = (row * n, col);
    let (r1, r2) = (r1 * n, r2 * n);
    cells[r1 + c1] as usize
        + cells[r1 + c0] as usize
        + cells[r1 + c2] as usize
        + cells[r0 + c1] as usize
        + cells[r0 + c2] as usize
        + cells[r2 + c1] as usize
        + cells[r2 + c0] as usize
        + cells[r2 + c2] as usize
}

fn update_row(curr: &[bool], n: usize, row: usize, dst: &mut [bool]) {
    for (col, cell) in dst.iter_mut().enumerate() {
        let neibs = count_neibs(curr, n, row, col);
        *cell = next_state(curr[row * n + col], neibs);
    }
}
