use crate::Engine;
use std::ops::ControlFlow;

/// Commands coming from the input layer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Event {
    ToggleCell { row: usize, col: usize },
    StartStop,
    Randomize,
    Clear,
    Quit,
}

impl Engine {
    /// Applies one input event. `Quit` breaks the driving loop.
    pub fn handle(&mut self, event: Event) -> ControlFlow<()> {
        match event {
            Event::ToggleCell { row, col } => self.toggle(row, col),
            Event::StartStop => self.toggle_running(),
            Event::Randomize => self.randomize(self.fill_rate()),
            Event::Clear => self.clear(),
            Event::Quit => {
                log::info!("Quit requested at generation {}", self.generation());
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    /// One iteration of the driving loop: applies the events in order, then
    /// steps once. Events after `Quit` are dropped and no step is made.
    pub fn tick(&mut self, events: impl IntoIterator<Item = Event>) -> ControlFlow<()> {
        for event in events {
            self.handle(event)?;
        }
        self.step();
        ControlFlow::Continue(())
    }
}
