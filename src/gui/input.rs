use crate::Event;
use eframe::egui::{InputState, Key, Pos2, Rect};

const KEY_BINDINGS: [(Key, Event); 4] = [
    (Key::S, Event::StartStop),
    (Key::R, Event::Randomize),
    (Key::C, Event::Clear),
    (Key::Escape, Event::Quit),
];

/// Maps a position on screen to the cell drawn under it.
///
/// Rows go down the vertical axis, columns along the horizontal one.
pub fn cell_at(field_rect: Rect, pos: Pos2, n: usize) -> Option<(usize, usize)> {
    if !field_rect.contains(pos) {
        return None;
    }
    let tile = field_rect.width() / n as f32;
    let offset = pos - field_rect.left_top();
    let (row, col) = ((offset.y / tile) as usize, (offset.x / tile) as usize);
    (row < n && col < n).then_some((row, col))
}

/// Collects the events produced by this frame's keyboard and mouse input.
pub fn collect_events(input: &InputState, field_rect: Option<Rect>, n: usize) -> Vec<Event> {
    let mut events = Vec::new();

    if input.pointer.primary_pressed() {
        let cell = field_rect
            .zip(input.pointer.interact_pos())
            .and_then(|(rect, pos)| cell_at(rect, pos, n));
        if let Some((row, col)) = cell {
            events.push(Event::ToggleCell { row, col });
        }
    }

    events.extend(
        KEY_BINDINGS
            .iter()
            .filter(|(key, _)| input.key_pressed(*key))
            .map(|&(_, event)| event),
    );
    events
}
