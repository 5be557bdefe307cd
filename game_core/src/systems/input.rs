use crate::resources::{Direction, InputState};

/// An input edge delivered by the host between frames
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Press(Direction),
    Release(Direction),
    /// Pointer Y in arena coordinates
    PointerMoved(f32),
}

/// Fold one input event into the input state
///
/// Nothing is queued: each event overwrites whatever the previous one wrote.
pub fn ingest_input(input: &mut InputState, event: InputEvent) {
    match event {
        InputEvent::Press(dir) => input.press(dir),
        InputEvent::Release(dir) => input.release(dir),
        InputEvent::PointerMoved(y) => input.point(y),
    }
}
