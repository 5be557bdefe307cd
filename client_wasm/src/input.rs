//! Keyboard and pointer input translation

use game_core::systems::InputEvent;
use game_core::Direction;

/// Map a `KeyboardEvent.key` value to a paddle direction
pub fn key_direction(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" | "w" | "W" => Some(Direction::Up),
        "ArrowDown" | "s" | "S" => Some(Direction::Down),
        _ => None,
    }
}

/// Handle key down event
pub fn handle_key_down(key: &str) -> Option<InputEvent> {
    key_direction(key).map(InputEvent::Press)
}

/// Handle key up event
pub fn handle_key_up(key: &str) -> Option<InputEvent> {
    key_direction(key).map(InputEvent::Release)
}

/// Handle pointer movement, given the pointer's client Y and the surface's top
pub fn handle_pointer_move(client_y: f64, surface_top: f64) -> InputEvent {
    InputEvent::PointerMoved((client_y - surface_top) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_and_wasd() {
        assert_eq!(key_direction("ArrowUp"), Some(Direction::Up));
        assert_eq!(key_direction("w"), Some(Direction::Up));
        assert_eq!(key_direction("ArrowDown"), Some(Direction::Down));
        assert_eq!(key_direction("S"), Some(Direction::Down));
        assert_eq!(key_direction("ArrowLeft"), None);
        assert_eq!(key_direction(" "), None);
    }

    #[test]
    fn test_key_edges() {
        assert_eq!(
            handle_key_down("ArrowUp"),
            Some(InputEvent::Press(Direction::Up))
        );
        assert_eq!(
            handle_key_up("ArrowDown"),
            Some(InputEvent::Release(Direction::Down))
        );
        assert_eq!(handle_key_up("Enter"), None);
    }

    #[test]
    fn test_pointer_in_surface_coordinates() {
        assert_eq!(
            handle_pointer_move(340.0, 40.0),
            InputEvent::PointerMoved(300.0)
        );
    }
}
