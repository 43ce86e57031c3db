//! Mouse and keyboard state mirrored from host input events

use std::collections::HashSet;

use glam::Vec2;

/// Platform-agnostic input event
///
/// Buttons use the DOM `MouseEvent.button` numbering and keys use native key
/// codes (see [`crate::keys`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    MouseMove { x: f32, y: f32 },
    MouseDown { button: i16 },
    MouseUp { button: i16 },
    KeyDown { code: u32 },
    KeyUp { code: u32 },
}

/// Mouse position (in translated stage space) and held buttons
#[derive(Debug, Clone, Copy)]
pub struct Mouse<'a> {
    pub position: Vec2,
    pub buttons: &'a HashSet<i16>,
}

impl Mouse<'_> {
    pub fn is_down(&self, button: i16) -> bool {
        self.buttons.contains(&button)
    }
}

/// Current "is down" information and pointer position
#[derive(Debug, Default, Clone)]
pub struct InputState {
    /// Pointer position in surface coordinates, untranslated
    pub pointer: Vec2,
    pub buttons_down: HashSet<i16>,
    pub keys_down: HashSet<u32>,
}

impl InputState {
    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::MouseMove { x, y } => self.pointer = Vec2::new(x, y),
            InputEvent::MouseDown { button } => {
                self.buttons_down.insert(button);
            }
            InputEvent::MouseUp { button } => {
                self.buttons_down.remove(&button);
            }
            InputEvent::KeyDown { code } => {
                self.keys_down.insert(code);
            }
            InputEvent::KeyUp { code } => {
                self.keys_down.remove(&code);
            }
        }
    }

    pub fn key_down(&self, code: u32) -> bool {
        self.keys_down.contains(&code)
    }

    pub fn button_down(&self, button: i16) -> bool {
        self.buttons_down.contains(&button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_and_keys() {
        let mut input = InputState::default();
        input.apply(&InputEvent::MouseDown { button: 0 });
        input.apply(&InputEvent::KeyDown { code: 37 });
        assert!(input.button_down(0));
        assert!(input.key_down(37));
        assert!(!input.key_down(38));

        input.apply(&InputEvent::MouseUp { button: 0 });
        input.apply(&InputEvent::KeyUp { code: 37 });
        assert!(!input.button_down(0));
        assert!(!input.key_down(37));
    }

    #[test]
    fn test_pointer_tracks_moves() {
        let mut input = InputState::default();
        input.apply(&InputEvent::MouseMove { x: 12.0, y: 34.0 });
        assert_eq!(input.pointer, Vec2::new(12.0, 34.0));
    }
}
