use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::engine::Algorithm;

/// Everything the user can ask the controller to do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intent {
    TogglePause,
    Reset,
    Select(Algorithm),
    ReturnToMenu,
    Quit,
    SetSpeed(f32),
}

/// Widget values read back from the overlay once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WidgetOutput {
    pub speed: f32,
    pub menu_pressed: bool,
}

pub fn from_key(key: KeyCode) -> Option<Intent> {
    match key {
        KeyCode::Space => Some(Intent::TogglePause),
        KeyCode::KeyR => Some(Intent::Reset),
        KeyCode::Digit1 | KeyCode::Numpad1 => Some(Intent::Select(Algorithm::Selection)),
        KeyCode::Digit2 | KeyCode::Numpad2 => Some(Intent::Select(Algorithm::Bubble)),
        KeyCode::KeyQ => Some(Intent::Quit),
        _ => None,
    }
}

pub fn from_key_event(event: &KeyEvent) -> Option<Intent> {
    from_key_state(event.state, event.repeat, event.physical_key)
}

/// Key presses only; releases and auto-repeat are ignored.
pub fn from_key_state(state: ElementState, repeat: bool, key: PhysicalKey) -> Option<Intent> {
    if state != ElementState::Pressed || repeat {
        return None;
    }
    match key {
        PhysicalKey::Code(code) => from_key(code),
        PhysicalKey::Unidentified(_) => None,
    }
}

pub fn from_widgets(output: WidgetOutput, current_speed: f32) -> Vec<Intent> {
    let mut intents = Vec::new();
    if output.speed != current_speed {
        intents.push(Intent::SetSpeed(output.speed));
    }
    if output.menu_pressed {
        intents.push(Intent::ReturnToMenu);
    }
    intents
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_control_keys() {
        assert_eq!(from_key(KeyCode::Space), Some(Intent::TogglePause));
        assert_eq!(from_key(KeyCode::KeyR), Some(Intent::Reset));
        assert_eq!(from_key(KeyCode::Digit1), Some(Intent::Select(Algorithm::Selection)));
        assert_eq!(from_key(KeyCode::Digit2), Some(Intent::Select(Algorithm::Bubble)));
        assert_eq!(from_key(KeyCode::KeyQ), Some(Intent::Quit));
        assert_eq!(from_key(KeyCode::KeyX), None);
    }

    #[test]
    fn only_fresh_presses_count() {
        let space = PhysicalKey::Code(KeyCode::Space);
        assert_eq!(
            from_key_state(ElementState::Pressed, false, space),
            Some(Intent::TogglePause)
        );
        assert_eq!(from_key_state(ElementState::Released, false, space), None);
        assert_eq!(from_key_state(ElementState::Pressed, true, space), None);
    }

    #[test]
    fn unidentified_keys_are_ignored() {
        let key = PhysicalKey::Unidentified(winit::keyboard::NativeKeyCode::Unidentified);
        assert_eq!(from_key_state(ElementState::Pressed, false, key), None);
    }

    #[test]
    fn unchanged_widgets_produce_nothing() {
        let output = WidgetOutput { speed: 30.0, menu_pressed: false };
        assert!(from_widgets(output, 30.0).is_empty());
    }

    #[test]
    fn slider_and_button_become_intents() {
        let output = WidgetOutput { speed: 12.0, menu_pressed: true };
        assert_eq!(
            from_widgets(output, 30.0),
            vec![Intent::SetSpeed(12.0), Intent::ReturnToMenu]
        );
    }
}
