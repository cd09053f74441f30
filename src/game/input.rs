use crossterm::event::KeyCode;

use super::state::Controls;
use crate::config::KeyBindings;
use crate::debug;

/// The four directional bindings plus quit, resolved from the config's
/// binding strings to concrete key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMap {
    pub left_up: KeyCode,
    pub left_down: KeyCode,
    pub right_up: KeyCode,
    pub right_down: KeyCode,
    pub quit: KeyCode,
}

impl KeyMap {
    pub fn resolve(bindings: &KeyBindings) -> Self {
        Self {
            left_up: resolve_binding(&bindings.left_up, KeyCode::Char('w'), "left_up"),
            left_down: resolve_binding(&bindings.left_down, KeyCode::Char('s'), "left_down"),
            right_up: resolve_binding(&bindings.right_up, KeyCode::Up, "right_up"),
            right_down: resolve_binding(&bindings.right_down, KeyCode::Down, "right_down"),
            quit: resolve_binding(&bindings.quit, KeyCode::Char('q'), "quit"),
        }
    }

    /// Applies one key transition to the control flags. At most one flag
    /// changes per call; keys outside the four bindings are silently ignored.
    pub fn apply_transition(&self, controls: &mut Controls, code: KeyCode, is_down: bool) {
        if key_eq(self.left_up, code) {
            controls.left_up = is_down;
        } else if key_eq(self.left_down, code) {
            controls.left_down = is_down;
        } else if key_eq(self.right_up, code) {
            controls.right_up = is_down;
        } else if key_eq(self.right_down, code) {
            controls.right_down = is_down;
        }
    }

    pub fn is_quit(&self, code: KeyCode) -> bool {
        key_eq(self.quit, code) || code == KeyCode::Esc
    }
}

fn resolve_binding(name: &str, fallback: KeyCode, slot: &str) -> KeyCode {
    match parse_key(name) {
        Some(code) => code,
        None => {
            debug::log(
                "KEYMAP",
                &format!("Unrecognized binding {name:?} for {slot}, using default"),
            );
            fallback
        }
    }
}

/// Parses a config binding string: a named key ("Up", "Enter", ...) or a
/// single character. Character keys match either case.
fn parse_key(name: &str) -> Option<KeyCode> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(c.to_ascii_lowercase()));
    }

    match name.to_ascii_lowercase().as_str() {
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "enter" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "space" => Some(KeyCode::Char(' ')),
        "tab" => Some(KeyCode::Tab),
        "backspace" => Some(KeyCode::Backspace),
        _ => None,
    }
}

fn key_eq(binding: KeyCode, code: KeyCode) -> bool {
    match (binding, code) {
        (KeyCode::Char(a), KeyCode::Char(b)) => a.eq_ignore_ascii_case(&b),
        _ => binding == code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_map() -> KeyMap {
        KeyMap::resolve(&KeyBindings::default())
    }

    #[test]
    fn test_default_bindings_resolve() {
        let map = default_map();

        assert_eq!(map.left_up, KeyCode::Char('w'));
        assert_eq!(map.left_down, KeyCode::Char('s'));
        assert_eq!(map.right_up, KeyCode::Up);
        assert_eq!(map.right_down, KeyCode::Down);
        assert_eq!(map.quit, KeyCode::Char('q'));
    }

    #[test]
    fn test_bad_binding_falls_back_to_default() {
        let bindings = KeyBindings {
            left_up: "NotAKey".to_string(),
            ..KeyBindings::default()
        };

        let map = KeyMap::resolve(&bindings);

        assert_eq!(map.left_up, KeyCode::Char('w'));
    }

    #[test]
    fn test_transition_sets_and_clears_one_flag() {
        let map = default_map();
        let mut controls = Controls::default();

        map.apply_transition(&mut controls, KeyCode::Char('w'), true);
        assert!(controls.left_up);
        assert!(!controls.left_down && !controls.right_up && !controls.right_down);

        map.apply_transition(&mut controls, KeyCode::Char('w'), false);
        assert_eq!(controls, Controls::default());
    }

    #[test]
    fn test_character_bindings_match_either_case() {
        let map = default_map();
        let mut controls = Controls::default();

        map.apply_transition(&mut controls, KeyCode::Char('W'), true);
        assert!(controls.left_up);

        map.apply_transition(&mut controls, KeyCode::Char('S'), true);
        assert!(controls.left_down);
    }

    #[test]
    fn test_each_binding_drives_its_own_flag() {
        let map = default_map();
        let mut controls = Controls::default();

        map.apply_transition(&mut controls, KeyCode::Up, true);
        map.apply_transition(&mut controls, KeyCode::Down, true);
        assert!(controls.right_up && controls.right_down);
        assert!(!controls.left_up && !controls.left_down);

        map.apply_transition(&mut controls, KeyCode::Up, false);
        assert!(!controls.right_up && controls.right_down);
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let map = default_map();
        let mut controls = Controls::default();

        map.apply_transition(&mut controls, KeyCode::Char('x'), true);
        map.apply_transition(&mut controls, KeyCode::Enter, true);

        assert_eq!(controls, Controls::default());
    }

    #[test]
    fn test_named_keys_parse() {
        assert_eq!(parse_key("Up"), Some(KeyCode::Up));
        assert_eq!(parse_key("escape"), Some(KeyCode::Esc));
        assert_eq!(parse_key("Space"), Some(KeyCode::Char(' ')));
        assert_eq!(parse_key("W"), Some(KeyCode::Char('w')));
        assert_eq!(parse_key("definitely-not-a-key"), None);
    }

    #[test]
    fn test_quit_matches_configured_key_and_esc() {
        let map = default_map();

        assert!(map.is_quit(KeyCode::Char('q')));
        assert!(map.is_quit(KeyCode::Char('Q')));
        assert!(map.is_quit(KeyCode::Esc));
        assert!(!map.is_quit(KeyCode::Char('w')));
    }
}
