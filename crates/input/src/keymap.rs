//! Key mapping from key-down events to lane actions.

use crate::action::Action;

/// Key identity carried by a key-down event.
///
/// Mirrors the logical key of the platform event: named arrow keys, or the
/// character the key produces with the current layout and modifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Character(String),
    Other,
}

impl Key {
    pub fn character(c: char) -> Self {
        Key::Character(c.to_string())
    }
}

/// Map a key-down to its lane action, if any.
pub fn action_for_key(key: &Key) -> Option<Action> {
    match key {
        Key::ArrowLeft => Some(Action::LaneLeft),
        Key::ArrowRight => Some(Action::LaneRight),
        Key::Character(s) => match s.as_str() {
            "a" | "A" => Some(Action::LaneLeft),
            "d" | "D" => Some(Action::LaneRight),
            _ => None,
        },
        Key::Other => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_keys() {
        assert_eq!(action_for_key(&Key::ArrowLeft), Some(Action::LaneLeft));
        assert_eq!(action_for_key(&Key::character('a')), Some(Action::LaneLeft));
        assert_eq!(action_for_key(&Key::character('A')), Some(Action::LaneLeft));
    }

    #[test]
    fn right_keys() {
        assert_eq!(action_for_key(&Key::ArrowRight), Some(Action::LaneRight));
        assert_eq!(action_for_key(&Key::character('d')), Some(Action::LaneRight));
        assert_eq!(action_for_key(&Key::character('D')), Some(Action::LaneRight));
    }

    #[test]
    fn unrelated_keys_map_to_nothing() {
        assert_eq!(action_for_key(&Key::character('w')), None);
        assert_eq!(action_for_key(&Key::Character("ad".into())), None);
        assert_eq!(action_for_key(&Key::Other), None);
    }
}
