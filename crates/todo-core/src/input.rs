//! Keyboard Policy
//!
//! Maps raw key events to widget intents. Enter and Escape are ignored while
//! an IME composition is in progress.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    Submit,
    Cancel,
}

impl KeyIntent {
    pub fn from_key(key: &str, is_composing: bool) -> Option<Self> {
        if is_composing {
            return None;
        }
        match key {
            "Enter" => Some(KeyIntent::Submit),
            "Escape" => Some(KeyIntent::Cancel),
            _ => None,
        }
    }
}

/// Title to add for a submitted input value. Blank input adds nothing;
/// anything else is stored exactly as typed.
pub fn submitted_title(value: &str) -> Option<&str> {
    (!value.trim().is_empty()).then_some(value)
}
