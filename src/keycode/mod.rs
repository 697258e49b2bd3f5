//! Keycode labels and classification.
//!
//! Turns raw keycode tokens into the short labels printed on keys and the
//! category that picks their colors. Nothing here checks that a keycode is
//! valid firmware; unknown tokens simply render as `Regular`.

pub mod category;
pub mod display;

pub use category::{classify, color_for, KeyCategory, KeyColors};
pub use display::{simplify, simplify_token};

use crate::models::Keycode;

/// Label and category for a keycode, computed together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyLabel {
    /// Text printed on the key
    pub text: String,
    /// Semantic category of `text`
    pub category: KeyCategory,
}

impl KeyLabel {
    /// Simplifies and classifies a keycode.
    #[must_use]
    pub fn of(keycode: &Keycode) -> Self {
        let text = simplify(keycode);
        let category = classify(&text);
        Self { text, category }
    }
}
