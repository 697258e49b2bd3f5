//! Keycode token as stored in a Vial backup.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Token Vial writes for a matrix position with no physical key.
pub const EMPTY_TOKEN: &str = "-1";

/// A single key assignment in a layer grid.
///
/// Vial stores unused matrix positions as the integer `-1` (older exports use
/// the string `"-1"`). Both forms deserialize to [`Keycode::Empty`]; every
/// other value is kept verbatim as [`Keycode::Code`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Keycode {
    /// No key at this position.
    Empty,
    /// A QMK keycode identifier (e.g. "KC_A", "MO(1)", "LCTL(KC_C)").
    Code(String),
}

impl Keycode {
    /// Builds a keycode from its token form, mapping `"-1"` to [`Keycode::Empty`].
    pub fn from_token(token: impl Into<String>) -> Self {
        let token = token.into();
        if token == EMPTY_TOKEN {
            Self::Empty
        } else {
            Self::Code(token)
        }
    }

    /// Returns the token form used for equality and renaming.
    #[must_use]
    pub fn as_token(&self) -> &str {
        match self {
            Self::Empty => EMPTY_TOKEN,
            Self::Code(code) => code,
        }
    }

    /// Returns true for the empty-position sentinel.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl fmt::Display for Keycode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl From<&str> for Keycode {
    fn from(token: &str) -> Self {
        Self::from_token(token)
    }
}

/// Raw JSON shapes a keycode cell may take.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawKeycode {
    Int(i64),
    Str(String),
}

impl<'de> Deserialize<'de> for Keycode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawKeycode::deserialize(deserializer)? {
            RawKeycode::Int(-1) => Self::Empty,
            RawKeycode::Int(value) => Self::Code(value.to_string()),
            RawKeycode::Str(token) => Self::from_token(token),
        })
    }
}

impl Serialize for Keycode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Empty => serializer.serialize_i64(-1),
            Self::Code(code) => serializer.serialize_str(code),
        }
    }
}
