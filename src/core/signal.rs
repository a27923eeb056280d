use std::fmt;

use serde::{Deserialize, Serialize};

/// Tri-state value carried by a wire.
///
/// `Unknown` is a regular value, not an error: it is what every wire holds
/// until something drives it, and it propagates through any gate that reads it.
/// Serialized as `true` / `false` / `null`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum Signal {
    True,
    False,
    #[default]
    Unknown,
}

impl Signal {
    pub fn is_known(self) -> bool {
        !matches!(self, Signal::Unknown)
    }

    pub fn as_bool(self) -> Option<bool> {
        match self {
            Signal::True => Some(true),
            Signal::False => Some(false),
            Signal::Unknown => None,
        }
    }
}

impl From<bool> for Signal {
    fn from(value: bool) -> Self {
        if value { Signal::True } else { Signal::False }
    }
}

impl From<Option<bool>> for Signal {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Signal::Unknown, Signal::from)
    }
}

impl From<Signal> for Option<bool> {
    fn from(signal: Signal) -> Self {
        signal.as_bool()
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::True => write!(f, "1"),
            Signal::False => write!(f, "0"),
            Signal::Unknown => write!(f, "N"),
        }
    }
}
