//! Output boundary: sinks that accept synthesized fragments.
//!
//! The pipeline never writes files itself. It hands each `(key, text)` pair
//! to a [`FragmentSink`] owned by the host, which decides how keys that occur
//! twice in one pass are treated.

mod memory;

pub use memory::MemorySink;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SinkError;

/// Text encoding announced to a sink alongside each fragment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Encoding {
    /// UTF-8, the only encoding the synthesizer produces.
    #[default]
    #[serde(rename = "utf-8")]
    Utf8,
}

impl Encoding {
    /// Returns the IANA label for the encoding.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a sink treats a key registered more than once in a pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// The later fragment replaces the earlier one.
    #[default]
    Overwrite,
    /// The later fragment is refused with [`SinkError::Collision`].
    Reject,
}

impl CollisionPolicy {
    /// Returns the configuration spelling of the policy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overwrite => "overwrite",
            Self::Reject => "reject",
        }
    }
}

impl FromStr for CollisionPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "overwrite" => Ok(Self::Overwrite),
            "reject" => Ok(Self::Reject),
            other => Err(format!(
                "unknown collision policy '{other}'; expected 'overwrite' or 'reject'"
            )),
        }
    }
}

/// Receives fragments on behalf of the host build.
pub trait FragmentSink {
    /// Registers `text` under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`SinkError`] when the sink refuses or fails to store the
    /// fragment.
    fn register(&mut self, key: &str, text: &str, encoding: Encoding) -> Result<(), SinkError>;
}

impl<S: FragmentSink + ?Sized> FragmentSink for &mut S {
    fn register(&mut self, key: &str, text: &str, encoding: Encoding) -> Result<(), SinkError> {
        (**self).register(key, text, encoding)
    }
}
