//! In-memory sink used by tests, dry runs, and embedding hosts.

use std::collections::HashMap;

use super::{CollisionPolicy, Encoding, FragmentSink};
use crate::error::SinkError;

/// Stores fragments in registration order, keyed by fragment key.
///
/// With [`CollisionPolicy::Overwrite`] a repeated key replaces the earlier
/// text in place, keeping the position of the first registration.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    policy: CollisionPolicy,
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
    registrations: usize,
}

impl MemorySink {
    /// Creates an empty sink with the given collision policy.
    #[must_use]
    pub fn new(policy: CollisionPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Returns the collision policy.
    #[must_use]
    pub const fn policy(&self) -> CollisionPolicy {
        self.policy
    }

    /// Returns the stored text for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        let position = *self.index.get(key)?;
        self.entries.get(position).map(|(_, text)| text.as_str())
    }

    /// Iterates over `(key, text)` pairs in first-registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, text)| (key.as_str(), text.as_str()))
    }

    /// Returns the number of distinct keys stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns how many registrations were accepted, including overwrites.
    #[must_use]
    pub const fn registrations(&self) -> usize {
        self.registrations
    }
}

impl FragmentSink for MemorySink {
    fn register(&mut self, key: &str, text: &str, encoding: Encoding) -> Result<(), SinkError> {
        match self.index.get(key).copied() {
            Some(position) => {
                if self.policy == CollisionPolicy::Reject {
                    return Err(SinkError::Collision(key.to_owned()));
                }
                tracing::warn!(
                    key,
                    %encoding,
                    "fragment key registered twice; keeping the later text"
                );
                if let Some(entry) = self.entries.get_mut(position) {
                    entry.1 = text.to_owned();
                }
            }
            None => {
                self.index.insert(key.to_owned(), self.entries.len());
                self.entries.push((key.to_owned(), text.to_owned()));
            }
        }
        self.registrations += 1;
        Ok(())
    }
}
