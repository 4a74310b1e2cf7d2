//! Environment provider for `AUGMENTOR_*` overrides.
//!
//! Wraps `figment::providers::Env` but keeps every value as a string, so
//! `AUGMENTOR_MESSAGE=2024` stays text instead of becoming an integer. The
//! `kinds` key is split on commas into a list, letting
//! `AUGMENTOR_KINDS=class,struct` feed a `Vec<NodeKind>`.

use figment::providers::Env;
use figment::{
    Profile, Provider,
    error::Error,
    util::nest,
    value::{Dict, Map, Value},
};

/// Keys whose values are comma-separated lists.
const LIST_KEYS: &[&str] = &["kinds"];

/// String-only environment provider with comma-separated list keys.
#[derive(Clone)]
pub struct ConfigEnv {
    inner: Env,
}

impl ConfigEnv {
    /// Creates a provider reading variables that start with `prefix`.
    #[must_use]
    pub fn prefixed(prefix: &str) -> Self {
        Env::prefixed(prefix).into()
    }

    /// Skips the listed keys (compared after the prefix is removed).
    #[must_use]
    pub fn ignore(self, keys: &[&str]) -> Self {
        self.inner.ignore(keys).into()
    }

    fn is_list_key(key: &str) -> bool {
        LIST_KEYS.iter().any(|list| list.eq_ignore_ascii_case(key))
    }

    fn parse_value(key: &str, raw: &str) -> Value {
        let trimmed = raw.trim();
        if Self::is_list_key(key) {
            trimmed
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(|item| Value::from(item.to_owned()))
                .collect::<Vec<_>>()
                .into()
        } else {
            Value::from(trimmed.to_owned())
        }
    }
}

impl Provider for ConfigEnv {
    fn metadata(&self) -> figment::Metadata {
        self.inner.metadata()
    }

    fn profile(&self) -> Option<Profile> {
        Some(self.inner.profile.clone())
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let mut dict = Dict::new();
        for (key, raw) in self.inner.iter() {
            let value = Self::parse_value(key.as_str(), &raw);
            let Some(nested) = nest(key.as_str(), value).into_dict() else {
                return Err(Error::from(format!(
                    "environment key `{key}` produced a non-object value"
                )));
            };
            dict.extend(nested);
        }
        Ok(self.inner.profile.collect(dict))
    }
}

impl From<Env> for ConfigEnv {
    fn from(inner: Env) -> Self {
        Self { inner }
    }
}
