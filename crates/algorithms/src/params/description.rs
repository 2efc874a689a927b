//! Line-oriented `key value` parameter text
//!
//! ```text
//! # comment
//! type a
//! q 8780710799663312522437781984754049815806883199414208211028653399266475630880222957078625179422662221423155858769582317459277713367317481324925129998224791
//! ```
//!
//! Blank lines and everything after `#` are ignored. The first key must be
//! `type` and no key may repeat.

use core::fmt;
use core::str::FromStr;

use tracing::debug;

use crate::bigint::BigInt;
use crate::error::{Error, Result};

/// Parsed `key value` pairs in their original order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Description {
    entries: Vec<(String, String)>,
}

impl Description {
    /// Split parameter text into entries
    pub fn parse(text: &str) -> Result<Self> {
        let mut entries: Vec<(String, String)> = Vec::new();
        for (lineno, raw) in text.lines().enumerate() {
            let line = match raw.find('#') {
                Some(pos) => &raw[..pos],
                None => raw,
            };
            let mut tokens = line.split_whitespace();
            let key = match tokens.next() {
                Some(k) => k,
                None => continue,
            };
            let value = tokens.next().ok_or_else(|| {
                Error::malformed(key.to_string(), format!("line {}: missing value", lineno + 1))
            })?;
            if tokens.next().is_some() {
                return Err(Error::malformed(
                    key.to_string(),
                    format!("line {}: expected a single value", lineno + 1),
                ));
            }
            if entries.iter().any(|(k, _)| k == key) {
                return Err(Error::malformed(key.to_string(), "duplicate key"));
            }
            if entries.is_empty() && key != "type" {
                return Err(Error::malformed(key.to_string(), "first key must be 'type'"));
            }
            entries.push((key.to_string(), value.to_string()));
        }
        if entries.is_empty() {
            return Err(Error::malformed("type", "empty parameter text"));
        }
        debug!(entries = entries.len(), "parsed parameter description");
        Ok(Self { entries })
    }

    /// Build from entries, `type` first
    pub fn from_entries<I, K, V>(kind: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut all = vec![("type".to_string(), kind.to_string())];
        all.extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        Self { entries: all }
    }

    /// The value of `type`
    pub fn kind(&self) -> &str {
        self.get("type").unwrap_or_default()
    }

    /// Value of a key, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All entries in order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Keys not in `known`, for diagnostics
    pub fn unknown_keys<'a>(&'a self, known: &'a [&'a str]) -> impl Iterator<Item = &'a str> {
        self.entries
            .iter()
            .map(|(k, _)| k.as_str())
            .filter(move |k| *k != "type" && !known.iter().any(|x| x == k))
    }

    fn require(&self, key: &'static str) -> Result<&str> {
        self.get(key)
            .ok_or_else(|| Error::malformed(key, "missing required key"))
    }

    /// A required integer value
    pub fn integer(&self, key: &'static str) -> Result<BigInt> {
        BigInt::from_str(self.require(key)?)
            .map_err(|_| Error::malformed(key, "not an integer"))
    }

    /// A required integer value that fits a machine word
    pub fn small_integer(&self, key: &'static str) -> Result<i64> {
        self.require(key)?
            .parse::<i64>()
            .map_err(|_| Error::malformed(key, "not a small integer"))
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, v) in &self.entries {
            writeln!(f, "{} {}", k, v)?;
        }
        Ok(())
    }
}
