//! Resource identifiers and the codec between their string and typed forms.
//!
//! The external form of an identifier is a string such as `"42"`,
//! `"42/_history/3"` or `"PlanDefinition/42/_history/3"`. Internally it is a
//! [`ResourceId`]: a numeric [`ResourceKey`] plus an optional
//! [`VersionLabel`] addressing one revision of that key's history.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IdError;

/// Path segment separating the key from a version label.
pub const HISTORY_SEGMENT: &str = "/_history/";

/// Numeric key naming one version history.
///
/// Keys are handed out by the store's counter starting at 1 and are never
/// reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceKey(u64);

impl ResourceKey {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for ResourceKey {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque label identifying one revision within a history.
///
/// Labels are compared byte-for-byte; the codec never normalizes them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionLabel(String);

impl VersionLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Label for the revision at 1-based position `ordinal` in a history.
    pub fn ordinal(ordinal: usize) -> Self {
        Self(ordinal.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VersionLabel {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl fmt::Display for VersionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A key, optionally pinned to a specific revision.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceId {
    pub key: ResourceKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<VersionLabel>,
}

impl ResourceId {
    /// Identifier addressing the latest revision of `key`.
    pub fn latest(key: u64) -> Self {
        Self {
            key: ResourceKey(key),
            version: None,
        }
    }

    /// Identifier addressing the revision of `key` labelled `version`.
    pub fn versioned(key: u64, version: impl Into<VersionLabel>) -> Self {
        Self {
            key: ResourceKey(key),
            version: Some(version.into()),
        }
    }

    pub fn has_version(&self) -> bool {
        self.version.is_some()
    }

    /// Drop the version part, keeping the key.
    pub fn unversioned(&self) -> Self {
        Self {
            key: self.key,
            version: None,
        }
    }

    /// Format with a leading resource type, e.g. `PlanDefinition/1/_history/2`.
    pub fn qualified(&self, resource_type: &str) -> String {
        format!("{resource_type}/{}", format_identifier(self))
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}{HISTORY_SEGMENT}{version}", self.key),
            None => write!(f, "{}", self.key),
        }
    }
}

impl FromStr for ResourceId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_identifier(s)
    }
}

/// Parse an identifier string into its key and optional version label.
///
/// Accepts `<key>`, `<key>/_history/<label>`, and either form prefixed by a
/// `<ResourceType>/` segment. The key must be an unsigned base-10 integer.
/// The label is returned exactly as supplied and must not be empty.
///
/// # Examples
///
/// ```
/// use revstore_types::id::{parse_identifier, ResourceId};
///
/// assert_eq!(parse_identifier("7").unwrap(), ResourceId::latest(7));
/// assert_eq!(
///     parse_identifier("PlanDefinition/7/_history/2").unwrap(),
///     ResourceId::versioned(7, "2"),
/// );
/// assert!(parse_identifier("seven").is_err());
/// ```
pub fn parse_identifier(raw: &str) -> Result<ResourceId, IdError> {
    let (head, version) = match raw.split_once(HISTORY_SEGMENT) {
        Some((_, "")) => return Err(IdError::invalid(raw, "version label must not be empty")),
        Some((head, label)) => (head, Some(VersionLabel::new(label))),
        None => (raw, None),
    };

    let key_part = match head.rsplit_once('/') {
        Some((resource_type, key)) => {
            validate_resource_type(raw, resource_type)?;
            key
        }
        None => head,
    };

    Ok(ResourceId {
        key: parse_key(raw, key_part)?,
        version,
    })
}

/// Format an identifier as `<key>` or `<key>/_history/<label>`.
pub fn format_identifier(id: &ResourceId) -> String {
    id.to_string()
}

fn parse_key(raw: &str, key: &str) -> Result<ResourceKey, IdError> {
    // `u64::from_str` tolerates a leading '+', which is not a valid id.
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IdError::invalid(raw, format!("key {key:?} is not a base-10 integer")));
    }
    key.parse::<u64>()
        .map(ResourceKey)
        .map_err(|e| IdError::invalid(raw, format!("key {key:?}: {e}")))
}

fn validate_resource_type(raw: &str, resource_type: &str) -> Result<(), IdError> {
    let mut chars = resource_type.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric());
    if valid {
        Ok(())
    } else {
        Err(IdError::invalid(
            raw,
            format!("resource type {resource_type:?} is not a plain name"),
        ))
    }
}
