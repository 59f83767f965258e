use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// An opaque snippet identifier.
///
/// Generated identifiers are random 128-bit UUIDs rendered in the
/// canonical hyphenated form. Identifiers carry no ordering semantics;
/// lexical order is used only as a deterministic sort tie-break.
///
/// Because the identifier becomes a file name in the snippets
/// directory, externally supplied values are validated to 1-64
/// characters of `[a-zA-Z0-9_-]` so an identifier can never escape the
/// directory as a path component.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnippetId(String);

const MAX_LENGTH: usize = 64;

impl SnippetId {
    /// Generates a fresh random identifier (UUIDv4, hyphenated).
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Creates a `SnippetId` after validating the input.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        Self::validate(&id)?;
        Ok(Self(id))
    }

    /// Creates a `SnippetId` without validation.
    ///
    /// Use this only for identifiers produced by trusted internal
    /// sources (e.g. read back from a store the service itself wrote).
    pub fn new_unchecked(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(id: &str) -> Result<()> {
        if id.is_empty() || id.len() > MAX_LENGTH {
            return Err(CoreError::InvalidSnippetId(format!(
                "length must be between 1 and {}, got {}",
                MAX_LENGTH,
                id.len()
            )));
        }

        if !id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(CoreError::InvalidSnippetId(format!(
                "must contain only alphanumeric characters, hyphens, or underscores: '{}'",
                id
            )));
        }

        Ok(())
    }
}

impl Display for SnippetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
