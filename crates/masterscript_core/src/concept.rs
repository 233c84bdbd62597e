//! Story concept entered by the user.

use masterscript_error::{ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};

/// A non-blank story concept.
///
/// Holding a `Concept` proves the text was checked, so the generation client
/// never issues a request for a doomed blank prompt.
///
/// # Examples
///
/// ```
/// use masterscript_core::Concept;
///
/// let concept = Concept::parse("  tea-stall dispute \n").unwrap();
/// assert_eq!(concept.as_str(), "tea-stall dispute");
///
/// assert!(Concept::parse(" \t ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(try_from = "String", into = "String")]
pub struct Concept(String);

impl Concept {
    /// Validate raw input, trimming surrounding whitespace.
    #[track_caller]
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::BlankConcept));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The concept text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Concept {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Concept> for String {
    fn from(concept: Concept) -> Self {
        concept.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_whitespace_only() {
        for raw in ["", " ", "\n\t  ", "\u{3000}"] {
            let err = Concept::parse(raw).unwrap_err();
            assert_eq!(err.kind, ValidationErrorKind::BlankConcept);
        }
    }

    #[test]
    fn keeps_inner_whitespace() {
        let concept = Concept::parse(" গ্রামের  প্রথম ফ্রিল্যান্সার ").unwrap();
        assert_eq!(concept.as_str(), "গ্রামের  প্রথম ফ্রিল্যান্সার");
    }

    #[test]
    fn deserializing_blank_fails() {
        assert!(serde_json::from_str::<Concept>("\"   \"").is_err());
        let concept: Concept = serde_json::from_str("\"drought\"").unwrap();
        assert_eq!(concept.to_string(), "drought");
    }
}
