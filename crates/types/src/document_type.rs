//! The closed set of document types the assembly core knows about.
//!
//! Identifiers are fixed at build time. Adding a document type means adding a
//! variant here and a template definition to the catalog, never touching
//! assembly logic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier selecting which legal-document template to render.
///
/// The string form is the kebab-case id used in catalogs, filenames and the
/// CLI (`"witness-warrant"`, `"search-warrant-particular-offence"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentType {
    WitnessWarrant,
    SearchWarrantParticularOffence,
    SearchWarrantPlaceOfDeposit,
    Petition,
    Report,
}

impl DocumentType {
    /// Every supported document type, in catalog order.
    pub const ALL: [DocumentType; 5] = [
        DocumentType::WitnessWarrant,
        DocumentType::SearchWarrantParticularOffence,
        DocumentType::SearchWarrantPlaceOfDeposit,
        DocumentType::Petition,
        DocumentType::Report,
    ];

    /// Returns the stable kebab-case id of this document type.
    pub fn id(&self) -> &'static str {
        match self {
            DocumentType::WitnessWarrant => "witness-warrant",
            DocumentType::SearchWarrantParticularOffence => "search-warrant-particular-offence",
            DocumentType::SearchWarrantPlaceOfDeposit => "search-warrant-place-of-deposit",
            DocumentType::Petition => "petition",
            DocumentType::Report => "report",
        }
    }

    /// Looks up a document type by its kebab-case id.
    pub fn from_id(id: &str) -> Option<DocumentType> {
        DocumentType::ALL.into_iter().find(|ty| ty.id() == id)
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when parsing an id outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDocumentTypeError {
    id: String,
}

impl ParseDocumentTypeError {
    /// The id that failed to parse.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for ParseDocumentTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown document type '{}'", self.id)
    }
}

impl std::error::Error for ParseDocumentTypeError {}

impl FromStr for DocumentType {
    type Err = ParseDocumentTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentType::from_id(s).ok_or_else(|| ParseDocumentTypeError { id: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for ty in DocumentType::ALL {
            assert_eq!(ty.id().parse::<DocumentType>(), Ok(ty));
            assert_eq!(ty.to_string(), ty.id());
        }
    }

    #[test]
    fn unknown_id_is_rejected() {
        let err = "unknown-type".parse::<DocumentType>().unwrap_err();
        assert_eq!(err.id(), "unknown-type");
    }
}
