//! The static catalog of document types and their template definitions.

use crate::catalog;
use crate::definition::TemplateDefinition;
use crate::error::{AssembleError, CatalogError};
use scrivener_types::DocumentType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Read-only mapping from document type to template definition.
///
/// Content is static configuration: built at startup (from the builtin
/// catalog, code, or JSON) and never mutated afterwards, so a registry can
/// be shared across threads behind an `Arc` without locking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    definitions: BTreeMap<DocumentType, TemplateDefinition>,
}

impl Registry {
    /// An empty registry; definitions are added with [`with`](Self::with)
    /// or [`insert`](Self::insert).
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in catalog: the schedule forms (witness warrant, the two
    /// search warrants, petition) and the free-content report.
    pub fn builtin() -> Self {
        catalog::builtin()
    }

    /// Builder-style insertion.
    pub fn with(mut self, document_type: DocumentType, definition: TemplateDefinition) -> Self {
        self.insert(document_type, definition);
        self
    }

    /// Inserts or replaces a definition, returning the previous one.
    pub fn insert(
        &mut self,
        document_type: DocumentType,
        definition: TemplateDefinition,
    ) -> Option<TemplateDefinition> {
        self.definitions.insert(document_type, definition)
    }

    /// Looks up the definition for a document type.
    pub fn get(&self, document_type: DocumentType) -> Result<&TemplateDefinition, AssembleError> {
        self.definitions
            .get(&document_type)
            .ok_or_else(|| AssembleError::UnknownDocumentType(document_type.id().to_string()))
    }

    pub fn contains(&self, document_type: DocumentType) -> bool {
        self.definitions.contains_key(&document_type)
    }

    /// Document types with a definition, in variant order.
    pub fn document_types(&self) -> impl Iterator<Item = DocumentType> + '_ {
        self.definitions.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// The startup self-check: every definition must be well-formed and
    /// reference only required or derived fields. Callers construct, then
    /// validate once, then treat the registry as read-only.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (document_type, definition) in &self.definitions {
            definition.check(*document_type)?;
        }
        Ok(())
    }

    /// Parses and validates a catalog from JSON.
    ///
    /// The format is an object keyed by document-type id:
    ///
    /// ```json
    /// {
    ///   "report": {
    ///     "title": "Report",
    ///     "requiredFields": ["content"],
    ///     "paragraphs": ["{content}"]
    ///   }
    /// }
    /// ```
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let registry: Registry = serde_json::from_str(json)?;
        registry.validate()?;
        log::debug!("loaded catalog with {} definition(s)", registry.len());
        Ok(registry)
    }

    /// Serializes the catalog to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_every_document_type() {
        let registry = Registry::builtin();
        for ty in DocumentType::ALL {
            assert!(registry.contains(ty), "missing definition for {ty}");
        }
    }

    #[test]
    fn builtin_passes_the_self_check() {
        Registry::builtin().validate().unwrap();
    }

    #[test]
    fn document_types_iterates_in_variant_order() {
        let registry = Registry::builtin();
        let types: Vec<DocumentType> = registry.document_types().collect();
        assert_eq!(types, DocumentType::ALL);
    }

    #[test]
    fn lookup_miss_names_the_type() {
        let registry = Registry::new();
        let err = registry.get(DocumentType::Petition).unwrap_err();
        assert_eq!(
            err,
            AssembleError::UnknownDocumentType("petition".to_string())
        );
    }

    #[test]
    fn json_round_trip_preserves_the_catalog() {
        let registry = Registry::builtin();
        let json = registry.to_json().unwrap();
        let reloaded = Registry::from_json(&json).unwrap();
        assert_eq!(registry, reloaded);
    }

    #[test]
    fn from_json_rejects_invalid_catalogs() {
        // Unknown document-type key.
        assert!(matches!(
            Registry::from_json(r#"{"decree": {"title": "x", "requiredFields": [], "paragraphs": []}}"#),
            Err(CatalogError::Json(_))
        ));
        // Well-formed JSON, but the template breaks the placeholder invariant.
        let err = Registry::from_json(
            r#"{"report": {"title": "Report", "requiredFields": [], "paragraphs": ["{content}"]}}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::UndefinedPlaceholder { ref name, .. } if name == "content"
        ));
    }
}
