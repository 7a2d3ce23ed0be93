pub mod document;
pub mod document_type;
pub mod fields;

pub use document::RenderedDocument;
pub use document_type::{DocumentType, ParseDocumentTypeError};
pub use fields::FieldValues;
