use thiserror::Error;

use crate::model::EncodingKind;

/// Defects in the compiled-in catalog data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("no instruction type named {name:?}")]
    UnknownInstructionType { name: &'static str },

    #[error("encoding kind {0} has no table layout")]
    UnsupportedEncoding(EncodingKind),
}
