//! Error types for snapshot validation and root resolution

use thiserror::Error;

use crate::model::RecordId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroveError {
    #[error("record {id} references parent {parent}, which is not in the snapshot")]
    DanglingParent { id: RecordId, parent: RecordId },

    #[error("cyclic ancestry: record {id} is its own ancestor")]
    CyclicAncestry { id: RecordId },

    #[error("duplicate record id {0}")]
    DuplicateId(RecordId),

    #[error("record id {0} is reserved as the root sentinel")]
    ReservedId(RecordId),

    #[error("record {0} is not in the snapshot")]
    UnknownRecord(RecordId),

    #[error("resolution cache was built from a different snapshot")]
    StaleCache,

    #[error("total size under root {root} overflows u64")]
    SizeOverflow { root: RecordId },
}

/// Fieldless discriminant of [`GroveError`], carried by a failed query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    DanglingParent,
    CyclicAncestry,
    DuplicateId,
    ReservedId,
    UnknownRecord,
    StaleCache,
    SizeOverflow,
}

impl GroveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GroveError::DanglingParent { .. } => ErrorKind::DanglingParent,
            GroveError::CyclicAncestry { .. } => ErrorKind::CyclicAncestry,
            GroveError::DuplicateId(_) => ErrorKind::DuplicateId,
            GroveError::ReservedId(_) => ErrorKind::ReservedId,
            GroveError::UnknownRecord(_) => ErrorKind::UnknownRecord,
            GroveError::StaleCache => ErrorKind::StaleCache,
            GroveError::SizeOverflow { .. } => ErrorKind::SizeOverflow,
        }
    }
}

pub type Result<T> = std::result::Result<T, GroveError>;
