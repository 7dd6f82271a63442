use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    #[error("record not found")]
    NotFound,

    #[error("caller has no company to write into")]
    MissingCompany,
}
