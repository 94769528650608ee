use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Snapshot parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate pal id: {0}")]
    DuplicateId(String),

    #[error("Snapshot contains no pals")]
    Empty,
}
