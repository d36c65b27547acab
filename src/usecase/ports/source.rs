use crate::domain::entities::search::TableRequest;
use crate::domain::entities::table::{TableKind, TablePage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    Unavailable(String),
    Malformed(String),
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::Unavailable(message) => write!(f, "rivit eivät ole saatavilla: {message}"),
            SourceError::Malformed(message) => write!(f, "virheellinen vastaus: {message}"),
        }
    }
}

impl std::error::Error for SourceError {}

pub trait RowSource: Send + Sync {
    fn fetch(&self, table: TableKind, request: &TableRequest) -> Result<TablePage, SourceError>;
}
