use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::entities::search::TableRequest;
use crate::domain::entities::table::{TableKind, TablePage};
use crate::usecase::ports::source::{RowSource, SourceError};

/// Serves a saved endpoint response as-is; no filtering or paging.
pub struct JsonFileSource {
    pub products: Option<PathBuf>,
    pub orders: Option<PathBuf>,
}

impl JsonFileSource {
    fn path_for(&self, table: TableKind) -> Option<&Path> {
        match table {
            TableKind::Products => self.products.as_deref(),
            TableKind::Orders => self.orders.as_deref(),
        }
    }
}

pub fn read_table_page(path: &Path) -> Result<TablePage, SourceError> {
    let text = std::fs::read_to_string(path)
        .map_err(|err| SourceError::Unavailable(format!("{}: {err}", path.display())))?;
    serde_json::from_str(&text)
        .map_err(|err| SourceError::Malformed(format!("{}: {err}", path.display())))
}

impl RowSource for JsonFileSource {
    fn fetch(&self, table: TableKind, _request: &TableRequest) -> Result<TablePage, SourceError> {
        match self.path_for(table) {
            Some(path) => {
                debug!(path = %path.display(), "reading rows");
                read_table_page(path)
            }
            None => Ok(TablePage::default()),
        }
    }
}
