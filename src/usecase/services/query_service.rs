use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::search::TableRequest;
use crate::domain::entities::search_form::SearchFormState;
use crate::domain::entities::table::{TableKind, TablePage};
use crate::usecase::ports::source::{RowSource, SourceError};
use crate::usecase::services::search_service::build_query_params;

#[derive(Debug, Clone, PartialEq)]
pub struct FetchResult {
    pub url: String,
    pub page: Result<TablePage, SourceError>,
}

pub struct QueryService {
    source: Arc<dyn RowSource>,
    server_url: String,
    page_size: u32,
}

impl QueryService {
    pub fn new(source: Arc<dyn RowSource>, server_url: impl Into<String>, page_size: u32) -> Self {
        Self {
            source,
            server_url: server_url.into(),
            page_size,
        }
    }

    pub fn build_request(
        &self,
        table: TableKind,
        search: &str,
        form: &SearchFormState,
    ) -> TableRequest {
        let request = TableRequest::new(search, self.page_size);
        if table.supports_advanced_search() {
            build_query_params(request, form)
        } else {
            request
        }
    }

    pub fn fetch(&self, table: TableKind, search: &str, form: &SearchFormState) -> FetchResult {
        let request = self.build_request(table, search, form);
        let url = request.to_url(&self.server_url, table.endpoint());
        debug!(%url, "table request");
        let page = self.source.fetch(table, &request);
        if let Err(err) = &page {
            warn!(error = %err, table = table.endpoint(), "row source failed");
        }
        FetchResult { url, page }
    }
}
