use tracing::debug;

use crate::domain::entities::search::{
    AdvancedSearchParams, MultiValue, RangeValue, TableRequest, SEARCH_PLACEHOLDER,
};
use crate::domain::entities::search::{MultiSelectField, RangeField};
use crate::domain::entities::search_form::SearchFormState;
use crate::usecase::ports::table::SearchTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Refreshed,
    Reset,
}

/// Handler for `#advancedSearchSubmit`: exactly one table call per activation.
pub fn toggle_advanced_search<T: SearchTable + ?Sized>(table: &mut T) -> ToggleOutcome {
    if table.search_text() == SEARCH_PLACEHOLDER {
        debug!("advanced search active, refreshing");
        table.refresh();
        ToggleOutcome::Refreshed
    } else {
        debug!("switching table to advanced search");
        table.reset_search(SEARCH_PLACEHOLDER);
        ToggleOutcome::Reset
    }
}

/// Query-params hook: folds the current form state into `request`.
pub fn build_query_params(mut request: TableRequest, form: &SearchFormState) -> TableRequest {
    let mut advanced = AdvancedSearchParams {
        regex_search: form.regex_search.clone(),
        ignore_case: form.ignore_case,
        ..AdvancedSearchParams::default()
    };
    for field in RangeField::ALL {
        let input = form.range(field);
        *advanced.range_mut(field) = RangeValue::new(input.lower, input.upper);
    }
    for field in MultiSelectField::ALL {
        *advanced.multi_mut(field) = MultiValue(form.checked_values(field));
    }
    request.advanced = Some(advanced);
    request
}
