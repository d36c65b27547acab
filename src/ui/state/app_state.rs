use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::alert::{AlertBoard, AlertId};
use crate::domain::entities::search_form::SearchFormState;
use crate::domain::entities::table::{TableKind, TablePage};
use crate::infra::config::app_config::AppConfig;
use crate::ui::table::signal_table::SignalTable;

pub struct AppState {
    pub active_table: Signal<TableKind>,
    pub search_text: Signal<String>,
    pub request_seq: Signal<u64>,
    pub search_form: Signal<SearchFormState>,
    pub page: Signal<TablePage>,
    pub request_url: Signal<String>,
    pub alerts: Signal<AlertBoard>,
    /// Open row-source failure banner, rewritten on each new failure.
    pub failure_alert: Signal<Option<AlertId>>,
    pub show_advanced: Signal<bool>,
    pub window_focused: Signal<bool>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let options = config.search_options.by_field();
        Self {
            active_table: use_signal(|| TableKind::Products),
            search_text: use_signal(String::new),
            request_seq: use_signal(|| 0_u64),
            search_form: use_signal(move || SearchFormState::with_options(options)),
            page: use_signal(TablePage::default),
            request_url: use_signal(String::new),
            alerts: use_signal(AlertBoard::default),
            failure_alert: use_signal(|| None),
            show_advanced: use_signal(|| false),
            window_focused: use_signal(|| false),
            status: use_signal(|| "Valmis".to_string()),
        }
    }

    pub fn table(&self) -> SignalTable {
        SignalTable {
            search_text: self.search_text,
            request_seq: self.request_seq,
        }
    }
}
