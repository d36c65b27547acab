use dioxus::prelude::*;

use crate::usecase::ports::table::SearchTable;

/// The data table driven through its signals; writing either one makes
/// the table's fetch effect run again.
#[derive(Clone, Copy, PartialEq)]
pub struct SignalTable {
    pub search_text: Signal<String>,
    pub request_seq: Signal<u64>,
}

impl SearchTable for SignalTable {
    fn search_text(&self) -> String {
        self.search_text.peek().clone()
    }

    fn refresh(&mut self) {
        *self.request_seq.write() += 1;
    }

    fn reset_search(&mut self, text: &str) {
        self.search_text.set(text.to_string());
        *self.request_seq.write() += 1;
    }
}
