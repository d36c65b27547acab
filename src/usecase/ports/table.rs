/// Handle on the data table as seen by the search handlers.
pub trait SearchTable {
    fn search_text(&self) -> String;
    /// Re-run the current query with freshly built parameters.
    fn refresh(&mut self);
    /// Replace the search text and re-run the query.
    fn reset_search(&mut self, text: &str);
}
