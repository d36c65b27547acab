use askama::Template;

use crate::domain::entities::table::CellFormatter;

#[derive(Template)]
#[template(
    source = r#"<a href="{{ value }}/{{ suffix }}" class="btn btn-sm btn-primary"><i class="fa fa-edit"></i> {{ label }}</a>"#,
    ext = "html"
)]
struct EditActionTemplate<'a> {
    value: &'a str,
    suffix: &'static str,
    label: &'static str,
}

const EDIT_LABEL: &str = "Muokkaa";

/// The value is percent-encoded so it always stays a relative path segment.
fn edit_action(value: &str, suffix: &'static str) -> askama::Result<String> {
    let segment = urlencoding::encode(value);
    EditActionTemplate {
        value: &segment,
        suffix,
        label: EDIT_LABEL,
    }
    .render()
}

/// Products table: links to `<id>/edit`.
pub fn operations_formatter(value: &str) -> askama::Result<String> {
    edit_action(value, "edit")
}

/// Orders table: links to `<id>/order_edit`.
pub fn order_operations_formatter(value: &str) -> askama::Result<String> {
    edit_action(value, "order_edit")
}

pub fn format_cell(formatter: CellFormatter, value: &str) -> askama::Result<String> {
    match formatter {
        CellFormatter::Operations => operations_formatter(value),
        CellFormatter::OrderOperations => order_operations_formatter(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operations_formatter_links_to_edit() {
        let markup = operations_formatter("42").expect("should render");
        assert!(markup.contains(r#"href="42/edit""#), "unexpected markup: {markup}");
        assert!(markup.contains("Muokkaa"), "label should be present");
    }

    #[test]
    fn order_operations_formatter_links_to_order_edit() {
        let markup = order_operations_formatter("42").expect("should render");
        assert!(
            markup.contains(r#"href="42/order_edit""#),
            "unexpected markup: {markup}"
        );
    }

    #[test]
    fn formatter_escapes_markup_in_value() {
        let markup = operations_formatter(r#"1"><b>x"#).expect("should render");
        assert!(!markup.contains("<b>"), "value must not inject tags: {markup}");
        assert!(
            markup.contains(r#"href="1%22%3E%3Cb%3Ex/edit""#),
            "value should be percent-encoded: {markup}"
        );
    }

    #[test]
    fn formatter_keeps_scheme_values_relative() {
        for value in ["javascript:alert(document.cookie)//", "JavaScript:void(0)"] {
            let markup = operations_formatter(value).expect("should render");
            let lowered = markup.to_lowercase();
            assert!(
                !lowered.contains(r#"href="javascript:"#),
                "scheme must not reach href: {markup}"
            );
            assert!(markup.contains("%3A"), "colon should be encoded: {markup}");
        }

        let markup = order_operations_formatter("../admin/1").expect("should render");
        assert!(
            markup.contains(r#"href="..%2Fadmin%2F1/order_edit""#),
            "slashes should be encoded: {markup}"
        );
    }
}
