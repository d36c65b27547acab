use dioxus::prelude::*;
use tracing::warn;

use crate::domain::entities::table::{cell_text, TableKind, TablePage};
use crate::domain::entities::widget::ADVANCED_SEARCH_BUTTON;
use crate::ui::render::cells::format_cell;

pub fn table_header_cell_style() -> &'static str {
    "position: sticky; top: 0; background: #f7f7f7; border: 1px solid #ddd; padding: 6px 8px; text-align: left; white-space: nowrap;"
}

pub fn table_cell_style() -> &'static str {
    "border: 1px solid #ddd; padding: 6px 8px; vertical-align: top;"
}

#[component]
pub fn DataTable(
    kind: TableKind,
    page: TablePage,
    mut search_text: Signal<String>,
    on_open_advanced: EventHandler<()>,
) -> Element {
    let columns = kind.columns();
    let total = page.total;
    let shown = page.rows.len();
    let current_search = search_text();
    let toolbar_button = ADVANCED_SEARCH_BUTTON;
    let button_icon = format!("fa {}", toolbar_button.icon);
    let button_target = format!("#{}", toolbar_button.modal_target);
    let button_text = toolbar_button.text;
    let column_count = columns.len();

    rsx! {
        div {
            id: "table",
            div {
                class: "bootstrap-table-toolbar",
                style: "display: flex; gap: 8px; align-items: center; margin: 8px 0;",
                input {
                    class: "search-input",
                    r#type: "search",
                    placeholder: "Hae",
                    style: "padding: 4px 8px; border: 1px solid #bbb; border-radius: 6px; min-width: 240px;",
                    value: "{current_search}",
                    oninput: move |event| search_text.set(event.value()),
                }
                if kind.supports_advanced_search() {
                    button {
                        id: toolbar_button.id,
                        title: toolbar_button.title,
                        r#type: "button",
                        "data-toggle": "modal",
                        "data-target": "{button_target}",
                        style: "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;",
                        onclick: move |_| on_open_advanced.call(()),
                        i { class: "{button_icon}" }
                        " {button_text}"
                    }
                }
                span { style: "margin-left: auto; color: #555;", "Näytetään {shown} / {total} riviä" }
            }

            div {
                style: "overflow: auto; max-height: 70vh;",
                table {
                    style: "border-collapse: collapse; width: 100%;",
                    thead {
                        tr {
                            {columns.iter().map(|column| {
                                let title = column.title;
                                rsx!( th { style: table_header_cell_style(), "{title}" } )
                            })}
                        }
                    }
                    tbody {
                        if page.rows.is_empty() {
                            tr {
                                td {
                                    colspan: "{column_count}",
                                    style: table_cell_style(),
                                    "Ei hakutuloksia"
                                }
                            }
                        }
                        {page.rows.iter().enumerate().map(|(row_idx, row)| {
                            rsx!(
                                tr {
                                    key: "{row_idx}",
                                    {columns.iter().map(|column| {
                                        let text = cell_text(row, column.field);
                                        match column.formatter {
                                            Some(formatter) => match format_cell(formatter, &text) {
                                                Ok(markup) => rsx!(
                                                    td { style: table_cell_style(), dangerous_inner_html: "{markup}" }
                                                ),
                                                Err(err) => {
                                                    warn!(error = %err, field = column.field, "cell formatter failed");
                                                    rsx!( td { style: table_cell_style(), "{text}" } )
                                                }
                                            },
                                            None => rsx!( td { style: table_cell_style(), "{text}" } ),
                                        }
                                    })}
                                }
                            )
                        })}
                    }
                }
            }
        }
    }
}
