use dioxus::prelude::*;

use crate::domain::entities::search::{MultiSelectField, RangeField};
use crate::domain::entities::search_form::SearchFormState;
use crate::domain::entities::widget::{DatePickerConfig, SelectPickerConfig};
use crate::ui::components::date_picker::DatePicker;
use crate::ui::components::select_picker::SelectPicker;

const LABEL_STYLE: &str = "display: inline-block; width: 120px; font-weight: 600;";
const INPUT_STYLE: &str = "width: 120px; padding: 4px 6px; border: 1px solid #bbb; border-radius: 4px;";

#[component]
fn RangeRow(field: RangeField, mut form: Signal<SearchFormState>) -> Element {
    let current = form.read().range(field);
    let label = field.label();
    let lower_id = field.lower_id();
    let upper_id = field.upper_id();
    let lower_value = current.lower.clone();
    let upper_value = current.upper.clone();

    if field.is_date() {
        let config = DatePickerConfig::range();
        return rsx! {
            div {
                class: "input-daterange",
                style: "display: flex; align-items: center; gap: 6px; margin: 6px 0;",
                span { style: LABEL_STYLE, "{label}" }
                DatePicker {
                    id: lower_id.to_string(),
                    value: lower_value.clone(),
                    config,
                    on_change: move |value: String| form.write().set_lower(field, value),
                }
                span { "–" }
                DatePicker {
                    id: upper_id.to_string(),
                    value: upper_value.clone(),
                    config,
                    on_change: move |value: String| form.write().set_upper(field, value),
                }
            }
        };
    }

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 6px; margin: 6px 0;",
            span { style: LABEL_STYLE, "{label}" }
            input {
                id: "{lower_id}",
                r#type: "text",
                style: INPUT_STYLE,
                value: "{lower_value}",
                oninput: move |event| form.write().set_lower(field, event.value()),
            }
            span { "–" }
            input {
                id: "{upper_id}",
                r#type: "text",
                style: INPUT_STYLE,
                value: "{upper_value}",
                oninput: move |event| form.write().set_upper(field, event.value()),
            }
        }
    }
}

#[component]
pub fn AdvancedSearchModal(
    mut form: Signal<SearchFormState>,
    mut open: Signal<bool>,
    on_submit: EventHandler<()>,
) -> Element {
    if !open() {
        return rsx! {};
    }

    let snapshot = form.read().clone();
    let picker_config = SelectPickerConfig::default();
    let regex_value = snapshot.regex_search.clone();
    let ignore_case = snapshot.ignore_case;

    rsx! {
        div {
            style: "position: fixed; inset: 0; background: rgba(0,0,0,0.35); display: flex; align-items: center; justify-content: center; z-index: 1100;",
            onclick: move |_| open.set(false),
            div {
                id: "advancedSearch",
                class: "modal",
                style: "background: #fff; border-radius: 10px; padding: 16px 20px; min-width: 560px; box-shadow: 0 12px 32px rgba(0,0,0,0.25);",
                onclick: move |event| event.stop_propagation(),
                h3 { style: "margin-top: 0;", "Tarkennettu haku" }

                div {
                    style: "display: flex; align-items: center; gap: 6px; margin: 6px 0;",
                    span { style: LABEL_STYLE, "Hakulauseke" }
                    input {
                        id: "regex_search",
                        r#type: "text",
                        placeholder: "säännöllinen lauseke",
                        style: "flex: 1; padding: 4px 6px; border: 1px solid #bbb; border-radius: 4px;",
                        value: "{regex_value}",
                        oninput: move |event| form.write().regex_search = event.value(),
                    }
                    label {
                        style: "display: inline-flex; align-items: center; gap: 4px;",
                        input {
                            id: "ignore_case",
                            r#type: "checkbox",
                            checked: ignore_case,
                            onclick: move |_| {
                                let next = !form.peek().ignore_case;
                                form.write().ignore_case = next;
                            },
                        }
                        "Ohita kirjainkoko"
                    }
                }

                {RangeField::ALL.iter().map(|field| {
                    let key = field.key();
                    rsx!(
                        RangeRow { key: "{key}", field: *field, form }
                    )
                })}

                {MultiSelectField::ALL.iter().map(|field| {
                    let field = *field;
                    let state = snapshot.select(field).cloned().unwrap_or_default();
                    let label = field.label();
                    let id = field.key();
                    rsx!(
                        div {
                            key: "{id}",
                            style: "display: flex; align-items: center; gap: 6px; margin: 6px 0;",
                            span { style: LABEL_STYLE, "{label}" }
                            SelectPicker {
                                id: id.to_string(),
                                state,
                                config: picker_config,
                                on_toggle: move |(value, checked): (String, bool)| {
                                    form.write().set_checked(field, &value, checked);
                                },
                            }
                        }
                    )
                })}

                div {
                    style: "display: flex; justify-content: flex-end; gap: 8px; margin-top: 12px;",
                    button {
                        r#type: "button",
                        style: "border: 1px solid #bbb; background: #fff; padding: 6px 12px; border-radius: 6px; cursor: pointer;",
                        onclick: move |_| open.set(false),
                        "Peruuta"
                    }
                    button {
                        id: "advancedSearchSubmit",
                        r#type: "button",
                        style: "border: 1px solid #0d6efd; background: #0d6efd; color: #fff; padding: 6px 12px; border-radius: 6px; cursor: pointer;",
                        onclick: move |_| {
                            open.set(false);
                            on_submit.call(());
                        },
                        "Hae"
                    }
                }
            }
        }
    }
}
