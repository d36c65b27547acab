use dioxus::prelude::*;

use crate::domain::entities::search_form::MultiSelectState;
use crate::domain::entities::widget::SelectPickerConfig;

pub fn select_picker_label(state: &MultiSelectState, config: &SelectPickerConfig) -> String {
    let labels = state.checked_labels();
    if labels.is_empty() {
        config.none_selected_text.to_string()
    } else {
        labels.join(", ")
    }
}

#[component]
pub fn SelectPicker(
    id: String,
    state: MultiSelectState,
    config: SelectPickerConfig,
    on_toggle: EventHandler<(String, bool)>,
) -> Element {
    let mut open = use_signal(|| false);
    let label = select_picker_label(&state, &config);
    let button_class = config.button_class();
    let tick_class = config.tick_class();

    rsx! {
        div {
            id: "{id}",
            class: "selectpicker",
            style: "position: relative; display: inline-block; min-width: 200px;",
            button {
                r#type: "button",
                class: "{button_class}",
                style: "width: 100%; text-align: left; border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;",
                onclick: move |event| {
                    event.stop_propagation();
                    open.set(!open());
                },
                "{label}"
            }

            if open() {
                div {
                    style: "position: absolute; top: 34px; left: 0; min-width: 200px; max-height: 260px; overflow-y: auto; background: #fff; border: 1px solid #bbb; border-radius: 8px; box-shadow: 0 10px 24px rgba(0,0,0,0.15); z-index: 1200; padding: 4px;",
                    onclick: move |event| event.stop_propagation(),
                    {state.options.iter().map(|opt| {
                        let value = opt.value.clone();
                        let option_label = opt.label.clone();
                        let toggled_value = value.clone();
                        let checked = state.is_checked(&opt.value);
                        let background = if checked { "#eef4ff" } else { "transparent" };
                        let tick_class = tick_class.clone();
                        rsx!(
                            div {
                                key: "{value}",
                                "data-value": "{value}",
                                style: "display: flex; justify-content: space-between; gap: 8px; padding: 6px 8px; cursor: pointer; background: {background};",
                                onclick: move |_| on_toggle.call((toggled_value.clone(), !checked)),
                                span { "{option_label}" }
                                if checked {
                                    i { class: "{tick_class}", "✓" }
                                }
                            }
                        )
                    })}
                }
            }
        }
    }
}
