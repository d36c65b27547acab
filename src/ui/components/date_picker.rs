use chrono::{Datelike, Local, NaiveDate};
use dioxus::prelude::*;

use crate::domain::entities::widget::{DatePickerConfig, TodayButton};

fn shift_month((year, month): (i32, u32), delta: i32) -> (i32, u32) {
    let index = year * 12 + month as i32 - 1 + delta;
    (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}

#[component]
pub fn DatePicker(
    id: String,
    value: String,
    config: DatePickerConfig,
    on_change: EventHandler<String>,
) -> Element {
    let mut open = use_signal(|| false);
    let today = Local::now().date_naive();
    let initial_month = config
        .parse_date(&value)
        .map(|date| (date.year(), date.month()))
        .unwrap_or((today.year(), today.month()));
    let mut view_month = use_signal(move || initial_month);

    let selected = config.parse_date(&value);
    let (year, month) = view_month();
    let cells = config.month_grid(year, month);
    let headers = config.weekday_headers();
    let month_label = format!("{} {year}", config.locale.month_name(month));
    let placeholder = config.format;
    let today_label = config.locale.today;
    let clear_label = config.locale.clear;

    rsx! {
        div {
            style: "position: relative; display: inline-flex; gap: 4px; align-items: center;",
            input {
                id: "{id}",
                class: "form-control",
                r#type: "text",
                placeholder: "{placeholder}",
                value: "{value}",
                style: "width: 120px; padding: 4px 6px;",
                oninput: move |event| on_change.call(event.value()),
            }
            button {
                r#type: "button",
                style: "border: 1px solid #bbb; background: #fff; padding: 4px 8px; border-radius: 6px; cursor: pointer;",
                onclick: move |event| {
                    event.stop_propagation();
                    open.set(!open());
                },
                "📅"
            }
            if open() {
                div {
                    style: "position: absolute; top: 34px; left: 0; z-index: 1300; background: #fff; border: 1px solid #bbb; border-radius: 8px; box-shadow: 0 10px 24px rgba(0,0,0,0.15); padding: 8px; width: 240px;",
                    onclick: move |event| event.stop_propagation(),
                    div {
                        style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 6px;",
                        button {
                            r#type: "button",
                            style: "border: none; background: transparent; cursor: pointer;",
                            onclick: move |_| view_month.set(shift_month(view_month(), -1)),
                            "«"
                        }
                        span { "{month_label}" }
                        button {
                            r#type: "button",
                            style: "border: none; background: transparent; cursor: pointer;",
                            onclick: move |_| view_month.set(shift_month(view_month(), 1)),
                            "»"
                        }
                    }
                    div {
                        style: "display: grid; grid-template-columns: repeat(7, 1fr); gap: 2px; text-align: center;",
                        {headers.iter().map(|name| rsx!(
                            span { style: "font-size: 12px; color: #666;", "{name}" }
                        ))}
                        {cells.iter().map(|cell| match cell {
                            None => rsx!( span {} ),
                            Some(date) => {
                                let date: NaiveDate = *date;
                                let is_selected = selected == Some(date);
                                let is_today = date == today;
                                let background = if is_selected {
                                    "#0d6efd"
                                } else if is_today {
                                    "#fff3cd"
                                } else {
                                    "transparent"
                                };
                                let color = if is_selected { "#fff" } else { "#222" };
                                let formatted = config.format_date(date);
                                let day = date.day();
                                rsx!(
                                    span {
                                        style: "cursor: pointer; padding: 3px 0; border-radius: 4px; background: {background}; color: {color};",
                                        onclick: move |_| {
                                            on_change.call(formatted.clone());
                                            open.set(false);
                                        },
                                        "{day}"
                                    }
                                )
                            }
                        })}
                    }
                    div {
                        style: "display: flex; justify-content: space-between; margin-top: 6px;",
                        if config.today_btn != TodayButton::Off {
                            button {
                                r#type: "button",
                                style: "border: 1px solid #bbb; background: #fff; padding: 2px 8px; border-radius: 6px; cursor: pointer;",
                                onclick: move |_| {
                                    view_month.set((today.year(), today.month()));
                                    if config.today_btn == TodayButton::Linked {
                                        on_change.call(config.format_date(today));
                                        open.set(false);
                                    }
                                },
                                "{today_label}"
                            }
                        }
                        if config.clear_btn {
                            button {
                                r#type: "button",
                                style: "border: 1px solid #bbb; background: #fff; padding: 2px 8px; border-radius: 6px; cursor: pointer;",
                                onclick: move |_| {
                                    on_change.call(String::new());
                                    open.set(false);
                                },
                                "{clear_label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
