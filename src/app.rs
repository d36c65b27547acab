use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;
use tracing::{debug, info, warn};

use crate::domain::entities::alert::{AlertBoard, AlertLevel};
use crate::domain::entities::shortcut::{match_shortcut, KeyPress, ShortcutAction};
use crate::domain::entities::table::{TableKind, TablePage};
use crate::infra::config::app_config::AppConfig;
use crate::infra::source::json_file::JsonFileSource;
use crate::platform::desktop::blocking::run_blocking;
use crate::ui::components::advanced_search::AdvancedSearchModal;
use crate::ui::components::alerts::AlertList;
use crate::ui::components::data_table::DataTable;
use crate::ui::state::app_state::AppState;
use crate::ui::table::signal_table::SignalTable;
use crate::usecase::services::query_service::QueryService;
use crate::usecase::services::search_service::{toggle_advanced_search, ToggleOutcome};

#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<AppConfig>,
}

fn activate_search_toggle(
    table: &mut SignalTable,
    alerts: &mut Signal<AlertBoard>,
    auto_close: Option<Duration>,
) {
    if toggle_advanced_search(table) == ToggleOutcome::Reset {
        alerts
            .write()
            .push(AlertLevel::Info, "Tarkennettu haku käytössä", auto_close);
    }
}

fn key_press(event: &KeyboardEvent) -> KeyPress {
    let modifiers = event.modifiers();
    KeyPress {
        key: event.key().to_string(),
        ctrl: modifiers.ctrl(),
        alt: modifiers.alt(),
        shift: modifiers.shift(),
        meta: modifiers.meta(),
    }
}

#[component]
fn TableTabs(mut active_table: Signal<TableKind>, mut search_text: Signal<String>) -> Element {
    let current = active_table();
    rsx! {
        nav {
            style: "display: flex; gap: 8px; align-items: center; padding: 8px 0; border-bottom: 1px solid #ddd;",
            {[TableKind::Products, TableKind::Orders].into_iter().map(|kind| {
                let is_active = kind == current;
                let background = if is_active { "#0d6efd" } else { "#fff" };
                let color = if is_active { "#fff" } else { "#222" };
                let title = kind.title();
                let key = kind.endpoint();
                rsx!(
                    button {
                        key: "{key}",
                        r#type: "button",
                        style: "border: 1px solid #0d6efd; background: {background}; color: {color}; padding: 4px 12px; border-radius: 6px; cursor: pointer;",
                        onclick: move |_| {
                            if active_table() != kind {
                                debug!(table = kind.endpoint(), "switching table");
                                search_text.set(String::new());
                                active_table.set(kind);
                            }
                        },
                        "{title}"
                    }
                )
            })}
        }
    }
}

#[component]
pub fn App() -> Element {
    let context = use_context::<AppContext>();
    let config = context.config.clone();

    let state = AppState::new(&config);
    let mut table = state.table();
    let AppState {
        active_table,
        search_text,
        request_seq,
        search_form,
        mut page,
        mut request_url,
        mut alerts,
        mut failure_alert,
        mut show_advanced,
        mut window_focused,
        mut status,
    } = state;

    let auto_close = config.alert_auto_close();
    let config_for_service = config.clone();
    let query_service = use_hook(move || {
        let source = JsonFileSource {
            products: config_for_service.products_file.clone(),
            orders: config_for_service.orders_file.clone(),
        };
        Arc::new(QueryService::new(
            Arc::new(source),
            config_for_service.server_url.clone(),
            config_for_service.page_size,
        ))
    });

    let config_for_init = config.clone();
    use_effect(move || {
        if config_for_init.products_file.is_none() && config_for_init.orders_file.is_none() {
            alerts.write().push(
                AlertLevel::Warning,
                "Rivitiedostoja ei ole määritetty; taulukko on tyhjä.",
                auto_close,
            );
        }
    });

    let query_service_for_fetch = query_service.clone();
    use_effect(move || {
        let seq = request_seq();
        let kind = active_table();
        let search = search_text();
        let form = search_form.peek().clone();

        let result = run_blocking("fetch rows", || {
            query_service_for_fetch.fetch(kind, &search, &form)
        });
        debug!(seq, url = %result.url, "table refreshed");
        request_url.set(result.url);
        match result.page {
            Ok(loaded) => {
                let previous = *failure_alert.peek();
                if let Some(id) = previous {
                    alerts.write().dismiss(id);
                    failure_alert.set(None);
                }
                *status.write() = format!("{}: {} riviä", kind.title(), loaded.total);
                page.set(loaded);
            }
            Err(err) => {
                warn!(error = %err, "loading rows failed");
                let previous = *failure_alert.peek();
                let id = alerts.write().upsert(
                    previous,
                    AlertLevel::Danger,
                    format!("Rivien haku epäonnistui: {err}"),
                    None,
                );
                failure_alert.set(Some(id));
                *status.write() = format!("{}: haku epäonnistui", kind.title());
                page.set(TablePage::default());
            }
        }
    });

    let current_table = active_table();
    let current_page = page();
    let current_status = status();
    let current_url = request_url();

    rsx! {
        div {
            tabindex: "0",
            style: "outline: none; font-family: sans-serif; padding: 8px 16px; min-height: 100vh; box-sizing: border-box;",
            onmounted: move |event| async move {
                if let Err(err) = event.data().set_focus(true).await {
                    warn!(error = ?err, "could not focus window root");
                }
            },
            onfocusin: move |_| window_focused.set(true),
            onfocusout: move |_| window_focused.set(false),
            onkeydown: move |event: KeyboardEvent| {
                let press = key_press(&event);
                if let Some(ShortcutAction::ToggleAdvancedSearch) = match_shortcut(&press, window_focused()) {
                    if active_table() == TableKind::Products {
                        event.prevent_default();
                        info!("advanced search shortcut");
                        activate_search_toggle(&mut table, &mut alerts, auto_close);
                    }
                }
            },

            TableTabs { active_table, search_text }

            AlertList { alerts }

            DataTable {
                kind: current_table,
                page: current_page,
                search_text,
                on_open_advanced: move |_| show_advanced.set(true),
            }

            AdvancedSearchModal {
                form: search_form,
                open: show_advanced,
                on_submit: move |_| activate_search_toggle(&mut table, &mut alerts, auto_close),
            }

            footer {
                style: "display: flex; gap: 16px; margin-top: 8px; color: #555; font-size: 12px;",
                span { "{current_status}" }
                code { style: "overflow-wrap: anywhere;", "{current_url}" }
            }
        }
    }
}
