use std::cell::Cell;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use chrono::{NaiveDate, Weekday};

use crate::domain::entities::alert::{AlertBoard, AlertLevel};
use crate::domain::entities::search::{
    MultiSelectField, RangeField, TableRequest, SEARCH_PLACEHOLDER,
};
use crate::domain::entities::search_form::{SearchFormState, SelectOption};
use crate::domain::entities::shortcut::{match_shortcut, KeyPress, ShortcutAction};
use crate::domain::entities::table::{cell_text, TableKind, TablePage};
use crate::domain::entities::widget::{
    DatePickerConfig, SelectPickerConfig, TodayButton, ADVANCED_SEARCH_BUTTON,
};
use crate::infra::config::app_config::{AppConfig, ConfigOverrides};
use crate::infra::source::json_file::{read_table_page, JsonFileSource};
use crate::ui::components::select_picker::select_picker_label;
use crate::usecase::ports::source::{RowSource, SourceError};
use crate::usecase::ports::table::SearchTable;
use crate::usecase::services::alert_service::{
    close_manually, close_on_timer, AlertScheduler, CancelHandle,
};
use crate::usecase::services::query_service::QueryService;
use crate::usecase::services::search_service::{
    build_query_params, toggle_advanced_search, ToggleOutcome,
};

fn unique_test_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("varasto-{prefix}-{nanos}"))
}

#[derive(Default)]
struct FakeTable {
    search_text: String,
    refreshes: usize,
    resets: Vec<String>,
}

impl SearchTable for FakeTable {
    fn search_text(&self) -> String {
        self.search_text.clone()
    }

    fn refresh(&mut self) {
        self.refreshes += 1;
    }

    fn reset_search(&mut self, text: &str) {
        self.resets.push(text.to_string());
        self.search_text = text.to_string();
    }
}

fn sample_form() -> SearchFormState {
    let options = BTreeMap::from([
        (
            MultiSelectField::Arkistoitu,
            vec![SelectOption::new("0", "Ei"), SelectOption::new("1", "Kyllä")],
        ),
        (
            MultiSelectField::Tila,
            vec![
                SelectOption::new("A", "Myynnissä"),
                SelectOption::new("B", "Varattu"),
                SelectOption::new("C", "Myyty"),
            ],
        ),
    ]);
    SearchFormState::with_options(options)
}

fn advanced_value(request: &TableRequest, key: &str) -> String {
    request
        .query_pairs()
        .into_iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
        .unwrap_or_else(|| panic!("missing key {key}"))
}

#[test]
fn toggle_refreshes_when_placeholder_is_active() {
    let mut table = FakeTable {
        search_text: SEARCH_PLACEHOLDER.to_string(),
        ..FakeTable::default()
    };

    let outcome = toggle_advanced_search(&mut table);

    assert_eq!(outcome, ToggleOutcome::Refreshed);
    assert_eq!(table.refreshes, 1, "exactly one refresh expected");
    assert!(table.resets.is_empty(), "no reset expected");
}

#[test]
fn toggle_resets_to_placeholder_for_other_text() {
    let mut table = FakeTable {
        search_text: "tuoli".to_string(),
        ..FakeTable::default()
    };

    let outcome = toggle_advanced_search(&mut table);

    assert_eq!(outcome, ToggleOutcome::Reset);
    assert_eq!(table.resets, vec![SEARCH_PLACEHOLDER.to_string()]);
    assert_eq!(table.refreshes, 0, "reset should be the only call");
}

#[test]
fn toggle_resets_for_empty_search_and_near_miss_placeholder() {
    for text in ["", "(tarkennettu haku) ", "(Tarkennettu haku)"] {
        let mut table = FakeTable {
            search_text: text.to_string(),
            ..FakeTable::default()
        };
        assert_eq!(
            toggle_advanced_search(&mut table),
            ToggleOutcome::Reset,
            "text {text:?} should trigger reset"
        );
    }
}

#[test]
fn toggle_is_idempotent_under_repeated_activation() {
    let mut table = FakeTable {
        search_text: SEARCH_PLACEHOLDER.to_string(),
        ..FakeTable::default()
    };

    for _ in 0..3 {
        assert_eq!(toggle_advanced_search(&mut table), ToggleOutcome::Refreshed);
    }

    assert_eq!(table.refreshes, 3);
    assert_eq!(table.search_text, SEARCH_PLACEHOLDER);
}

#[test]
fn build_query_params_with_empty_form_yields_empty_values() {
    let form = SearchFormState::default();

    let request = build_query_params(TableRequest::new(SEARCH_PLACEHOLDER, 25), &form);

    for field in RangeField::ALL {
        assert_eq!(advanced_value(&request, field.key()), ",", "range {field:?}");
    }
    for field in MultiSelectField::ALL {
        assert_eq!(advanced_value(&request, field.key()), "", "select {field:?}");
    }
    assert_eq!(advanced_value(&request, "regex_search"), "");
    assert_eq!(advanced_value(&request, "ignore_case"), "false");
}

#[test]
fn build_query_params_joins_range_bounds() {
    let mut form = sample_form();
    form.set_lower(RangeField::Numero, "1");
    form.set_upper(RangeField::Numero, "10");
    form.set_upper(RangeField::Saapumispvm, "2021-05-01");

    let request = build_query_params(TableRequest::new(SEARCH_PLACEHOLDER, 25), &form);

    assert_eq!(advanced_value(&request, "numero"), "1,10");
    assert_eq!(advanced_value(&request, "saapumispvm"), ",2021-05-01");
    assert_eq!(advanced_value(&request, "hinta"), ",");
}

#[test]
fn build_query_params_passes_inverted_ranges_through() {
    let mut form = sample_form();
    form.set_lower(RangeField::Hinta, "50");
    form.set_upper(RangeField::Hinta, "5");

    let request = build_query_params(TableRequest::new(SEARCH_PLACEHOLDER, 25), &form);

    assert_eq!(advanced_value(&request, "hinta"), "50,5");
}

#[test]
fn build_query_params_collects_checked_options_in_option_order() {
    let mut form = sample_form();
    form.set_checked(MultiSelectField::Tila, "B", true);
    form.set_checked(MultiSelectField::Tila, "A", true);

    let request = build_query_params(TableRequest::new(SEARCH_PLACEHOLDER, 25), &form);

    assert_eq!(advanced_value(&request, "tila"), "A,B");
    assert_eq!(advanced_value(&request, "arkistoitu"), "");
}

#[test]
fn build_query_params_reads_state_at_call_time() {
    let mut form = sample_form();
    form.regex_search = "tuoli".to_string();
    let first = build_query_params(TableRequest::new(SEARCH_PLACEHOLDER, 25), &form);

    form.regex_search = "pöytä".to_string();
    form.ignore_case = true;
    form.set_checked(MultiSelectField::Tila, "C", true);
    let second = build_query_params(TableRequest::new(SEARCH_PLACEHOLDER, 25), &form);

    assert_eq!(advanced_value(&first, "regex_search"), "tuoli");
    assert_eq!(advanced_value(&second, "regex_search"), "pöytä");
    assert_eq!(advanced_value(&second, "ignore_case"), "true");
    assert_eq!(advanced_value(&second, "tila"), "C");
}

#[test]
fn unchecking_an_option_removes_it() {
    let mut form = sample_form();
    form.set_checked(MultiSelectField::Arkistoitu, "0", true);
    form.set_checked(MultiSelectField::Arkistoitu, "1", true);
    form.set_checked(MultiSelectField::Arkistoitu, "0", false);

    assert_eq!(form.checked_values(MultiSelectField::Arkistoitu), vec!["1"]);
}

#[test]
fn query_pairs_keep_wire_order() {
    let mut request = TableRequest::new("haku", 10);
    request.sort = Some("kuvaus".to_string());
    let request = build_query_params(request, &SearchFormState::default());

    let keys: Vec<&str> = request.query_pairs().iter().map(|(k, _)| *k).collect();

    assert_eq!(
        keys,
        vec![
            "search",
            "sort",
            "order",
            "offset",
            "limit",
            "regex_search",
            "ignore_case",
            "numero",
            "saapumispvm",
            "toimituspvm",
            "hinta",
            "varausnumero",
            "arkistoitu",
            "sijainti",
            "tila",
            "toimitustapa",
        ]
    );
}

#[test]
fn request_url_percent_encodes_values() {
    let mut form = SearchFormState::default();
    form.set_lower(RangeField::Numero, "1");
    form.set_upper(RangeField::Numero, "10");
    let request = build_query_params(TableRequest::new(SEARCH_PLACEHOLDER, 25), &form);

    let url = request.to_url("http://[::1]:8080/", TableKind::Products.endpoint());

    assert!(
        url.starts_with("http://[::1]:8080/products_json?search=%28tarkennettu%20haku%29&order=desc&offset=0&limit=25"),
        "unexpected url: {url}"
    );
    assert!(url.contains("&numero=1%2C10&"), "range should be encoded: {url}");
    assert!(url.ends_with("&toimitustapa="), "unexpected tail: {url}");
}

struct RecordingSource {
    requests: Mutex<Vec<(TableKind, TableRequest)>>,
    response: Result<TablePage, SourceError>,
}

impl RowSource for RecordingSource {
    fn fetch(&self, table: TableKind, request: &TableRequest) -> Result<TablePage, SourceError> {
        self.requests
            .lock()
            .expect("lock should not be poisoned")
            .push((table, request.clone()));
        self.response.clone()
    }
}

#[test]
fn query_service_applies_hook_only_for_products() {
    let source = Arc::new(RecordingSource {
        requests: Mutex::new(Vec::new()),
        response: Ok(TablePage::default()),
    });
    let service = QueryService::new(source.clone(), "http://localhost:5000", 25);
    let mut form = sample_form();
    form.set_lower(RangeField::Numero, "3");

    let products = service.fetch(TableKind::Products, SEARCH_PLACEHOLDER, &form);
    let orders = service.fetch(TableKind::Orders, "", &form);

    assert!(products.url.contains("numero=3%2C"), "products url: {}", products.url);
    assert!(orders.url.starts_with("http://localhost:5000/orders_json?"));
    assert!(!orders.url.contains("numero"), "orders url: {}", orders.url);

    let requests = source.requests.lock().expect("lock should not be poisoned");
    assert_eq!(requests.len(), 2);
    assert!(requests[0].1.advanced.is_some());
    assert!(requests[1].1.advanced.is_none());
}

#[test]
fn query_service_reports_source_errors() {
    let source = Arc::new(RecordingSource {
        requests: Mutex::new(Vec::new()),
        response: Err(SourceError::Unavailable("offline".to_string())),
    });
    let service = QueryService::new(source, "http://localhost:5000", 25);

    let result = service.fetch(TableKind::Orders, "", &SearchFormState::default());

    assert_eq!(
        result.page,
        Err(SourceError::Unavailable("offline".to_string()))
    );
    assert!(!result.url.is_empty(), "url should be built even on failure");
}

#[derive(Clone)]
struct FakeHandle(Rc<Cell<bool>>);

impl CancelHandle for FakeHandle {
    fn cancel(self) {
        self.0.set(true);
    }
}

#[test]
fn scheduler_starts_one_timer_per_auto_closing_alert() {
    let mut board = AlertBoard::default();
    let first = board.push(AlertLevel::Success, "Tallennettu", Some(Duration::from_millis(5000)));
    board.push(AlertLevel::Danger, "Virhe", None);
    let mut scheduler = AlertScheduler::<FakeHandle>::default();
    let mut delays = Vec::new();

    let started = scheduler.schedule_pending(&board, |id, delay| {
        delays.push((id, delay));
        FakeHandle(Rc::new(Cell::new(false)))
    });
    let started_again =
        scheduler.schedule_pending(&board, |_, _| FakeHandle(Rc::new(Cell::new(false))));

    assert_eq!(started, 1, "only the alert with a delay is scheduled");
    assert_eq!(started_again, 0, "already scheduled alerts are skipped");
    assert_eq!(delays, vec![(first, Duration::from_millis(5000))]);
}

#[test]
fn manual_close_cancels_timer_and_late_fire_is_noop() {
    let mut board = AlertBoard::default();
    let id = board.push(AlertLevel::Info, "Hei", Some(Duration::from_millis(5000)));
    let cancelled = Rc::new(Cell::new(false));
    let mut scheduler = AlertScheduler::<FakeHandle>::default();
    scheduler.schedule_pending(&board, |_, _| FakeHandle(cancelled.clone()));

    assert!(close_manually(&mut board, &mut scheduler, id));
    assert!(cancelled.get(), "timer should be cancelled on manual close");
    assert!(!scheduler.is_pending(id));

    let closed_again = close_on_timer(&mut board, &mut scheduler, id);
    assert!(!closed_again, "late timer must be a no-op");
    assert!(board.is_empty());
}

#[test]
fn closing_one_alert_leaves_others_scheduled() {
    let mut board = AlertBoard::default();
    let first = board.push(AlertLevel::Info, "A", Some(Duration::from_millis(1000)));
    let second = board.push(AlertLevel::Info, "B", Some(Duration::from_millis(2000)));
    let second_cancelled = Rc::new(Cell::new(false));
    let mut scheduler = AlertScheduler::<FakeHandle>::default();
    scheduler.schedule_pending(&board, |id, _| {
        if id == second {
            FakeHandle(second_cancelled.clone())
        } else {
            FakeHandle(Rc::new(Cell::new(false)))
        }
    });

    assert!(close_on_timer(&mut board, &mut scheduler, first));

    assert!(board.contains(second));
    assert!(scheduler.is_pending(second));
    assert!(!second_cancelled.get());
    assert_eq!(scheduler.pending_count(), 1);
}

#[test]
fn repeated_failures_rewrite_one_alert() {
    let mut board = AlertBoard::default();
    let mut current = None;

    for attempt in 0..10 {
        let id = board.upsert(
            current,
            AlertLevel::Danger,
            format!("Rivien haku epäonnistui: yritys {attempt}"),
            None,
        );
        current = Some(id);
    }

    assert_eq!(board.alerts().len(), 1, "failures should share one banner");
    assert_eq!(
        board.alerts()[0].message,
        "Rivien haku epäonnistui: yritys 9"
    );
    assert_eq!(board.alerts()[0].auto_close, None);
}

#[test]
fn upsert_pushes_again_after_alert_was_closed() {
    let mut board = AlertBoard::default();
    let other = board.push(AlertLevel::Info, "Hei", None);
    let first = board.upsert(None, AlertLevel::Danger, "Virhe", None);
    assert!(board.dismiss(first));

    let second = board.upsert(Some(first), AlertLevel::Danger, "Virhe", None);

    assert_ne!(first, second, "a closed alert is not reused");
    assert!(board.contains(second));
    assert!(board.contains(other), "other alerts are left alone");
    assert_eq!(board.alerts().len(), 2);
}

#[test]
fn shortcut_fires_only_for_ctrl_7_with_focus() {
    let ctrl_7 = KeyPress::new("7").with_ctrl();

    assert_eq!(
        match_shortcut(&ctrl_7, true),
        Some(ShortcutAction::ToggleAdvancedSearch)
    );
    assert_eq!(match_shortcut(&ctrl_7, false), None, "no focus, no shortcut");
    assert_eq!(match_shortcut(&KeyPress::new("7"), true), None);
    assert_eq!(match_shortcut(&KeyPress::new("8").with_ctrl(), true), None);
    assert_eq!(match_shortcut(&KeyPress::new("f").with_ctrl(), true), None);
}

#[test]
fn shortcut_ignores_extra_modifiers() {
    let press = KeyPress::new("7").with_ctrl().with_alt();

    assert_eq!(
        match_shortcut(&press, true),
        Some(ShortcutAction::ToggleAdvancedSearch)
    );
}

#[test]
fn date_picker_configs_match_widget_settings() {
    let single = DatePickerConfig::single();
    let range = DatePickerConfig::range();

    assert_eq!(single.format, "yyyy-mm-dd");
    assert_eq!(single.week_start, Weekday::Mon);
    assert_eq!(single.today_btn, TodayButton::Linked);
    assert_eq!(single.locale.language, "fi");
    assert!(!single.clear_btn);
    assert!(range.clear_btn, "range pickers get a clear button");
    assert_eq!(range.format, single.format);
}

#[test]
fn date_picker_formats_and_parses_iso_dates() {
    let config = DatePickerConfig::single();
    let date = NaiveDate::from_ymd_opt(2021, 3, 9).expect("valid date");

    assert_eq!(config.chrono_format(), "%Y-%m-%d");
    assert_eq!(config.format_date(date), "2021-03-09");
    assert_eq!(config.parse_date(" 2021-03-09 "), Some(date));
    assert_eq!(config.parse_date("9.3.2021"), None);
}

#[test]
fn month_grid_starts_on_configured_week_start() {
    let config = DatePickerConfig::single();

    // 2021-09-01 is a Wednesday.
    let grid = config.month_grid(2021, 9);

    assert_eq!(config.weekday_headers()[0], "ma");
    assert_eq!(grid.iter().take_while(|cell| cell.is_none()).count(), 2);
    assert_eq!(grid.iter().flatten().count(), 30);

    let sunday_first = DatePickerConfig {
        week_start: Weekday::Sun,
        ..config
    };
    assert_eq!(sunday_first.weekday_headers()[0], "su");
    assert_eq!(
        sunday_first
            .month_grid(2021, 9)
            .iter()
            .take_while(|cell| cell.is_none())
            .count(),
        3
    );
}

#[test]
fn select_picker_shows_placeholder_until_something_is_checked() {
    let config = SelectPickerConfig::default();
    let mut form = sample_form();

    let empty = form.select(MultiSelectField::Tila).cloned().expect("tila select");
    assert_eq!(select_picker_label(&empty, &config), "Ei mitään valittuna");

    form.set_checked(MultiSelectField::Tila, "C", true);
    form.set_checked(MultiSelectField::Tila, "A", true);
    let checked = form.select(MultiSelectField::Tila).cloned().expect("tila select");
    assert_eq!(select_picker_label(&checked, &config), "Myynnissä, Myyty");

    assert_eq!(config.tick_class(), "fa fa-check");
    assert_eq!(config.button_class(), "form-control");
}

#[test]
fn advanced_search_button_targets_modal() {
    assert_eq!(ADVANCED_SEARCH_BUTTON.id, "tarkennettu_haku");
    assert_eq!(ADVANCED_SEARCH_BUTTON.icon, "fa-search-plus");
    assert_eq!(ADVANCED_SEARCH_BUTTON.modal_target, "advancedSearch");
}

#[test]
fn config_defaults_apply_for_empty_file() {
    let config = AppConfig::from_toml_str("").expect("empty config should parse");

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.alert_auto_close(), Some(Duration::from_millis(5000)));
    assert_eq!(config.search_options.arkistoitu.len(), 2);
}

#[test]
fn config_parses_values_and_options() {
    let text = r#"
server_url = "http://127.0.0.1:5000"
page_size = 50
alert_auto_close_ms = 0

[search_options]
tila = [
    { value = "1", label = "Uusi" },
    { value = "2", label = "Käytetty" },
]
"#;

    let config = AppConfig::from_toml_str(text).expect("config should parse");

    assert_eq!(config.server_url, "http://127.0.0.1:5000");
    assert_eq!(config.page_size, 50);
    assert_eq!(config.alert_auto_close(), None, "zero disables auto close");
    assert_eq!(config.search_options.tila[1].label, "Käytetty");
    assert_eq!(config.search_options.sijainti.len(), 3, "unset lists keep defaults");
}

#[test]
fn config_rejects_zero_page_size() {
    let result = AppConfig::from_toml_str("page_size = 0");

    assert!(result.is_err(), "page_size = 0 should be rejected");
}

#[test]
fn config_load_requires_explicit_file_to_exist() {
    let temp_dir = unique_test_dir("config-missing");

    let result = AppConfig::load(Some(&temp_dir.join("config.toml")));

    assert!(result.is_err(), "missing explicit config should fail");
}

#[test]
fn config_load_reads_file_and_overrides_win() {
    let temp_dir = unique_test_dir("config-load");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let config_path = temp_dir.join("config.toml");
    fs::write(&config_path, "server_url = \"http://from-file\"\npage_size = 10\n")
        .expect("should write config fixture");

    let mut config = AppConfig::load(Some(&config_path)).expect("config should load");
    config.apply_overrides(ConfigOverrides {
        server_url: Some("http://from-cli".to_string()),
        products_file: Some(PathBuf::from("products.json")),
        orders_file: None,
    });

    assert_eq!(config.server_url, "http://from-cli");
    assert_eq!(config.page_size, 10);
    assert_eq!(config.products_file, Some(PathBuf::from("products.json")));
    assert_eq!(config.orders_file, None);

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn json_file_source_reads_endpoint_response() {
    let temp_dir = unique_test_dir("json-source");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let products_path = temp_dir.join("products.json");
    fs::write(
        &products_path,
        r#"{"total": 2, "rows": [
            {"id": 42, "kuvaus": "Tuoli", "hinta": 15.5, "sijainti": null},
            {"id": 43, "kuvaus": "Pöytä"}
        ]}"#,
    )
    .expect("should write rows fixture");
    let source = JsonFileSource {
        products: Some(products_path),
        orders: None,
    };
    let request = TableRequest::new("", 25);

    let page = source
        .fetch(TableKind::Products, &request)
        .expect("rows should load");
    let orders = source
        .fetch(TableKind::Orders, &request)
        .expect("missing file means no rows");

    assert_eq!(page.total, 2);
    assert_eq!(cell_text(&page.rows[0], "id"), "42");
    assert_eq!(cell_text(&page.rows[0], "kuvaus"), "Tuoli");
    assert_eq!(cell_text(&page.rows[0], "hinta"), "15.5");
    assert_eq!(cell_text(&page.rows[0], "sijainti"), "-");
    assert_eq!(cell_text(&page.rows[1], "sijainti"), "-");
    assert!(orders.rows.is_empty());

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn json_file_source_reports_malformed_and_missing_files() {
    let temp_dir = unique_test_dir("json-malformed");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let broken = temp_dir.join("broken.json");
    fs::write(&broken, "{ not json").expect("should write fixture");

    let malformed = read_table_page(&broken);
    let missing = read_table_page(&temp_dir.join("missing.json"));

    assert!(matches!(malformed, Err(SourceError::Malformed(_))));
    assert!(matches!(missing, Err(SourceError::Unavailable(_))));

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn table_columns_end_with_matching_edit_formatter() {
    use crate::domain::entities::table::CellFormatter;

    let products = TableKind::Products.columns();
    let orders = TableKind::Orders.columns();

    let last_product = products.last().expect("products columns");
    let last_order = orders.last().expect("orders columns");
    assert_eq!(last_product.field, "id");
    assert_eq!(last_product.formatter, Some(CellFormatter::Operations));
    assert_eq!(last_order.formatter, Some(CellFormatter::OrderOperations));
    assert!(TableKind::Products.supports_advanced_search());
    assert!(!TableKind::Orders.supports_advanced_search());
}
