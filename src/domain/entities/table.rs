use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Products,
    Orders,
}

impl TableKind {
    pub fn endpoint(self) -> &'static str {
        match self {
            TableKind::Products => "products_json",
            TableKind::Orders => "orders_json",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            TableKind::Products => "Tuotteet",
            TableKind::Orders => "Tilaukset",
        }
    }

    /// Only the products endpoint understands the advanced filters.
    pub fn supports_advanced_search(self) -> bool {
        matches!(self, TableKind::Products)
    }

    pub fn columns(self) -> Vec<ColumnSpec> {
        match self {
            TableKind::Products => vec![
                ColumnSpec::plain("saapumispvm", "Saapumispvm"),
                ColumnSpec::plain("kuvaus", "Kuvaus"),
                ColumnSpec::plain("hinta", "Hinta"),
                ColumnSpec::plain("koodi", "Numero"),
                ColumnSpec::plain("sijainti", "Sijainti"),
                ColumnSpec::plain("tila", "Tila"),
                ColumnSpec::plain("toimitustapa", "Toimitustapa"),
                ColumnSpec::plain("toimituspvm", "Toimituspvm"),
                ColumnSpec::plain("varausnumero", "Varausnumero"),
                ColumnSpec::plain("lisätiedot", "Lisätiedot"),
                ColumnSpec::formatted("id", "Toiminnot", CellFormatter::Operations),
            ],
            TableKind::Orders => vec![
                ColumnSpec::plain("id", "Tilaus"),
                ColumnSpec::plain("asiakas", "Asiakas"),
                ColumnSpec::plain("asiakkaan_puhelinnumero", "Puhelinnumero"),
                ColumnSpec::plain("asiakkaan_osoite", "Osoite"),
                ColumnSpec::plain("toimitustapa", "Toimitustapa"),
                ColumnSpec::plain("toimituspvm", "Toimituspvm"),
                ColumnSpec::plain("varausnumero", "Varausnumero"),
                ColumnSpec::plain("tuotteet", "Tuotteet"),
                ColumnSpec::plain("lisätiedot", "Lisätiedot"),
                ColumnSpec::formatted("id", "Toiminnot", CellFormatter::OrderOperations),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFormatter {
    Operations,
    OrderOperations,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub field: &'static str,
    pub title: &'static str,
    pub formatter: Option<CellFormatter>,
}

impl ColumnSpec {
    fn plain(field: &'static str, title: &'static str) -> Self {
        Self {
            field,
            title,
            formatter: None,
        }
    }

    fn formatted(field: &'static str, title: &'static str, formatter: CellFormatter) -> Self {
        Self {
            field,
            title,
            formatter: Some(formatter),
        }
    }
}

pub type Row = Map<String, Value>;

/// Endpoint response body: `{"total": n, "rows": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TablePage {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub rows: Vec<Row>,
}

pub const UNDEFINED_TEXT: &str = "-";

pub fn cell_text(row: &Row, field: &str) -> String {
    match row.get(field) {
        None | Some(Value::Null) => UNDEFINED_TEXT.to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}
