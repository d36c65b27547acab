use std::fmt;

/// Search-box text meaning "advanced filters are driving the query".
pub const SEARCH_PLACEHOLDER: &str = "(tarkennettu haku)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RangeField {
    Numero,
    Saapumispvm,
    Toimituspvm,
    Hinta,
    Varausnumero,
}

impl RangeField {
    pub const ALL: [RangeField; 5] = [
        RangeField::Numero,
        RangeField::Saapumispvm,
        RangeField::Toimituspvm,
        RangeField::Hinta,
        RangeField::Varausnumero,
    ];

    pub fn key(self) -> &'static str {
        match self {
            RangeField::Numero => "numero",
            RangeField::Saapumispvm => "saapumispvm",
            RangeField::Toimituspvm => "toimituspvm",
            RangeField::Hinta => "hinta",
            RangeField::Varausnumero => "varausnumero",
        }
    }

    pub fn lower_id(self) -> &'static str {
        match self {
            RangeField::Numero => "numero_alku",
            RangeField::Saapumispvm => "saapumispvm_alku",
            RangeField::Toimituspvm => "toimituspvm_alku",
            RangeField::Hinta => "hinta_alku",
            RangeField::Varausnumero => "varausnumero_alku",
        }
    }

    pub fn upper_id(self) -> &'static str {
        match self {
            RangeField::Numero => "numero_loppu",
            RangeField::Saapumispvm => "saapumispvm_loppu",
            RangeField::Toimituspvm => "toimituspvm_loppu",
            RangeField::Hinta => "hinta_loppu",
            RangeField::Varausnumero => "varausnumero_loppu",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RangeField::Numero => "Numero",
            RangeField::Saapumispvm => "Saapumispvm",
            RangeField::Toimituspvm => "Toimituspvm",
            RangeField::Hinta => "Hinta",
            RangeField::Varausnumero => "Varausnumero",
        }
    }

    pub fn is_date(self) -> bool {
        matches!(self, RangeField::Saapumispvm | RangeField::Toimituspvm)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MultiSelectField {
    Arkistoitu,
    Sijainti,
    Tila,
    Toimitustapa,
}

impl MultiSelectField {
    pub const ALL: [MultiSelectField; 4] = [
        MultiSelectField::Arkistoitu,
        MultiSelectField::Sijainti,
        MultiSelectField::Tila,
        MultiSelectField::Toimitustapa,
    ];

    /// Wire key; doubles as the control id.
    pub fn key(self) -> &'static str {
        match self {
            MultiSelectField::Arkistoitu => "arkistoitu",
            MultiSelectField::Sijainti => "sijainti",
            MultiSelectField::Tila => "tila",
            MultiSelectField::Toimitustapa => "toimitustapa",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MultiSelectField::Arkistoitu => "Arkistoitu",
            MultiSelectField::Sijainti => "Sijainti",
            MultiSelectField::Tila => "Tila",
            MultiSelectField::Toimitustapa => "Toimitustapa",
        }
    }
}

/// A closed range; an empty side is unbounded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeValue {
    pub lower: String,
    pub upper: String,
}

impl RangeValue {
    pub fn new(lower: impl Into<String>, upper: impl Into<String>) -> Self {
        Self {
            lower: lower.into(),
            upper: upper.into(),
        }
    }

    pub fn to_wire(&self) -> String {
        format!("{},{}", self.lower, self.upper)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiValue(pub Vec<String>);

impl MultiValue {
    pub fn to_wire(&self) -> String {
        self.0.join(",")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvancedSearchParams {
    pub regex_search: String,
    pub ignore_case: bool,
    pub numero: RangeValue,
    pub saapumispvm: RangeValue,
    pub toimituspvm: RangeValue,
    pub hinta: RangeValue,
    pub varausnumero: RangeValue,
    pub arkistoitu: MultiValue,
    pub sijainti: MultiValue,
    pub tila: MultiValue,
    pub toimitustapa: MultiValue,
}

impl AdvancedSearchParams {
    pub fn range(&self, field: RangeField) -> &RangeValue {
        match field {
            RangeField::Numero => &self.numero,
            RangeField::Saapumispvm => &self.saapumispvm,
            RangeField::Toimituspvm => &self.toimituspvm,
            RangeField::Hinta => &self.hinta,
            RangeField::Varausnumero => &self.varausnumero,
        }
    }

    pub fn range_mut(&mut self, field: RangeField) -> &mut RangeValue {
        match field {
            RangeField::Numero => &mut self.numero,
            RangeField::Saapumispvm => &mut self.saapumispvm,
            RangeField::Toimituspvm => &mut self.toimituspvm,
            RangeField::Hinta => &mut self.hinta,
            RangeField::Varausnumero => &mut self.varausnumero,
        }
    }

    pub fn multi(&self, field: MultiSelectField) -> &MultiValue {
        match field {
            MultiSelectField::Arkistoitu => &self.arkistoitu,
            MultiSelectField::Sijainti => &self.sijainti,
            MultiSelectField::Tila => &self.tila,
            MultiSelectField::Toimitustapa => &self.toimitustapa,
        }
    }

    pub fn multi_mut(&mut self, field: MultiSelectField) -> &mut MultiValue {
        match field {
            MultiSelectField::Arkistoitu => &mut self.arkistoitu,
            MultiSelectField::Sijainti => &mut self.sijainti,
            MultiSelectField::Tila => &mut self.tila,
            MultiSelectField::Toimitustapa => &mut self.toimitustapa,
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("regex_search", self.regex_search.clone()),
            ("ignore_case", self.ignore_case.to_string()),
        ];
        for field in RangeField::ALL {
            pairs.push((field.key(), self.range(field).to_wire()));
        }
        for field in MultiSelectField::ALL {
            pairs.push((field.key(), self.multi(field).to_wire()));
        }
        pairs
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[allow(dead_code)]
    Asc,
    #[default]
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

/// One table request. `advanced` is filled by the query-params hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRequest {
    pub search: String,
    pub sort: Option<String>,
    pub order: SortOrder,
    pub offset: u32,
    pub limit: u32,
    pub advanced: Option<AdvancedSearchParams>,
}

impl TableRequest {
    pub fn new(search: impl Into<String>, limit: u32) -> Self {
        Self {
            search: search.into(),
            sort: None,
            order: SortOrder::default(),
            offset: 0,
            limit,
            advanced: None,
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("search", self.search.clone())];
        if let Some(sort) = &self.sort {
            pairs.push(("sort", sort.clone()));
        }
        pairs.push(("order", self.order.to_string()));
        pairs.push(("offset", self.offset.to_string()));
        pairs.push(("limit", self.limit.to_string()));
        if let Some(advanced) = &self.advanced {
            pairs.extend(advanced.query_pairs());
        }
        pairs
    }

    pub fn query_string(&self) -> String {
        self.query_pairs()
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn to_url(&self, server_url: &str, endpoint: &str) -> String {
        format!(
            "{}/{}?{}",
            server_url.trim_end_matches('/'),
            endpoint,
            self.query_string()
        )
    }
}
