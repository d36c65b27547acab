use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use crate::domain::entities::search::{MultiSelectField, RangeField};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeInput {
    pub lower: String,
    pub upper: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiSelectState {
    pub options: Vec<SelectOption>,
    pub checked: BTreeSet<String>,
}

impl MultiSelectState {
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self {
            options,
            checked: BTreeSet::new(),
        }
    }

    pub fn set_checked(&mut self, value: &str, checked: bool) {
        if checked {
            self.checked.insert(value.to_string());
        } else {
            self.checked.remove(value);
        }
    }

    pub fn is_checked(&self, value: &str) -> bool {
        self.checked.contains(value)
    }

    /// Checked values in option order, not click order.
    pub fn checked_values(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|opt| self.checked.contains(&opt.value))
            .map(|opt| opt.value.clone())
            .collect()
    }

    pub fn checked_labels(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|opt| self.checked.contains(&opt.value))
            .map(|opt| opt.label.clone())
            .collect()
    }
}

/// Live state of the advanced-search form controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFormState {
    pub regex_search: String,
    pub ignore_case: bool,
    pub ranges: BTreeMap<RangeField, RangeInput>,
    pub selects: BTreeMap<MultiSelectField, MultiSelectState>,
}

impl SearchFormState {
    pub fn with_options(options: BTreeMap<MultiSelectField, Vec<SelectOption>>) -> Self {
        let ranges = RangeField::ALL
            .iter()
            .map(|field| (*field, RangeInput::default()))
            .collect();
        let selects = MultiSelectField::ALL
            .iter()
            .map(|field| {
                let field_options = options.get(field).cloned().unwrap_or_default();
                (*field, MultiSelectState::new(field_options))
            })
            .collect();
        Self {
            regex_search: String::new(),
            ignore_case: false,
            ranges,
            selects,
        }
    }

    pub fn range(&self, field: RangeField) -> RangeInput {
        self.ranges.get(&field).cloned().unwrap_or_default()
    }

    pub fn set_lower(&mut self, field: RangeField, value: impl Into<String>) {
        self.ranges.entry(field).or_default().lower = value.into();
    }

    pub fn set_upper(&mut self, field: RangeField, value: impl Into<String>) {
        self.ranges.entry(field).or_default().upper = value.into();
    }

    pub fn select(&self, field: MultiSelectField) -> Option<&MultiSelectState> {
        self.selects.get(&field)
    }

    pub fn set_checked(&mut self, field: MultiSelectField, value: &str, checked: bool) {
        self.selects
            .entry(field)
            .or_default()
            .set_checked(value, checked);
    }

    pub fn checked_values(&self, field: MultiSelectField) -> Vec<String> {
        self.selects
            .get(&field)
            .map(MultiSelectState::checked_values)
            .unwrap_or_default()
    }
}
