use chrono::{Datelike, Duration, NaiveDate, Weekday};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodayButton {
    #[allow(dead_code)]
    Off,
    /// Shows the current month without selecting.
    #[allow(dead_code)]
    Shown,
    /// Selects today's date as well.
    Linked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePickerLocale {
    pub language: &'static str,
    pub days_min: [&'static str; 7],
    pub months: [&'static str; 12],
    pub today: &'static str,
    pub clear: &'static str,
}

pub const LOCALE_FI: DatePickerLocale = DatePickerLocale {
    language: "fi",
    days_min: ["ma", "ti", "ke", "to", "pe", "la", "su"],
    months: [
        "tammikuu",
        "helmikuu",
        "maaliskuu",
        "huhtikuu",
        "toukokuu",
        "kesäkuu",
        "heinäkuu",
        "elokuu",
        "syyskuu",
        "lokakuu",
        "marraskuu",
        "joulukuu",
    ],
    today: "tänään",
    clear: "Tyhjennä",
};

impl DatePickerLocale {
    pub fn day_name(&self, day: Weekday) -> &'static str {
        self.days_min[day.num_days_from_monday() as usize]
    }

    pub fn month_name(&self, month: u32) -> &'static str {
        self.months[(month.clamp(1, 12) - 1) as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePickerConfig {
    pub format: &'static str,
    pub week_start: Weekday,
    pub today_btn: TodayButton,
    pub locale: DatePickerLocale,
    pub clear_btn: bool,
}

impl DatePickerConfig {
    /// `#datepicker`, `#datepicker2`.
    pub fn single() -> Self {
        Self {
            format: "yyyy-mm-dd",
            week_start: Weekday::Mon,
            today_btn: TodayButton::Linked,
            locale: LOCALE_FI,
            clear_btn: false,
        }
    }

    /// `.input-daterange`.
    pub fn range() -> Self {
        Self {
            clear_btn: true,
            ..Self::single()
        }
    }

    pub fn chrono_format(&self) -> String {
        self.format
            .replace("yyyy", "%Y")
            .replace("mm", "%m")
            .replace("dd", "%d")
    }

    pub fn format_date(&self, date: NaiveDate) -> String {
        date.format(&self.chrono_format()).to_string()
    }

    pub fn parse_date(&self, text: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(text.trim(), &self.chrono_format()).ok()
    }

    pub fn weekday_headers(&self) -> Vec<&'static str> {
        let mut day = self.week_start;
        (0..7)
            .map(|_| {
                let name = self.locale.day_name(day);
                day = day.succ();
                name
            })
            .collect()
    }

    /// Calendar cells for a month, padded with `None` before the first day.
    pub fn month_grid(&self, year: i32, month: u32) -> Vec<Option<NaiveDate>> {
        let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
            return Vec::new();
        };
        let lead = (first.weekday().num_days_from_monday() + 7
            - self.week_start.num_days_from_monday())
            % 7;
        let mut cells: Vec<Option<NaiveDate>> = vec![None; lead as usize];
        let mut day = first;
        while day.month() == month {
            cells.push(Some(day));
            day += Duration::days(1);
        }
        cells
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectPickerConfig {
    pub icon_base: &'static str,
    pub tick_icon: &'static str,
    pub none_selected_text: &'static str,
    pub style: &'static str,
    pub style_base: &'static str,
}

impl Default for SelectPickerConfig {
    fn default() -> Self {
        Self {
            icon_base: "fa",
            tick_icon: "fa-check",
            none_selected_text: "Ei mitään valittuna",
            style: "",
            style_base: "form-control",
        }
    }
}

impl SelectPickerConfig {
    pub fn button_class(&self) -> String {
        format!("{} {}", self.style_base, self.style)
            .trim()
            .to_string()
    }

    pub fn tick_class(&self) -> String {
        format!("{} {}", self.icon_base, self.tick_icon)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolbarButton {
    pub id: &'static str,
    pub text: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub modal_target: &'static str,
}

pub const ADVANCED_SEARCH_BUTTON: ToolbarButton = ToolbarButton {
    id: "tarkennettu_haku",
    text: "Tarkennettu haku",
    title: "Tarkennettu haku",
    icon: "fa-search-plus",
    modal_target: "advancedSearch",
};
