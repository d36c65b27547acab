use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlertId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    #[allow(dead_code)]
    Success,
    Info,
    Warning,
    Danger,
}

impl AlertLevel {
    pub fn css_class(self) -> &'static str {
        match self {
            AlertLevel::Success => "alert-success",
            AlertLevel::Info => "alert-info",
            AlertLevel::Warning => "alert-warning",
            AlertLevel::Danger => "alert-danger",
        }
    }

    pub fn colors(self) -> (&'static str, &'static str) {
        match self {
            AlertLevel::Success => ("#d4edda", "#155724"),
            AlertLevel::Info => ("#d1ecf1", "#0c5460"),
            AlertLevel::Warning => ("#fff3cd", "#856404"),
            AlertLevel::Danger => ("#f8d7da", "#721c24"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub id: AlertId,
    pub level: AlertLevel,
    pub message: String,
    pub auto_close: Option<Duration>,
}

/// Open alert banners in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertBoard {
    alerts: Vec<Alert>,
    next_id: u64,
}

impl AlertBoard {
    pub fn push(
        &mut self,
        level: AlertLevel,
        message: impl Into<String>,
        auto_close: Option<Duration>,
    ) -> AlertId {
        let id = AlertId(self.next_id);
        self.next_id += 1;
        self.alerts.push(Alert {
            id,
            level,
            message: message.into(),
            auto_close,
        });
        id
    }

    /// Rewrites `existing` in place while it is still open, otherwise pushes.
    pub fn upsert(
        &mut self,
        existing: Option<AlertId>,
        level: AlertLevel,
        message: impl Into<String>,
        auto_close: Option<Duration>,
    ) -> AlertId {
        let open = existing.and_then(|id| self.alerts.iter().position(|alert| alert.id == id));
        let Some(index) = open else {
            return self.push(level, message, auto_close);
        };
        let alert = &mut self.alerts[index];
        alert.level = level;
        alert.message = message.into();
        alert.auto_close = auto_close;
        alert.id
    }

    /// Returns false when the alert was already closed.
    pub fn dismiss(&mut self, id: AlertId) -> bool {
        let before = self.alerts.len();
        self.alerts.retain(|alert| alert.id != id);
        self.alerts.len() != before
    }

    #[allow(dead_code)]
    pub fn contains(&self, id: AlertId) -> bool {
        self.alerts.iter().any(|alert| alert.id == id)
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    pub fn auto_closing(&self) -> impl Iterator<Item = (AlertId, Duration)> + '_ {
        self.alerts
            .iter()
            .filter_map(|alert| alert.auto_close.map(|delay| (alert.id, delay)))
    }
}
