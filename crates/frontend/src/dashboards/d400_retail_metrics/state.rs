//! Per-panel request state.

use contracts::dashboards::d400_retail_metrics::ReportMonth;
use contracts::shared::ranking::MetricAxis;

/// What a panel shows while its month is loading, failed or loaded.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Default for PanelState<T> {
    fn default() -> Self {
        PanelState::Loading
    }
}

impl<T> PanelState<T> {
    pub fn from_result(result: Result<T, String>) -> Self {
        match result {
            Ok(data) => PanelState::Ready(data),
            Err(message) => PanelState::Failed(message),
        }
    }
}

/// Issued for every fetch; only the latest ticket may write the panel state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    pub sequence: u64,
    pub month: ReportMonth,
}

/// Guards a panel against responses that arrive after a newer month was picked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn begin(&mut self, month: ReportMonth) -> RequestTicket {
        self.latest += 1;
        RequestTicket {
            sequence: self.latest,
            month,
        }
    }

    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        ticket.sequence == self.latest
    }
}

/// User choices shared by all panels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardSelection {
    pub month: ReportMonth,
    pub axis: MetricAxis,
}

impl DashboardSelection {
    pub fn with_month(self, month: ReportMonth) -> Self {
        Self { month, ..self }
    }

    pub fn with_axis(self, axis: MetricAxis) -> Self {
        Self { axis, ..self }
    }
}
