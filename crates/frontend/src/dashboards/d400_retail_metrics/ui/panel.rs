//! Building blocks shared by the dashboard panels.

use std::future::Future;

use contracts::dashboards::d400_retail_metrics::ReportMonth;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::d400_retail_metrics::state::{PanelState, RequestTracker};

pub const PANEL_STYLE: &str = "background: #fff; border: 1px solid #e0e0e0; border-radius: 8px; padding: 16px; min-width: 0;";
pub const TITLE_STYLE: &str = "margin: 0 0 12px 0; font-size: 16px; font-weight: 600;";

/// Re-fetches the panel data whenever the selected month changes.
///
/// Responses of superseded requests are dropped, so a slow answer for an old
/// month never overwrites the current one.
pub fn load_on_month_change<T, F, Fut>(
    month: Memo<ReportMonth>,
    set_state: WriteSignal<PanelState<T>>,
    fetch: F,
) where
    T: Send + Sync + 'static,
    F: Fn(ReportMonth) -> Fut + Copy + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let tracker = StoredValue::new(RequestTracker::default());

    Effect::new(move |_| {
        let selected = month.get();
        let mut current = tracker.get_value();
        let ticket = current.begin(selected);
        tracker.set_value(current);
        set_state.set(PanelState::Loading);

        spawn_local(async move {
            let result = fetch(selected).await;
            if tracker.get_value().is_current(&ticket) {
                set_state.set(PanelState::from_result(result));
            } else {
                log::debug!(
                    "Dropped stale response #{} for {}",
                    ticket.sequence,
                    ticket.month
                );
            }
        });
    });
}

pub fn render_state<T>(state: &PanelState<T>, render: impl FnOnce(&T) -> AnyView) -> AnyView {
    match state {
        PanelState::Loading => loading_view(),
        PanelState::Failed(message) => error_view(message),
        PanelState::Ready(data) => render(data),
    }
}

pub fn loading_view() -> AnyView {
    view! {
        <div class="d400-loading" style="padding: 24px; text-align: center; color: #888;">
            <span>"Loading data..."</span>
        </div>
    }
    .into_any()
}

pub fn error_view(message: &str) -> AnyView {
    view! {
        <div class="d400-error" style="padding: 12px; color: #b71c1c; background: #ffebee; border-radius: 4px;">
            <strong>"⚠ "</strong>
            {message.to_string()}
        </div>
    }
    .into_any()
}

pub fn empty_view() -> AnyView {
    view! {
        <div class="d400-empty" style="padding: 24px; text-align: center; color: #888;">
            "No data"
        </div>
    }
    .into_any()
}

/// Horizontal bar sized by a percentage with the formatted value beside it.
pub fn metric_bar(label: String, percent: f64, color: &'static str) -> AnyView {
    view! {
        <div style="display: flex; align-items: center; gap: 8px;">
            <div style="flex: 1; background: #f0f0f0; height: 10px; border-radius: 4px; overflow: hidden;">
                <div style=format!(
                    "width: {:.1}%; background: {}; height: 100%; border-radius: 4px;",
                    percent, color
                )></div>
            </div>
            <span style="min-width: 64px; text-align: right; font-variant-numeric: tabular-nums;">
                {label}
            </span>
        </div>
    }
    .into_any()
}

pub fn row_style(is_top: bool, accent: &'static str) -> String {
    if is_top {
        format!("background: {}; font-weight: 600;", accent)
    } else {
        String::new()
    }
}
