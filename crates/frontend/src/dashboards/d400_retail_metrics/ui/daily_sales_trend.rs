use contracts::dashboards::d400_retail_metrics::{
    day_over_day_change, CustomerRecord, DailyPoint, ReportMonth, TrendSeries,
};
use contracts::shared::ranking::presentation::{format_compact, format_metric};
use contracts::shared::ranking::MetricAxis;
use leptos::prelude::*;

use super::panel::{empty_view, load_on_month_change, render_state, PANEL_STYLE, TITLE_STYLE};
use crate::dashboards::d400_retail_metrics::api;
use crate::dashboards::d400_retail_metrics::state::PanelState;

const CHART_WIDTH: f64 = 520.0;
const CHART_HEIGHT: f64 = 220.0;
const COLUMN_GAP: f64 = 2.0;

/// Daily columns for the selected metric with the purchase count as a line
#[component]
pub fn DailySalesTrend(month: Memo<ReportMonth>, axis: Memo<MetricAxis>) -> impl IntoView {
    let (state, set_state) = signal(PanelState::<Vec<CustomerRecord>>::default());
    load_on_month_change(month, set_state, api::fetch_customers);

    let render_chart = move |records: &Vec<CustomerRecord>| -> AnyView {
        let axis = axis.get();
        let points: Vec<DailyPoint> = records.iter().map(DailyPoint::from).collect();
        let series = TrendSeries::build(&points, axis);
        if series.is_empty() {
            return empty_view();
        }

        let step = CHART_WIDTH / series.categories.len() as f64;
        let columns = series
            .value_ratios
            .iter()
            .enumerate()
            .map(|(i, ratio)| {
                let height = ratio * CHART_HEIGHT;
                view! {
                    <rect
                        x=format!("{:.1}", i as f64 * step + COLUMN_GAP / 2.0)
                        y=format!("{:.1}", CHART_HEIGHT - height)
                        width=format!("{:.1}", (step - COLUMN_GAP).max(1.0))
                        height=format!("{:.1}", height)
                        fill=axis.bar_color()
                    ></rect>
                }
            })
            .collect_view();

        let purchase_line = series
            .purchase_ratios
            .iter()
            .enumerate()
            .map(|(i, ratio)| {
                format!(
                    "{:.1},{:.1}",
                    (i as f64 + 0.5) * step,
                    CHART_HEIGHT - ratio * CHART_HEIGHT
                )
            })
            .collect::<Vec<_>>()
            .join(" ");

        let change = day_over_day_change(&points, axis).map(|pct| {
            let color = if pct >= 0.0 { "#2e7d32" } else { "#c62828" };
            view! {
                <span style=format!("color: {}; font-weight: 600;", color)>
                    {format!("{:+.1}% vs previous day", pct)}
                </span>
            }
        });

        let first_day = series.categories.first().cloned().unwrap_or_default();
        let last_day = series.categories.last().cloned().unwrap_or_default();

        view! {
            <div>
                <div style="display: flex; gap: 16px; font-size: 13px; margin-bottom: 8px;">
                    <span>{format!("Peak: {}", format_metric(series.max_value, axis))}</span>
                    <span>{format!("Peak purchases: {}", format_compact(series.max_purchases))}</span>
                    {change}
                </div>
                <svg
                    viewBox=format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)
                    style="width: 100%; height: auto; background: #fafafa;"
                    preserveAspectRatio="none"
                >
                    {columns}
                    <polyline
                        points=purchase_line
                        fill="none"
                        stroke="#f57c00"
                        stroke-width="2"
                    ></polyline>
                </svg>
                <div style="display: flex; justify-content: space-between; font-size: 12px; color: #666;">
                    <span>{first_day}</span>
                    <span>{last_day}</span>
                </div>
            </div>
        }
        .into_any()
    };

    view! {
        <section class="d400-panel" style=PANEL_STYLE>
            <h2 style=TITLE_STYLE>{move || axis.get().trend_title()}</h2>
            {move || state.with(|state| render_state(state, render_chart))}
        </section>
    }
}
