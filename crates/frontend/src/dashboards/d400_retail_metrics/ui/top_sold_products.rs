use contracts::dashboards::d400_retail_metrics::{ProductRecord, ReportMonth};
use contracts::shared::ranking::presentation::{format_metric, format_share};
use contracts::shared::ranking::{aggregate, rank, share_of_total, MetricAxis, SortDirection, SortState};
use leptos::prelude::*;

use super::panel::{
    empty_view, load_on_month_change, metric_bar, render_state, row_style, PANEL_STYLE, TITLE_STYLE,
};
use crate::dashboards::d400_retail_metrics::api;
use crate::dashboards::d400_retail_metrics::state::PanelState;

/// Products ranked by the selected metric, with their share of the month
#[component]
pub fn TopSoldProducts(month: Memo<ReportMonth>, axis: Memo<MetricAxis>) -> impl IntoView {
    let (state, set_state) = signal(PanelState::<Vec<ProductRecord>>::default());
    load_on_month_change(month, set_state, api::fetch_products);

    let render_list = move |records: &Vec<ProductRecord>| -> AnyView {
        if records.is_empty() {
            return empty_view();
        }
        let axis = axis.get();
        let total = aggregate(records, axis).total;
        let by_metric = SortState::by(axis.field(), SortDirection::Descending);

        rank(records, axis, &by_metric)
            .into_iter()
            .map(|row| {
                // Supplied shares win; otherwise derive one from the month total
                let share = row
                    .record
                    .share(axis)
                    .or_else(|| share_of_total(row.metric_value, total));
                view! {
                    <div style=format!(
                        "display: grid; grid-template-columns: 28px 1fr 2fr 56px; gap: 8px; align-items: center; padding: 4px; {}",
                        row_style(row.is_top(), axis.accent_color())
                    )>
                        <span style="color: #888;">{row.rank}</span>
                        <span>{row.record.name.clone().unwrap_or_default()}</span>
                        {metric_bar(
                            format_metric(row.metric_value, axis),
                            row.bar_percent(),
                            if row.is_top() { axis.bar_color() } else { axis.soft_color() },
                        )}
                        <span style="text-align: right; color: #555;">{format_share(share)}</span>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <section class="d400-panel" style=PANEL_STYLE>
            <h2 style=TITLE_STYLE>
                {move || format!("Top Sold Products by {}", axis.get().label())}
            </h2>
            {move || state.with(|state| render_state(state, render_list))}
        </section>
    }
}
