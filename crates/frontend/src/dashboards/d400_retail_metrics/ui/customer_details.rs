use contracts::dashboards::d400_retail_metrics::{CustomerRecord, ReportMonth};
use contracts::shared::ranking::presentation::{format_compact, format_metric};
use contracts::shared::ranking::{rank, toggle_sort, MetricAxis, SortState};
use leptos::prelude::*;

use super::panel::{
    empty_view, load_on_month_change, metric_bar, render_state, row_style, PANEL_STYLE, TITLE_STYLE,
};
use crate::dashboards::d400_retail_metrics::api;
use crate::dashboards::d400_retail_metrics::state::PanelState;
use crate::shared::list_utils::{sort_header_style, sort_indicator};

const COLUMNS: [(&str, &str); 6] = [
    ("id", "ID"),
    ("country", "Country"),
    ("date", "Date"),
    ("purchases", "Purchases"),
    ("sales", "Sales"),
    ("quantity", "Quantity"),
];

/// Sortable customer table with a bar for the selected metric
#[component]
pub fn CustomerDetails(month: Memo<ReportMonth>, axis: Memo<MetricAxis>) -> impl IntoView {
    let (state, set_state) = signal(PanelState::<Vec<CustomerRecord>>::default());
    let (sort_state, set_sort_state) = signal(SortState::default());
    load_on_month_change(month, set_state, api::fetch_customers);

    let render_table = move |records: &Vec<CustomerRecord>| -> AnyView {
        if records.is_empty() {
            return empty_view();
        }
        let axis = axis.get();
        let sort = sort_state.get();

        let headers = COLUMNS
            .into_iter()
            .map(|(column, label)| {
                view! {
                    <th
                        style=sort_header_style(&sort, column)
                        on:click=move |_| set_sort_state.update(|s| *s = toggle_sort(s, column))
                    >
                        {label}
                        {sort_indicator(&sort, column)}
                    </th>
                }
            })
            .collect_view();

        let rows = rank(records, axis, &sort)
            .into_iter()
            .map(|row| {
                let customer = row.record;
                view! {
                    <tr style=row_style(row.is_top(), axis.accent_color())>
                        <td>{row.rank}</td>
                        <td>{customer.id.as_ref().map(ToString::to_string).unwrap_or_default()}</td>
                        <td>{customer.country.clone().unwrap_or_default()}</td>
                        <td>{customer.date.clone().unwrap_or_default()}</td>
                        <td>{customer.purchases.map(|p| p.to_string()).unwrap_or_default()}</td>
                        <td>{customer.sales.map(format_compact).unwrap_or_default()}</td>
                        <td>{customer.quantity.map(format_compact).unwrap_or_default()}</td>
                        <td style="min-width: 160px;">
                            {metric_bar(
                                format_metric(row.metric_value, axis),
                                row.bar_percent(),
                                axis.bar_color(),
                            )}
                        </td>
                    </tr>
                }
            })
            .collect_view();

        view! {
            <div style="max-height: 420px; overflow-y: auto;">
                <table style="width: 100%; border-collapse: collapse; font-size: 13px;">
                    <thead>
                        <tr>
                            <th style="padding: 6px 4px; text-align: left;">"#"</th>
                            {headers}
                            <th style="padding: 6px 4px; text-align: left;">{axis.label()}</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
        }
        .into_any()
    };

    view! {
        <section class="d400-panel" style=PANEL_STYLE>
            <h2 style=TITLE_STYLE>"Customer Details"</h2>
            {move || state.with(|state| render_state(state, render_table))}
        </section>
    }
}
