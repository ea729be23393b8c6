use contracts::dashboards::d400_retail_metrics::{DashboardSummary, ReportMonth};
use contracts::shared::ranking::presentation::{format_metric, format_stat};
use contracts::shared::ranking::MetricAxis;
use leptos::prelude::*;

use super::panel::{load_on_month_change, render_state};
use super::{CustomerDetails, DailySalesTrend, SalesByLocation, TopSoldProducts};
use crate::dashboards::d400_retail_metrics::api;
use crate::dashboards::d400_retail_metrics::state::{DashboardSelection, PanelState};

/// Retail metrics dashboard page
#[component]
pub fn RetailDashboard() -> impl IntoView {
    let (selection, set_selection) = signal(DashboardSelection::default());
    // Memos keep axis switches from re-fetching and month switches from re-sorting
    let month = Memo::new(move |_| selection.get().month);
    let axis = Memo::new(move |_| selection.get().axis);

    let (summary, set_summary) = signal(PanelState::<DashboardSummary>::default());
    load_on_month_change(month, set_summary, api::fetch_summary);

    let on_month_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        match value.parse::<ReportMonth>() {
            Ok(next) => set_selection.update(|s| *s = s.with_month(next)),
            Err(e) => log::warn!("{}", e),
        }
    };

    view! {
        <div
            id="d400_retail_metrics--dashboard"
            class="d400-dashboard"
            style="font-family: sans-serif; padding: 16px; background: #f7f8fc; min-height: 100vh;"
        >
            <header style="display: flex; align-items: center; gap: 16px; margin-bottom: 16px;">
                <h1 style="margin: 0; font-size: 22px; flex: 1;">"Retail Dashboard"</h1>
                <select
                    style="padding: 6px 8px;"
                    prop:value=move || month.get().as_str()
                    on:change=on_month_change
                >
                    {ReportMonth::ALL
                        .into_iter()
                        .map(|m| view! { <option value=m.as_str()>{m.as_str()}</option> })
                        .collect_view()}
                </select>
                <button
                    style=move || format!(
                        "padding: 6px 12px; border: none; border-radius: 4px; color: #fff; cursor: pointer; background: {};",
                        axis.get().bar_color()
                    )
                    on:click=move |_| set_selection.update(|s| *s = s.with_axis(s.axis.toggled()))
                >
                    {move || format!("Show {}", axis.get().toggled().label())}
                </button>
            </header>

            {move || summary.with(|state| render_state(state, summary_stats))}

            <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(420px, 1fr)); gap: 16px; margin-top: 16px;">
                <CustomerDetails month=month axis=axis />
                <TopSoldProducts month=month axis=axis />
                <SalesByLocation month=month axis=axis />
                <DailySalesTrend month=month axis=axis />
            </div>
        </div>
    }
}

fn summary_stats(summary: &DashboardSummary) -> AnyView {
    let mut cards = vec![
        ("Customers", summary.total_customer.to_string()),
        ("Products", summary.total_products.to_string()),
        ("Total Sales", format_metric(summary.total_sales, MetricAxis::Sales)),
        ("Total Quantity", format_metric(summary.total_quantity, MetricAxis::Quantity)),
    ];
    // Averages are omitted rather than shown as non-numbers
    if let Some(avg) = format_stat(summary.average_sales) {
        cards.push(("Avg. Sales", avg));
    }
    if let Some(avg) = format_stat(summary.average_quantity) {
        cards.push(("Avg. Quantity", avg));
    }

    view! {
        <div style="display: flex; flex-wrap: wrap; gap: 12px;">
            {cards
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <div style="flex: 1; min-width: 140px; background: #fff; border: 1px solid #e0e0e0; border-radius: 8px; padding: 12px;">
                            <div style="font-size: 12px; color: #666;">{label}</div>
                            <div style="font-size: 20px; font-weight: 600;">{value}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}
