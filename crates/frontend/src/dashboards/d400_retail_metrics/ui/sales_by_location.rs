use contracts::dashboards::d400_retail_metrics::{
    map_center, marker_radius, CityRecord, GeoBounds, ReportMonth,
};
use contracts::shared::ranking::presentation::format_metric;
use contracts::shared::ranking::{rank, MetricAxis, ScaledRow, SortDirection, SortState};
use leptos::prelude::*;

use super::panel::{
    empty_view, load_on_month_change, render_state, row_style, PANEL_STYLE, TITLE_STYLE,
};
use crate::dashboards::d400_retail_metrics::api;
use crate::dashboards::d400_retail_metrics::state::PanelState;

const MAP_WIDTH: f64 = 520.0;
const MAP_HEIGHT: f64 = 300.0;
const MAP_PADDING: f64 = 28.0;
const TOP_LOCATIONS: usize = 5;

/// One city marker in map coordinates.
#[derive(Debug, Clone, PartialEq)]
struct Marker {
    x: f64,
    y: f64,
    radius: f64,
    fill: &'static str,
    label: String,
}

/// Markers of the located cities, smallest first so large markers do not
/// hide small ones. `None` when no city carries coordinates.
fn map_markers(rows: &[ScaledRow<'_, CityRecord>], bounds: Option<GeoBounds>, axis: MetricAxis) -> Option<Vec<Marker>> {
    let bounds = bounds?;
    let markers = rows
        .iter()
        .rev()
        .filter_map(|row| {
            let point = row.record.position()?;
            let (x, y) = bounds.project(point, MAP_WIDTH, MAP_HEIGHT, MAP_PADDING);
            Some(Marker {
                x,
                y,
                radius: marker_radius(row.scale_ratio),
                fill: if row.is_top() { axis.bar_color() } else { axis.soft_color() },
                label: row.record.marker_label(row.metric_value, axis),
            })
        })
        .collect();
    Some(markers)
}

/// Marker map of the cities plus a short table of the leading ones
#[component]
pub fn SalesByLocation(month: Memo<ReportMonth>, axis: Memo<MetricAxis>) -> impl IntoView {
    let (state, set_state) = signal(PanelState::<Vec<CityRecord>>::default());
    let (hovered, set_hovered) = signal(None::<String>);
    load_on_month_change(month, set_state, api::fetch_cities);

    let render_map = move |records: &Vec<CityRecord>| -> AnyView {
        if records.is_empty() {
            return empty_view();
        }
        let axis = axis.get();
        let bounds = GeoBounds::from_cities(records);
        let rows = rank(
            records,
            axis,
            &SortState::by(axis.field(), SortDirection::Descending),
        );

        // Cities without coordinates still rank in the table below
        let map = map_markers(&rows, bounds, axis).map(|markers| {
            let circles = markers
                .into_iter()
                .map(|marker| {
                    let label = marker.label;
                    view! {
                        <circle
                            cx=format!("{:.1}", marker.x)
                            cy=format!("{:.1}", marker.y)
                            r=format!("{:.1}", marker.radius)
                            fill=marker.fill
                            fill-opacity="0.75"
                            stroke="#ffffff"
                            stroke-width="1"
                            style="cursor: pointer;"
                            on:mouseenter=move |_| set_hovered.set(Some(label.clone()))
                            on:mouseleave=move |_| set_hovered.set(None)
                        ></circle>
                    }
                })
                .collect_view();

            let center = bounds.zip(map_center(records)).map(|(bounds, point)| {
                let (x, y) = bounds.project(point, MAP_WIDTH, MAP_HEIGHT, MAP_PADDING);
                view! {
                    <rect
                        x=format!("{:.1}", x - 3.0)
                        y=format!("{:.1}", y - 3.0)
                        width="6"
                        height="6"
                        fill="#333333"
                    ></rect>
                }
            });

            view! {
                <div style="position: relative;">
                    <svg
                        viewBox=format!("0 0 {} {}", MAP_WIDTH, MAP_HEIGHT)
                        style="width: 100%; height: auto; background: #eef3fb; border-radius: 6px;"
                    >
                        {circles}
                        {center}
                    </svg>
                    <div style="position: absolute; top: 8px; left: 8px; font-size: 12px; background: rgba(255,255,255,0.9); padding: 2px 6px; border-radius: 4px;">
                        {move || hovered.get().unwrap_or_else(|| "Hover a marker for details".to_string())}
                    </div>
                </div>
            }
        });

        let leaders = rows
            .iter()
            .take(TOP_LOCATIONS)
            .map(|row| {
                view! {
                    <tr style=row_style(row.is_top(), axis.accent_color())>
                        <td style="padding: 4px;">{row.rank}</td>
                        <td style="padding: 4px;">{row.record.city.clone().unwrap_or_default()}</td>
                        <td style="padding: 4px; text-align: right;">
                            {format_metric(row.metric_value, axis)}
                        </td>
                    </tr>
                }
            })
            .collect_view();

        view! {
            <div>
                {map}
                <table style="width: 100%; border-collapse: collapse; font-size: 13px; margin-top: 8px;">
                    <tbody>{leaders}</tbody>
                </table>
            </div>
        }
        .into_any()
    };

    view! {
        <section class="d400-panel" style=PANEL_STYLE>
            <h2 style=TITLE_STYLE>{move || axis.get().location_title()}</h2>
            {move || state.with(|state| render_state(state, render_map))}
        </section>
    }
}
