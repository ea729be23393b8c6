use crate::dashboards::RetailDashboard;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <RetailDashboard />
    }
}
