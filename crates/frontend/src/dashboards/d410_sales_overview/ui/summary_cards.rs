use contracts::dashboards::d410_sales_overview::SummaryStats;
use leptos::prelude::*;

use crate::shared::components::stat_card::{StatCard, ValueFormat};

#[component]
pub fn SummaryCards(
    #[prop(into)] stats: Signal<Option<SummaryStats>>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    let pick = move |f: fn(&SummaryStats) -> f64| Signal::derive(move || stats.with(|s| s.as_ref().map(f)));

    view! {
        <div class="summary-cards">
            <StatCard
                label="Total Units Sold"
                icon_name="units"
                value=pick(|s| s.total_units_sold as f64)
                format=ValueFormat::Integer
                loading=loading
            />
            <StatCard
                label="Total Amount"
                icon_name="amount"
                value=pick(|s| s.total_amount)
                format=ValueFormat::Currency
                loading=loading
                subtitle=Signal::derive(move || {
                    stats.with(|s| s.as_ref().map(|s| format!("({} transactions)", s.total_transactions)))
                })
            />
            <StatCard
                label="Total Discount"
                icon_name="discount"
                value=pick(|s| s.total_discount)
                format=ValueFormat::Currency
                loading=loading
            />
        </div>
    }
}
