use crate::shared::icons::icon;
use crate::shared::number_format::{format_inr, format_int};
use leptos::prelude::*;

/// How a stat card renders its number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// Whole rupees, en-IN grouping
    Currency,
    Integer,
}

fn format_value(val: f64, fmt: ValueFormat) -> String {
    match fmt {
        ValueFormat::Currency => format_inr(val),
        ValueFormat::Integer => format_int(val.round() as i64),
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Primary numeric value (None = nothing loaded yet)
    #[prop(into)]
    value: Signal<Option<f64>>,
    /// How to format the value
    format: ValueFormat,
    /// Renders a skeleton instead of the value
    #[prop(into)]
    loading: Signal<bool>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_value(v, format),
        None => "—".to_string(),
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=move || if loading.get() { "stat-card stat-card--loading" } else { "stat-card" }>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                {move || if loading.get() {
                    view! { <div class="stat-card__skeleton"></div> }.into_any()
                } else {
                    view! {
                        <div class="stat-card__value">{formatted}</div>
                        {subtitle_view}
                    }.into_any()
                }}
            </div>
        </div>
    }
}
