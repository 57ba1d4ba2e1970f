use contracts::dashboards::d410_sales_overview::{SortOption, SORT_PRESETS};
use leptos::prelude::*;

#[component]
pub fn SortSelect(#[prop(into)] sort: Signal<SortOption>, on_change: Callback<SortOption>) -> impl IntoView {
    view! {
        <div class="sort-select">
            <label class="form__label">"Sort by:"</label>
            <select
                class="form__select"
                prop:value=move || sort.get().key()
                on:change=move |ev| {
                    if let Some(option) = SortOption::from_key(&event_target_value(&ev)) {
                        on_change.run(option);
                    }
                }
            >
                {SORT_PRESETS.iter().map(|preset| {
                    view! { <option value=preset.option.key()>{preset.label}</option> }
                }).collect_view()}
            </select>
        </div>
    }
}
