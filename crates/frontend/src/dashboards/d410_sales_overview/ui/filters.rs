use contracts::dashboards::d410_sales_overview::{
    FilterDimension, FilterOptionCatalog, FilterOptions, AGE_RANGE_PRESETS,
};
use leptos::prelude::*;

use crate::shared::components::date_range_input::DateRangeInput;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::multi_select::MultiSelect;

fn catalog_values(catalog: &FilterOptionCatalog, dim: FilterDimension) -> Vec<String> {
    match dim {
        FilterDimension::CustomerRegion => catalog.regions.clone(),
        FilterDimension::Gender => catalog.genders.clone(),
        FilterDimension::ProductCategory => catalog.categories.clone(),
        FilterDimension::Tags => catalog.tags.clone(),
        FilterDimension::PaymentMethod => catalog.payment_methods.clone(),
    }
}

/// Filter panel of the sales overview.
///
/// Every edit produces a new `FilterOptions` passed to `on_change`.
#[component]
pub fn SalesFilters(
    #[prop(into)] filters: Signal<FilterOptions>,
    #[prop(into)] catalog: Signal<FilterOptionCatalog>,
    on_change: Callback<FilterOptions>,
) -> impl IntoView {
    let is_expanded = RwSignal::new(false);

    let edit = move |f: &dyn Fn(&mut FilterOptions)| {
        let mut next = filters.get_untracked();
        f(&mut next);
        on_change.run(next);
    };

    let multi_select = move |dim: FilterDimension| {
        view! {
            <MultiSelect
                label=dim.label()
                options=Signal::derive(move || catalog.with(|c| catalog_values(c, dim)))
                selected=Signal::derive(move || filters.with(|f| f.values(dim).to_vec()))
                on_toggle=Callback::new(move |value: String| edit(&|f: &mut FilterOptions| f.toggle(dim, &value)))
            />
        }
    };

    let age_value = move || {
        filters.with(|f| {
            f.age_range
                .map(|r| format!("{}-{}", r.min, r.max))
                .unwrap_or_default()
        })
    };

    let on_age_change = move |key: String| {
        let range = AGE_RANGE_PRESETS
            .iter()
            .find(|p| format!("{}-{}", p.range.min, p.range.max) == key)
            .map(|p| p.range);
        edit(&|f: &mut FilterOptions| f.set_age_range(range));
    };

    let filter_content = move || {
        view! {
            <div class="filter-panel__grid">
                {multi_select(FilterDimension::CustomerRegion)}
                {multi_select(FilterDimension::Gender)}
                <div class="form__group">
                    <label class="form__label">"Age Range"</label>
                    <select
                        class="form__select"
                        prop:value=age_value
                        on:change=move |ev| on_age_change(event_target_value(&ev))
                    >
                        <option value="">"All Ages"</option>
                        {AGE_RANGE_PRESETS.iter().map(|p| {
                            let key = format!("{}-{}", p.range.min, p.range.max);
                            view! { <option value=key>{p.label}</option> }
                        }).collect_view()}
                    </select>
                </div>
                {multi_select(FilterDimension::ProductCategory)}
                {multi_select(FilterDimension::Tags)}
                {multi_select(FilterDimension::PaymentMethod)}
                <DateRangeInput
                    label="Date Range"
                    value=Signal::derive(move || {
                        filters.with(|f| f.date_range.as_ref().map(|r| (r.start.clone(), r.end.clone())))
                    })
                    on_change=Callback::new(move |(from, to): (String, String)| {
                        edit(&|f: &mut FilterOptions| f.set_date_range(&from, &to))
                    })
                />
            </div>
        }
    };

    let filter_tags = move || {
        let current = filters.get();
        let mut tags = Vec::new();

        for dim in FilterDimension::ALL {
            for value in current.values(dim) {
                let value = value.clone();
                let label = format!("{}: {}", dim.label(), value);
                tags.push(view! {
                    <FilterTag
                        label=label
                        on_remove=Callback::new(move |_| edit(&|f: &mut FilterOptions| f.toggle(dim, &value)))
                    />
                }.into_any());
            }
        }
        if let Some(range) = current.age_range {
            tags.push(view! {
                <FilterTag
                    label=format!("Age: {}-{}", range.min, range.max)
                    on_remove=Callback::new(move |_| edit(&|f: &mut FilterOptions| f.set_age_range(None)))
                />
            }.into_any());
        }
        if let Some(range) = current.date_range {
            tags.push(view! {
                <FilterTag
                    label=format!("Date: {} — {}", range.start, range.end)
                    on_remove=Callback::new(move |_| edit(&|f: &mut FilterOptions| f.date_range = None))
                />
            }.into_any());
        }

        view! { <div class="filter-tags">{tags}</div> }
    };

    view! {
        <FilterPanel
            is_expanded=is_expanded
            active_filters_count=Signal::derive(move || filters.with(|f| f.active_count()))
            on_clear=Callback::new(move |_| edit(&|f: &mut FilterOptions| f.clear()))
            filter_tags=filter_tags
        >
            {filter_content()}
        </FilterPanel>
    }
}
