use contracts::dashboards::d410_sales_overview::{FilterOptionCatalog, FilterOptions, SortOption};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::filters::SalesFilters;
use super::sort_select::SortSelect;
use super::summary_cards::SummaryCards;
use super::table::SalesTable;
use crate::dashboards::d410_sales_overview::api::{HttpSalesApi, SalesApi};
use crate::dashboards::d410_sales_overview::hook::use_sales_data;
use crate::dashboards::d410_sales_overview::url_state::{initial_query, sync_query_to_url};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::icons::icon;

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// D410 Sales Overview - searchable, filterable, paged list of sales transactions
#[component]
pub fn SalesOverviewDashboard() -> impl IntoView {
    let restored = initial_query();

    let inputs = RwSignal::new(restored.clone());
    let catalog = RwSignal::new(FilterOptionCatalog::default());

    let query = Memo::new(move |_| inputs.get());
    let filters = Memo::new(move |_| inputs.with(|q| q.filters.clone()));
    let sort = Memo::new(move |_| inputs.with(|q| q.sort));

    let data = use_sales_data(query);
    let state = data.state;
    sync_query_to_url(query, Signal::derive(move || state.with(|s| s.served_page())));

    // Filter choices are loaded once; on failure the dropdowns stay empty
    spawn_local(async move {
        match HttpSalesApi.fetch_filter_options().await {
            Ok(options) => catalog.set(options),
            Err(err) => log::error!("Failed to fetch filter options: {}", err),
        }
    });

    // Only a real change resets to page 1 and reaches the query
    let on_search = Callback::new(move |text: String| {
        inputs.maybe_update(|q| q.apply_search(&text));
    });
    let on_filters_change = Callback::new(move |next: FilterOptions| {
        inputs.maybe_update(|q| q.apply_filters(next));
    });
    let on_sort_change = Callback::new(move |next: SortOption| {
        inputs.maybe_update(|q| q.apply_sort(next));
    });
    let on_page_change = Callback::new(move |page: u32| {
        let mut moved = false;
        inputs.maybe_update(|q| {
            moved = q.apply_page(page);
            moved
        });
        if moved {
            scroll_to_top();
        }
    });
    let on_page_size_change = Callback::new(move |page_size: u32| {
        inputs.maybe_update(|q| q.apply_page_size(page_size));
    });

    let loading = data.loading();
    let error = data.error();

    view! {
        <div class="sales-overview">
            <div class="sales-overview__header">
                <h1 class="sales-overview__title">"Sales Management System"</h1>
                <p class="sales-overview__subtitle">"Manage and analyze your sales transactions"</p>
            </div>

            <SearchInput initial=restored.search on_change=on_search placeholder="Name, Phone no." />

            <SalesFilters
                filters=filters
                catalog=catalog
                on_change=on_filters_change
            />

            <div class="sales-overview__toolbar">
                <button
                    class="button button--secondary"
                    title="Refresh data"
                    on:click=move |_| data.refresh()
                >
                    {icon("refresh")}
                    <span>"Refresh"</span>
                </button>
                <SortSelect sort=sort on_change=on_sort_change />
            </div>

            {move || error.get().map(|message| view! {
                <div class="alert alert--error">
                    <p>"Error: " {message}</p>
                </div>
            })}

            <SummaryCards
                stats=Signal::derive(move || state.with(|s| s.summary.clone()))
                loading=loading
            />

            <p class="sales-overview__count">
                {move || state.with(|s| format!("Showing {} of {} transactions", s.transactions.len(), s.total))}
            </p>

            <SalesTable
                transactions=Signal::derive(move || state.with(|s| s.transactions.clone()))
                loading=loading
            />

            <Show when=move || state.with(|s| s.total_pages > 1)>
                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.current_page))
                    total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                    page_size=Signal::derive(move || inputs.with(|q| q.pagination.page_size))
                    on_page_change=on_page_change
                    on_page_size_change=on_page_size_change
                    disabled=loading
                />
            </Show>
        </div>
    }
}
