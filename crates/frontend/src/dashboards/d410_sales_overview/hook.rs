use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api::{fetch_overview, HttpSalesApi, SalesApi};
use super::query::SalesQuery;
use super::state::{FetchTicket, SalesDataState};

/// Reactive handle over the sales data of one dashboard instance
#[derive(Clone, Copy)]
pub struct SalesData {
    pub state: RwSignal<SalesDataState>,
    query: Signal<SalesQuery>,
    api: StoredValue<Rc<dyn SalesApi>, LocalStorage>,
}

impl SalesData {
    pub fn new(query: Signal<SalesQuery>, api: Rc<dyn SalesApi>) -> Self {
        let initial_page = query.with_untracked(|q| q.pagination.page);
        Self {
            state: RwSignal::new(SalesDataState::new(initial_page)),
            query,
            api: StoredValue::new_local(api),
        }
    }

    /// Re-issues the combined list + summary fetch for the current query,
    /// whether or not it changed since the last fetch.
    pub fn refresh(&self) {
        if let Some(task) = self.fetch_now() {
            spawn_local(async move {
                task.await;
            });
        }
    }

    /// Starts a fetch unconditionally. The future resolves to `true` when its
    /// result was committed, `false` when a newer fetch superseded it.
    pub fn fetch_now(&self) -> Option<impl Future<Output = bool> + 'static> {
        let query = self.query.get_untracked();
        let ticket = self.state.try_update(|s| s.begin_fetch(&query))?;
        Some(self.run(ticket, query))
    }

    /// Starts a fetch only when the query differs from the one issued last
    pub fn fetch_if_changed(&self) -> Option<impl Future<Output = bool> + 'static> {
        let query = self.query.get_untracked();
        let ticket = self.state.try_update(|s| s.begin_fetch_if_changed(&query))??;
        Some(self.run(ticket, query))
    }

    fn run(&self, ticket: FetchTicket, query: SalesQuery) -> impl Future<Output = bool> + 'static {
        let api = self.api.get_value();
        let state = self.state;

        async move {
            let result = fetch_overview(&*api, &query).await;
            match &result {
                Err(err) if err.is_network() => log::warn!("Sales service unreachable: {}", err),
                Err(err) => log::error!("Error fetching sales data: {}", err),
                Ok(_) => {}
            }
            state
                .try_update(|s| s.finish_fetch(ticket, result))
                .unwrap_or(false)
        }
    }

    pub fn loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.loading))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error.clone()))
    }
}

/// Fetches from the HTTP service whenever the query changes
pub fn use_sales_data(query: Memo<SalesQuery>) -> SalesData {
    use_sales_data_with(query.into(), Rc::new(HttpSalesApi))
}

/// Fetches through `api` whenever the query changes.
///
/// Writing an equal query again issues nothing; use [`SalesData::refresh`]
/// to re-fetch unchanged inputs.
pub fn use_sales_data_with(query: Signal<SalesQuery>, api: Rc<dyn SalesApi>) -> SalesData {
    let data = SalesData::new(query, api);

    Effect::new(move |_| {
        query.track();
        if let Some(task) = data.fetch_if_changed() {
            spawn_local(async move {
                task.await;
            });
        }
    });

    data
}
