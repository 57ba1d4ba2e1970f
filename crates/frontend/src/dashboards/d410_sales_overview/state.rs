//! Fetch coordination for the sales overview
//!
//! Each combined fetch gets a ticket with a monotonically increasing sequence
//! number. Only the ticket issued last may commit, so a slow response to an
//! older query can never overwrite the result of a newer one.

use contracts::dashboards::d410_sales_overview::{SalesTransaction, SummaryStats};

use super::api::SalesOverview;
use super::query::SalesQuery;
use crate::shared::api_error::ApiError;

pub const FETCH_ERROR_FALLBACK: &str = "Failed to fetch sales data";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesDataState {
    pub transactions: Vec<SalesTransaction>,
    pub summary: Option<SummaryStats>,
    pub loading: bool,
    pub error: Option<String>,
    pub total: u64,
    pub total_pages: u32,
    /// Page echoed by the server, not the one requested
    pub current_page: u32,
    last_issued: u64,
    /// Query of the ticket issued last
    issued_query: Option<SalesQuery>,
}

impl SalesDataState {
    /// Busy from the start: the first fetch is issued as soon as the dashboard mounts
    pub fn new(requested_page: u32) -> Self {
        Self {
            current_page: requested_page,
            loading: true,
            ..Default::default()
        }
    }

    /// Marks the state busy and hands out the ticket the result must present
    pub fn begin_fetch(&mut self, query: &SalesQuery) -> FetchTicket {
        self.last_issued += 1;
        self.issued_query = Some(query.clone());
        self.loading = true;
        self.error = None;
        FetchTicket(self.last_issued)
    }

    /// Like [`begin_fetch`](Self::begin_fetch), but only when `query` differs
    /// from the query issued last
    pub fn begin_fetch_if_changed(&mut self, query: &SalesQuery) -> Option<FetchTicket> {
        if self.issued_query.as_ref() == Some(query) {
            return None;
        }
        Some(self.begin_fetch(query))
    }

    /// Page the server settled on for the latest query, once it has answered
    pub fn served_page(&self) -> Option<u32> {
        (!self.loading && self.error.is_none()).then_some(self.current_page)
    }

    pub fn is_latest(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.last_issued
    }

    /// Commits the outcome of a combined fetch.
    ///
    /// Returns `false` when a newer fetch was issued in the meantime; the
    /// result is then discarded and `loading` stays with the newer fetch.
    pub fn finish_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<SalesOverview, ApiError>,
    ) -> bool {
        if !self.is_latest(ticket) {
            log::debug!(
                "Dropping stale sales response #{} (latest #{})",
                ticket.0,
                self.last_issued
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(SalesOverview { page, summary }) => {
                self.transactions = page.transactions;
                self.summary = Some(summary);
                self.total = page.total;
                self.total_pages = page.total_pages;
                self.current_page = page.page;
            }
            Err(err) => {
                self.error = Some(error_message(&err));
            }
        }
        true
    }
}

fn error_message(err: &ApiError) -> String {
    let no_detail = match err {
        ApiError::Network(detail) | ApiError::Decode(detail) => detail.trim().is_empty(),
        ApiError::Status { .. } => false,
    };
    if no_detail {
        FETCH_ERROR_FALLBACK.to_string()
    } else {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::super::api::fetch_overview;
    use super::super::api::testing::FakeSalesApi;
    use super::super::query::SalesQuery;
    use super::*;
    use contracts::dashboards::d410_sales_overview::PaginationParams;
    use futures::executor::block_on;

    fn run(state: &mut SalesDataState, api: &FakeSalesApi, query: &SalesQuery) -> bool {
        let ticket = state.begin_fetch(query);
        assert!(state.loading);
        let result = block_on(fetch_overview(api, query));
        state.finish_fetch(ticket, result)
    }

    #[test]
    fn test_new_state_is_busy_until_first_result() {
        let mut state = SalesDataState::new(3);
        assert!(state.loading);
        assert_eq!(state.current_page, 3);
        run(&mut state, &FakeSalesApi::ok(3, 4), &SalesQuery::default());
        assert!(!state.loading);
    }

    #[test]
    fn test_equal_query_is_not_issued_twice() {
        let mut state = SalesDataState::new(1);
        let query = SalesQuery::default();
        assert!(state.begin_fetch_if_changed(&query).is_some());
        assert!(state.begin_fetch_if_changed(&query.clone()).is_none());

        let mut next = query.clone();
        next.apply_page(2);
        assert!(state.begin_fetch_if_changed(&next).is_some());
        // An unconditional fetch is still issued for an equal query
        let forced = state.begin_fetch(&next);
        assert!(state.is_latest(forced));
    }

    #[test]
    fn test_success_replaces_everything() {
        let mut state = SalesDataState::new(1);
        let api = FakeSalesApi::ok(2, 4);
        assert!(run(&mut state, &api, &SalesQuery::default()));

        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.current_page, 2);
        assert_eq!(state.total_pages, 4);
        assert_eq!(state.total, 40);
        assert_eq!(state.summary.as_ref().map(|s| s.total_transactions), Some(17));
    }

    #[test]
    fn test_server_page_wins_over_requested_page() {
        let mut state = SalesDataState::new(5);
        let query = SalesQuery {
            pagination: PaginationParams { page: 5, page_size: 10 },
            ..Default::default()
        };
        assert_eq!(state.served_page(), None);
        run(&mut state, &FakeSalesApi::ok(1, 1), &query);
        assert_eq!(state.current_page, 1);
        assert_eq!(state.served_page(), Some(1));
    }

    #[test]
    fn test_failed_fetch_has_no_served_page() {
        let mut state = SalesDataState::new(1);
        run(&mut state, &FakeSalesApi::ok(2, 3), &SalesQuery::default());
        let mut api = FakeSalesApi::ok(1, 1);
        api.transactions = Err(ApiError::Network("timeout".into()));
        run(&mut state, &api, &SalesQuery::default());
        assert_eq!(state.served_page(), None);
    }

    #[test]
    fn test_failed_list_discards_summary_and_keeps_prior_data() {
        let mut state = SalesDataState::new(1);
        run(&mut state, &FakeSalesApi::ok(1, 3), &SalesQuery::default());
        let before = state.summary.clone();

        let mut api = FakeSalesApi::ok(2, 9);
        api.transactions = Err(ApiError::Network("connection refused".into()));
        api.summary = Ok(Default::default());
        run(&mut state, &api, &SalesQuery::default());

        assert!(!state.loading);
        assert_eq!(
            state.error.as_deref(),
            Some("Network error: connection refused")
        );
        assert_eq!(state.summary, before);
        assert_eq!(state.total_pages, 3);
    }

    #[test]
    fn test_next_fetch_clears_error() {
        let mut state = SalesDataState::new(1);
        let mut api = FakeSalesApi::ok(1, 1);
        api.summary = Err(ApiError::Decode("missing field `totalAmount`".into()));
        run(&mut state, &api, &SalesQuery::default());
        assert!(state.error.is_some());

        run(&mut state, &FakeSalesApi::ok(1, 1), &SalesQuery::default());
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state = SalesDataState::new(1);
        let old = state.begin_fetch(&SalesQuery::default());
        let new = state.begin_fetch(&SalesQuery::default());

        let newer = block_on(fetch_overview(&FakeSalesApi::ok(2, 6), &SalesQuery::default()));
        assert!(state.finish_fetch(new, newer));

        let older = block_on(fetch_overview(&FakeSalesApi::ok(1, 2), &SalesQuery::default()));
        assert!(!state.finish_fetch(old, older));
        assert_eq!(state.current_page, 2);
        assert_eq!(state.total_pages, 6);
    }

    #[test]
    fn test_stale_completion_does_not_clear_busy_flag() {
        let mut state = SalesDataState::new(1);
        let old = state.begin_fetch(&SalesQuery::default());
        let _new = state.begin_fetch(&SalesQuery::default());
        state.finish_fetch(old, Err(ApiError::Network("timeout".into())));
        assert!(state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_fallback_message() {
        assert_eq!(
            error_message(&ApiError::Network(String::new())),
            "Failed to fetch sales data"
        );
        assert_eq!(
            error_message(&ApiError::Status {
                status: 404,
                status_text: "Not Found".into()
            }),
            "Service error: HTTP 404 Not Found"
        );
    }
}
