use async_trait::async_trait;
use contracts::dashboards::d410_sales_overview::{FilterOptionCatalog, SalesResponse, SummaryStats};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use super::query::{list_query_string, summary_query_string, SalesQuery};
use crate::shared::api_error::ApiError;
use crate::shared::api_utils::api_url;

const SALES_PATH: &str = "/api/sales";
const SUMMARY_PATH: &str = "/api/sales/summary";
const FILTER_OPTIONS_PATH: &str = "/api/filters/options";

/// Read operations of the sales service. No caching, no retries.
#[async_trait(?Send)]
pub trait SalesApi {
    async fn fetch_transactions(&self, query: &SalesQuery) -> Result<SalesResponse, ApiError>;

    /// Uses only the search/filter part of `query`
    async fn fetch_summary(&self, query: &SalesQuery) -> Result<SummaryStats, ApiError>;

    async fn fetch_filter_options(&self) -> Result<FilterOptionCatalog, ApiError>;
}

/// `gloo-net` client against the configured API origin
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpSalesApi;

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    log::debug!("GET {}", url);
    let response = Request::get(url).send().await?;

    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl SalesApi for HttpSalesApi {
    async fn fetch_transactions(&self, query: &SalesQuery) -> Result<SalesResponse, ApiError> {
        get_json(&api_url(SALES_PATH, &list_query_string(query))).await
    }

    async fn fetch_summary(&self, query: &SalesQuery) -> Result<SummaryStats, ApiError> {
        get_json(&api_url(SUMMARY_PATH, &summary_query_string(query))).await
    }

    async fn fetch_filter_options(&self) -> Result<FilterOptionCatalog, ApiError> {
        get_json(&api_url(FILTER_OPTIONS_PATH, "")).await
    }
}

/// List page and summary for one query, fetched together
#[derive(Debug, Clone, PartialEq)]
pub struct SalesOverview {
    pub page: SalesResponse,
    pub summary: SummaryStats,
}

/// Issues the list and summary requests concurrently and waits for both.
/// Either failure fails the whole operation.
pub async fn fetch_overview<A>(api: &A, query: &SalesQuery) -> Result<SalesOverview, ApiError>
where
    A: SalesApi + ?Sized,
{
    let (page, summary) =
        futures::try_join!(api.fetch_transactions(query), api.fetch_summary(query))?;
    Ok(SalesOverview { page, summary })
}


#[cfg(test)]
mod tests {
    use super::testing::FakeSalesApi;
    use super::*;
    use contracts::dashboards::d410_sales_overview::{FilterDimension, PaginationParams};
    use futures::executor::block_on;

    #[test]
    fn test_overview_issues_both_requests() {
        let api = FakeSalesApi::ok(3, 5);
        let mut query = SalesQuery::default();
        query.filters.toggle(FilterDimension::Gender, "Male");
        query.pagination = PaginationParams { page: 3, page_size: 10 };

        let overview = block_on(fetch_overview(&api, &query)).unwrap();
        assert_eq!(overview.page.page, 3);
        assert_eq!(overview.summary.total_units_sold, 42);

        let calls = api.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert!(calls.contains(&"/api/sales?page=3&pageSize=10&sortField=date&sortDirection=desc&gender=Male".to_string()));
        assert!(calls.contains(&"/api/sales/summary?gender=Male".to_string()));
    }

    #[test]
    fn test_overview_fails_when_list_fails() {
        let mut api = FakeSalesApi::ok(1, 1);
        api.transactions = Err(ApiError::Status {
            status: 500,
            status_text: "Internal Server Error".into(),
        });
        let err = block_on(fetch_overview(&api, &SalesQuery::default())).unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
    }

    #[test]
    fn test_overview_fails_when_summary_fails() {
        let mut api = FakeSalesApi::ok(1, 1);
        api.summary = Err(ApiError::Network("connection refused".into()));
        let err = block_on(fetch_overview(&api, &SalesQuery::default())).unwrap_err();
        assert!(err.is_network());
    }
}
