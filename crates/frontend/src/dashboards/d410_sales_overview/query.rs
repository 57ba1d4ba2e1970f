//! Query-string builder for the sales API
//!
//! `SalesQuery` is the one value the dashboard derives from its inputs. It is
//! serialized two ways: the full list query and the summary query, which drops
//! pagination and sort because the server aggregates over the whole filtered set.

use contracts::dashboards::d410_sales_overview::{
    AgeRange, DateRange, FilterDimension, FilterOptions, PaginationParams, SortDirection,
    SortField, SortOption,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesQuery {
    pub search: String,
    pub filters: FilterOptions,
    pub sort: SortOption,
    pub pagination: PaginationParams,
}

/// Search text as it is keyed and sent: surrounding whitespace is not part of it
pub fn normalize_search(text: &str) -> String {
    text.trim().to_string()
}

impl SalesQuery {
    /// Each `apply_*` returns whether the query changed. Changing what is
    /// searched, filtered or sorted starts over at page 1; an equal value
    /// leaves the query, page included, untouched.
    pub fn apply_search(&mut self, text: &str) -> bool {
        let text = normalize_search(text);
        if self.search == text {
            return false;
        }
        self.search = text;
        self.pagination = self.pagination.first_page();
        true
    }

    pub fn apply_filters(&mut self, filters: FilterOptions) -> bool {
        if self.filters == filters {
            return false;
        }
        self.filters = filters;
        self.pagination = self.pagination.first_page();
        true
    }

    pub fn apply_sort(&mut self, sort: SortOption) -> bool {
        if self.sort == sort {
            return false;
        }
        self.sort = sort;
        self.pagination = self.pagination.first_page();
        true
    }

    pub fn apply_page(&mut self, page: u32) -> bool {
        if page == 0 || self.pagination.page == page {
            return false;
        }
        self.pagination.page = page;
        true
    }

    pub fn apply_page_size(&mut self, page_size: u32) -> bool {
        let next = PaginationParams { page: 1, page_size };
        if page_size == 0 || self.pagination == next {
            return false;
        }
        self.pagination = next;
        true
    }
}

/// Ordered key/value pairs; repeated keys are allowed
#[derive(Debug, Default)]
struct QueryPairs(Vec<(&'static str, String)>);

impl QueryPairs {
    fn push(&mut self, key: &'static str, value: impl Into<String>) {
        self.0.push((key, value.into()));
    }

    fn encode(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn push_search(pairs: &mut QueryPairs, search: &str) {
    let search = search.trim();
    if !search.is_empty() {
        pairs.push("search", search);
    }
}

fn push_list(pairs: &mut QueryPairs, filters: &FilterOptions, dim: FilterDimension) {
    for value in filters.values(dim) {
        pairs.push(dim.query_key(), value.as_str());
    }
}

fn push_filters(pairs: &mut QueryPairs, filters: &FilterOptions) {
    push_list(pairs, filters, FilterDimension::CustomerRegion);
    push_list(pairs, filters, FilterDimension::Gender);
    // Zero is a legitimate bound, so the pair is emitted whenever the range exists
    if let Some(AgeRange { min, max }) = filters.age_range {
        pairs.push("ageMin", min.to_string());
        pairs.push("ageMax", max.to_string());
    }
    push_list(pairs, filters, FilterDimension::ProductCategory);
    push_list(pairs, filters, FilterDimension::Tags);
    push_list(pairs, filters, FilterDimension::PaymentMethod);
    if let Some(range) = &filters.date_range {
        pairs.push("dateStart", range.start.as_str());
        pairs.push("dateEnd", range.end.as_str());
    }
}

/// Query string for `GET /api/sales`
pub fn list_query_string(query: &SalesQuery) -> String {
    let mut pairs = QueryPairs::default();
    push_search(&mut pairs, &query.search);
    if query.pagination.page > 0 {
        pairs.push("page", query.pagination.page.to_string());
    }
    if query.pagination.page_size > 0 {
        pairs.push("pageSize", query.pagination.page_size.to_string());
    }
    pairs.push("sortField", query.sort.field.as_str());
    pairs.push("sortDirection", query.sort.direction.as_str());
    push_filters(&mut pairs, &query.filters);
    pairs.encode()
}

/// Query string for `GET /api/sales/summary`: same predicate, no page or sort
pub fn summary_query_string(query: &SalesQuery) -> String {
    let mut pairs = QueryPairs::default();
    push_search(&mut pairs, &query.search);
    push_filters(&mut pairs, &query.filters);
    pairs.encode()
}

/// Inverse of [`list_query_string`], used to restore the dashboard from a deep link.
///
/// Unknown keys are ignored. Half of an age or date pair is dropped, and values
/// that fail to parse fall back to the defaults.
pub fn parse_query_string(raw: &str) -> SalesQuery {
    let mut query = SalesQuery::default();
    let mut age_min = None;
    let mut age_max = None;
    let mut date_start = None;
    let mut date_end = None;

    for (key, value) in split_pairs(raw) {
        match key.as_str() {
            "search" => query.search = normalize_search(&value),
            "page" => {
                if let Some(page) = value.parse::<u32>().ok().filter(|p| *p > 0) {
                    query.pagination.page = page;
                }
            }
            "pageSize" => {
                if let Some(size) = value.parse::<u32>().ok().filter(|s| *s > 0) {
                    query.pagination.page_size = size;
                }
            }
            "sortField" => {
                if let Some(field) = SortField::parse(&value) {
                    query.sort.field = field;
                }
            }
            "sortDirection" => {
                if let Some(direction) = SortDirection::parse(&value) {
                    query.sort.direction = direction;
                }
            }
            "ageMin" => age_min = value.parse::<u32>().ok(),
            "ageMax" => age_max = value.parse::<u32>().ok(),
            "dateStart" => date_start = Some(value),
            "dateEnd" => date_end = Some(value),
            other => {
                if let Some(dim) = FilterDimension::from_query_key(other) {
                    if !value.is_empty() && !query.filters.is_selected(dim, &value) {
                        query.filters.toggle(dim, &value);
                    }
                }
            }
        }
    }

    if let (Some(min), Some(max)) = (age_min, age_max) {
        query.filters.age_range = Some(AgeRange { min, max });
    }
    if let (Some(start), Some(end)) = (date_start, date_end) {
        query.filters.date_range = DateRange::new(&start, &end);
    }
    query
}

fn split_pairs(raw: &str) -> impl Iterator<Item = (String, String)> + '_ {
    raw.trim_start_matches('?')
        .split('&')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let (key, value) = part.split_once('=').unwrap_or((part, ""));
            (decode_component(key), decode_component(value))
        })
}

fn decode_component(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    urlencoding::decode(&raw)
        .map(|s| s.into_owned())
        .unwrap_or(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(qs: &str) -> Vec<String> {
        split_pairs(qs).map(|(k, _)| k).collect()
    }

    fn sample_query() -> SalesQuery {
        let mut filters = FilterOptions::default();
        filters.toggle(FilterDimension::Gender, "Male");
        filters.toggle(FilterDimension::Gender, "Female");
        filters.set_age_range(Some(AgeRange { min: 26, max: 35 }));
        SalesQuery {
            search: String::new(),
            filters,
            sort: SortOption {
                field: SortField::Date,
                direction: SortDirection::Desc,
            },
            pagination: PaginationParams {
                page: 2,
                page_size: 10,
            },
        }
    }

    #[test]
    fn test_list_query_scenario() {
        let qs = list_query_string(&sample_query());
        assert_eq!(
            qs,
            "page=2&pageSize=10&sortField=date&sortDirection=desc&gender=Male&gender=Female&ageMin=26&ageMax=35"
        );
    }

    #[test]
    fn test_summary_omits_page_and_sort() {
        let mut query = sample_query();
        query.search = "neha".into();
        let qs = summary_query_string(&query);
        assert_eq!(qs, "search=neha&gender=Male&gender=Female&ageMin=26&ageMax=35");
        for key in ["page", "pageSize", "sortField", "sortDirection"] {
            assert!(!keys(&qs).iter().any(|k| k == key), "{} leaked into {}", key, qs);
        }
    }

    #[test]
    fn test_empty_selection_is_omitted() {
        let mut query = SalesQuery::default();
        query.filters.tags = Some(vec![]);
        query.filters.toggle(FilterDimension::CustomerRegion, "North");
        query.filters.toggle(FilterDimension::CustomerRegion, "North");
        let qs = list_query_string(&query);
        assert!(!qs.contains("tags"));
        assert!(!qs.contains("customerRegion"));
        assert_eq!(summary_query_string(&query), "");
    }

    #[test]
    fn test_blank_search_is_omitted() {
        let query = SalesQuery {
            search: "   ".into(),
            ..Default::default()
        };
        assert!(!list_query_string(&query).contains("search"));
    }

    #[test]
    fn test_zero_age_bound_is_emitted() {
        let mut query = SalesQuery::default();
        query.filters.set_age_range(Some(AgeRange { min: 0, max: 17 }));
        let qs = summary_query_string(&query);
        assert_eq!(qs, "ageMin=0&ageMax=17");
    }

    #[test]
    fn test_ranges_are_emitted_as_pairs() {
        let mut query = sample_query();
        query.filters.set_date_range("2023-01-01", "2023-03-31");
        let qs = list_query_string(&query);
        let keys = keys(&qs);
        let count = |k: &str| keys.iter().filter(|x| *x == k).count();
        assert_eq!(count("ageMin"), count("ageMax"));
        assert_eq!(count("dateStart"), 1);
        assert_eq!(count("dateEnd"), 1);
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let mut query = SalesQuery::default();
        query.search = "Ravi & Sons".into();
        query.filters.toggle(FilterDimension::PaymentMethod, "Credit Card");
        let qs = summary_query_string(&query);
        assert_eq!(qs, "search=Ravi%20%26%20Sons&paymentMethod=Credit%20Card");
    }

    #[test]
    fn test_parse_recovers_query() {
        let mut query = sample_query();
        query.search = "Ravi & Sons".into();
        query.filters.toggle(FilterDimension::Tags, "eco");
        query.filters.toggle(FilterDimension::ProductCategory, "Home Décor");
        query.filters.set_date_range("2023-01-01", "2023-03-31");
        query.sort = SortOption {
            field: SortField::CustomerName,
            direction: SortDirection::Asc,
        };

        let parsed = parse_query_string(&list_query_string(&query));
        assert_eq!(parsed, query);
    }

    #[test]
    fn test_parse_drops_half_pairs_and_bad_numbers() {
        let parsed = parse_query_string("?ageMin=20&dateEnd=2023-01-01&page=abc&sortField=price&foo=bar");
        assert_eq!(parsed.filters.age_range, None);
        assert_eq!(parsed.filters.date_range, None);
        assert_eq!(parsed.pagination, PaginationParams::default());
        assert_eq!(parsed.sort, SortOption::default());
    }

    fn on_page_four() -> SalesQuery {
        SalesQuery {
            pagination: PaginationParams { page: 4, page_size: 20 },
            ..sample_query()
        }
    }

    #[test]
    fn test_surrounding_whitespace_is_not_part_of_the_key() {
        let mut typed = SalesQuery::default();
        typed.apply_search("neha ");
        let mut settled = SalesQuery::default();
        settled.apply_search("neha");
        assert_eq!(typed, settled);
        assert!(!settled.apply_search("  neha"));
    }

    #[test]
    fn test_parse_recovers_search_typed_with_whitespace() {
        let mut query = sample_query();
        query.apply_search(" Neha Shah  ");
        let parsed = parse_query_string(&list_query_string(&query));
        assert_eq!(parsed, query);
        assert_eq!(parse_query_string("search=%20neha%20").search, "neha");
    }

    #[test]
    fn test_unchanged_inputs_keep_page() {
        let mut query = on_page_four();
        let filters = query.filters.clone();
        let sort = query.sort;
        assert!(!query.apply_filters(filters));
        assert!(!query.apply_sort(sort));
        assert!(!query.apply_search(""));
        assert_eq!(query, on_page_four());
    }

    #[test]
    fn test_half_filled_date_range_keeps_page() {
        let mut query = on_page_four();
        let mut next = query.filters.clone();
        next.set_date_range("2023-01-01", "");
        assert!(!query.apply_filters(next));
        assert_eq!(query.pagination.page, 4);
    }

    #[test]
    fn test_changed_inputs_reset_to_first_page() {
        let mut query = on_page_four();
        assert!(query.apply_search("ab"));
        assert_eq!(query.pagination, PaginationParams { page: 1, page_size: 20 });

        query.pagination.page = 3;
        let mut next = query.filters.clone();
        next.toggle(FilterDimension::Tags, "eco");
        assert!(query.apply_filters(next));
        assert_eq!(query.pagination.page, 1);

        query.pagination.page = 3;
        assert!(query.apply_sort(SortOption {
            field: SortField::Quantity,
            direction: SortDirection::Asc,
        }));
        assert_eq!(query.pagination.page, 1);
    }

    #[test]
    fn test_paging_keeps_inputs() {
        let mut query = on_page_four();
        assert!(query.apply_page(5));
        assert!(!query.apply_page(5));
        assert!(!query.apply_page(0));
        assert_eq!(query.filters, sample_query().filters);

        assert!(query.apply_page_size(50));
        assert_eq!(query.pagination, PaginationParams { page: 1, page_size: 50 });
        assert!(!query.apply_page_size(50));
    }

    #[test]
    fn test_parse_plus_as_space() {
        let parsed = parse_query_string("search=Neha+Shah&gender=Female");
        assert_eq!(parsed.search, "Neha Shah");
        assert_eq!(parsed.filters.gender, Some(vec!["Female".to_string()]));
    }
}
