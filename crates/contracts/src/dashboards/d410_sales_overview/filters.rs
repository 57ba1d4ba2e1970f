//! Filter, sort and pagination state for the sales overview (D410)
//!
//! These are the inputs from which the dashboard derives its query. An
//! array-valued filter is either `None` or non-empty; every mutator here keeps
//! that invariant so an emptied selection means "no constraint".

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default number of rows per page
pub const PAGE_SIZE: u32 = 10;

/// Inclusive age bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: u32,
    pub max: u32,
}

/// Inclusive date bounds, ISO "YYYY-MM-DD"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl DateRange {
    /// Builds a range only when both bounds are valid ISO dates
    pub fn new(start: &str, end: &str) -> Option<Self> {
        let start = start.trim();
        let end = end.trim();
        NaiveDate::parse_from_str(start, "%Y-%m-%d").ok()?;
        NaiveDate::parse_from_str(end, "%Y-%m-%d").ok()?;
        Some(Self {
            start: start.to_string(),
            end: end.to_string(),
        })
    }
}

/// Multi-select filter dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterDimension {
    CustomerRegion,
    Gender,
    ProductCategory,
    Tags,
    PaymentMethod,
}

impl FilterDimension {
    pub const ALL: [FilterDimension; 5] = [
        FilterDimension::CustomerRegion,
        FilterDimension::Gender,
        FilterDimension::ProductCategory,
        FilterDimension::Tags,
        FilterDimension::PaymentMethod,
    ];

    /// Query-string key understood by the sales API
    pub fn query_key(&self) -> &'static str {
        match self {
            FilterDimension::CustomerRegion => "customerRegion",
            FilterDimension::Gender => "gender",
            FilterDimension::ProductCategory => "productCategory",
            FilterDimension::Tags => "tags",
            FilterDimension::PaymentMethod => "paymentMethod",
        }
    }

    pub fn from_query_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.query_key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterDimension::CustomerRegion => "Customer Region",
            FilterDimension::Gender => "Gender",
            FilterDimension::ProductCategory => "Product Category",
            FilterDimension::Tags => "Tags",
            FilterDimension::PaymentMethod => "Payment Method",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_region: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_range: Option<AgeRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_category: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
}

impl FilterOptions {
    pub fn values(&self, dim: FilterDimension) -> &[String] {
        self.slot(dim).as_deref().unwrap_or(&[])
    }

    pub fn is_selected(&self, dim: FilterDimension, value: &str) -> bool {
        self.values(dim).iter().any(|v| v == value)
    }

    /// Adds `value` when it is not selected, removes it otherwise.
    /// Selection order is preserved; removing the last value resets the dimension to `None`.
    pub fn toggle(&mut self, dim: FilterDimension, value: &str) {
        let slot = self.slot_mut(dim);
        let mut values = slot.take().unwrap_or_default();
        match values.iter().position(|v| v == value) {
            Some(idx) => {
                values.remove(idx);
            }
            None => values.push(value.to_string()),
        }
        *slot = if values.is_empty() { None } else { Some(values) };
    }

    /// Selecting the currently active range again clears it
    pub fn set_age_range(&mut self, range: Option<AgeRange>) {
        self.age_range = match range {
            Some(r) if self.age_range == Some(r) => None,
            other => other,
        };
    }

    /// Both bounds must be valid dates, otherwise the date filter is cleared
    pub fn set_date_range(&mut self, start: &str, end: &str) {
        self.date_range = DateRange::new(start, end);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Number of constrained dimensions (for the filter badge)
    pub fn active_count(&self) -> usize {
        let lists = FilterDimension::ALL
            .iter()
            .filter(|d| !self.values(**d).is_empty())
            .count();
        lists + self.age_range.is_some() as usize + self.date_range.is_some() as usize
    }

    fn slot(&self, dim: FilterDimension) -> &Option<Vec<String>> {
        match dim {
            FilterDimension::CustomerRegion => &self.customer_region,
            FilterDimension::Gender => &self.gender,
            FilterDimension::ProductCategory => &self.product_category,
            FilterDimension::Tags => &self.tags,
            FilterDimension::PaymentMethod => &self.payment_method,
        }
    }

    fn slot_mut(&mut self, dim: FilterDimension) -> &mut Option<Vec<String>> {
        match dim {
            FilterDimension::CustomerRegion => &mut self.customer_region,
            FilterDimension::Gender => &mut self.gender,
            FilterDimension::ProductCategory => &mut self.product_category,
            FilterDimension::Tags => &mut self.tags,
            FilterDimension::PaymentMethod => &mut self.payment_method,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Date,
    Quantity,
    CustomerName,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Date => "date",
            SortField::Quantity => "quantity",
            SortField::CustomerName => "customerName",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "date" => Some(SortField::Date),
            "quantity" => Some(SortField::Quantity),
            "customerName" => Some(SortField::CustomerName),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortOption {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortOption {
    fn default() -> Self {
        Self {
            field: SortField::Date,
            direction: SortDirection::Desc,
        }
    }
}

impl SortOption {
    /// Stable key for `<select>` values, e.g. "date-desc"
    pub fn key(&self) -> String {
        format!("{}-{}", self.field.as_str(), self.direction.as_str())
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let (field, direction) = key.rsplit_once('-')?;
        Some(Self {
            field: SortField::parse(field)?,
            direction: SortDirection::parse(direction)?,
        })
    }
}

/// 1-based page index plus page size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: PAGE_SIZE,
        }
    }
}

impl PaginationParams {
    pub fn first_page(self) -> Self {
        Self { page: 1, ..self }
    }
}

pub struct SortPreset {
    pub label: &'static str,
    pub option: SortOption,
}

pub const SORT_PRESETS: [SortPreset; 6] = [
    SortPreset {
        label: "Date (Newest First)",
        option: SortOption { field: SortField::Date, direction: SortDirection::Desc },
    },
    SortPreset {
        label: "Date (Oldest First)",
        option: SortOption { field: SortField::Date, direction: SortDirection::Asc },
    },
    SortPreset {
        label: "Quantity (High to Low)",
        option: SortOption { field: SortField::Quantity, direction: SortDirection::Desc },
    },
    SortPreset {
        label: "Quantity (Low to High)",
        option: SortOption { field: SortField::Quantity, direction: SortDirection::Asc },
    },
    SortPreset {
        label: "Customer Name (A-Z)",
        option: SortOption { field: SortField::CustomerName, direction: SortDirection::Asc },
    },
    SortPreset {
        label: "Customer Name (Z-A)",
        option: SortOption { field: SortField::CustomerName, direction: SortDirection::Desc },
    },
];

pub struct AgeRangePreset {
    pub label: &'static str,
    pub range: AgeRange,
}

pub const AGE_RANGE_PRESETS: [AgeRangePreset; 5] = [
    AgeRangePreset { label: "18-25", range: AgeRange { min: 18, max: 25 } },
    AgeRangePreset { label: "26-35", range: AgeRange { min: 26, max: 35 } },
    AgeRangePreset { label: "36-45", range: AgeRange { min: 36, max: 45 } },
    AgeRangePreset { label: "46-55", range: AgeRange { min: 46, max: 55 } },
    AgeRangePreset { label: "56+", range: AgeRange { min: 56, max: 150 } },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_keeps_insertion_order() {
        let mut filters = FilterOptions::default();
        filters.toggle(FilterDimension::Gender, "Male");
        filters.toggle(FilterDimension::Gender, "Female");
        filters.toggle(FilterDimension::Gender, "Female");
        assert_eq!(filters.gender, Some(vec!["Male".to_string()]));
    }

    #[test]
    fn test_toggle_last_value_resets_to_none() {
        let mut filters = FilterOptions::default();
        filters.toggle(FilterDimension::Tags, "eco");
        filters.toggle(FilterDimension::Tags, "eco");
        assert_eq!(filters.tags, None);
        assert!(filters.is_empty());
    }

    #[test]
    fn test_age_range_reselect_clears() {
        let mut filters = FilterOptions::default();
        let range = AgeRange { min: 26, max: 35 };
        filters.set_age_range(Some(range));
        assert_eq!(filters.age_range, Some(range));
        filters.set_age_range(Some(range));
        assert_eq!(filters.age_range, None);
    }

    #[test]
    fn test_date_range_requires_both_bounds() {
        let mut filters = FilterOptions::default();
        filters.set_date_range("2023-01-01", "");
        assert_eq!(filters.date_range, None);
        filters.set_date_range("2023-01-01", "2023-02-28");
        assert_eq!(
            filters.date_range,
            Some(DateRange {
                start: "2023-01-01".into(),
                end: "2023-02-28".into()
            })
        );
        filters.set_date_range("2023-13-01", "2023-02-28");
        assert_eq!(filters.date_range, None);
    }

    #[test]
    fn test_active_count() {
        let mut filters = FilterOptions::default();
        filters.toggle(FilterDimension::CustomerRegion, "North");
        filters.toggle(FilterDimension::CustomerRegion, "East");
        filters.set_age_range(Some(AgeRange { min: 18, max: 25 }));
        assert_eq!(filters.active_count(), 2);
        filters.clear();
        assert_eq!(filters.active_count(), 0);
    }

    #[test]
    fn test_sort_key_roundtrip() {
        for preset in SORT_PRESETS.iter() {
            assert_eq!(SortOption::from_key(&preset.option.key()), Some(preset.option));
        }
        assert_eq!(SortOption::from_key("customerName-asc").map(|s| s.field), Some(SortField::CustomerName));
        assert_eq!(SortOption::from_key("price-asc"), None);
    }

    #[test]
    fn test_filters_skip_absent_fields() {
        let mut filters = FilterOptions::default();
        filters.toggle(FilterDimension::Gender, "Male");
        let json = serde_json::to_string(&filters).unwrap();
        assert_eq!(json, r#"{"gender":["Male"]}"#);
    }
}
