pub mod dto;
pub mod filters;

pub use dto::{FilterOptionCatalog, SalesResponse, SalesTransaction, SummaryStats};
pub use filters::{
    AgeRange, AgeRangePreset, DateRange, FilterDimension, FilterOptions, PaginationParams,
    SortDirection, SortField, SortOption, SortPreset, AGE_RANGE_PRESETS, PAGE_SIZE, SORT_PRESETS,
};
