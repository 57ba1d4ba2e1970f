use serde::{Deserialize, Serialize};

/// One sales record as returned by `GET /api/sales`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesTransaction {
    pub transaction_id: String,
    /// ISO date "YYYY-MM-DD"
    pub date: String,

    // Customer
    pub customer_id: String,
    pub customer_name: String,
    pub phone_number: String,
    pub gender: String,
    pub age: u32,
    pub customer_region: String,
    pub customer_type: String,

    // Product
    pub product_id: String,
    pub product_name: String,
    pub brand: String,
    pub product_category: String,
    #[serde(default)]
    pub tags: Vec<String>,

    // Sums
    pub quantity: i64,
    pub price_per_unit: f64,
    pub discount_percentage: f64,
    pub total_amount: f64,
    pub final_amount: f64,

    // Logistics
    pub payment_method: String,
    pub order_status: String,
    pub delivery_type: String,
    pub store_id: String,
    pub store_location: String,
    pub salesperson_id: String,
    pub employee_name: String,
}

/// Paged list response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesResponse {
    pub transactions: Vec<SalesTransaction>,
    pub total: u64,
    /// Page the server actually served (1-based)
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

/// Aggregates over the whole filtered set, computed server-side
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_units_sold: i64,
    pub total_amount: f64,
    pub total_discount: f64,
    pub total_transactions: u64,
}

/// Distinct values per filter dimension (`GET /api/filters/options`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptionCatalog {
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(default)]
    pub genders: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub payment_methods: Vec<String>,
}
