pub mod d410_sales_overview;

pub use d410_sales_overview::ui::SalesOverviewDashboard;
