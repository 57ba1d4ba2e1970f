pub mod dashboard;
pub mod filters;
pub mod sort_select;
pub mod summary_cards;
pub mod table;

pub use dashboard::SalesOverviewDashboard;
