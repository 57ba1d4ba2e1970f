//! D410 Sales Overview: browse, search, filter, sort and page sales transactions

pub mod api;
pub mod hook;
pub mod query;
pub mod state;
pub mod ui;
pub mod url_state;
