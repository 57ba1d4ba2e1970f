pub mod date_range_input;
pub mod filter_panel;
pub mod multi_select;
pub mod pagination_controls;
pub mod search_input;
pub mod stat_card;
