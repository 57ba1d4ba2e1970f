pub mod api_error;
pub mod api_utils;
pub mod clipboard;
pub mod components;
pub mod date_utils;
pub mod debounce;
pub mod icons;
pub mod number_format;
