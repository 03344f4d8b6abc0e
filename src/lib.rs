pub mod api;
pub mod chart;
pub mod core;
pub mod error;
pub mod i18n;
pub mod logger;
pub mod widget;
