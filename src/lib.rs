pub mod app;
pub mod cache;
pub mod catalog;
pub mod infra;
pub mod ui;
