pub mod app_shell;
pub mod lazy_list;
pub mod theme;
pub mod view;
