pub mod app;
pub mod handlers;
pub mod layout;
pub mod navigation;
pub mod ui;
