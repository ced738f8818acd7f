pub mod models;
pub mod selection;
