pub mod api;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod view;

pub use api::{HttpRamenApi, RamenApi};
pub use controller::{Catalog, Selection};
pub use error::CatalogError;
