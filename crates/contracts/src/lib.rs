//! Данные каталога товаров: справочники, seed-данные, связывание и фильтрация.
//!
//! Крейт не зависит от WASM и тестируется нативно.

pub mod domain;
pub mod enums;
pub mod projections;
pub mod shared;

pub use projections::p001_product_catalog::{filter_products, Catalog, EnrichedProduct, FilterState};
pub use shared::error::CatalogError;
