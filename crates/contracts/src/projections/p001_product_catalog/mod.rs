//! Каталог товаров: товары, связанные с категорией и её владельцем,
//! и фильтрация этого списка.

pub mod dto;
pub mod filter;

pub use dto::{Catalog, EnrichedProduct};
pub use filter::{filter_products, FilterState};
