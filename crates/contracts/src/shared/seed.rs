//! Встроенные seed-данные каталога
//!
//! JSON-файлы вкомпилированы в бинарник и разбираются при первом обращении.

use crate::domain::a001_user::aggregate::User;
use crate::domain::a002_category::aggregate::Category;
use crate::domain::a003_product::aggregate::Product;
use crate::projections::p001_product_catalog::Catalog;
use crate::shared::error::CatalogError;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;

const USERS_JSON: &str = include_str!("../../data/users.json");
const CATEGORIES_JSON: &str = include_str!("../../data/categories.json");
const PRODUCTS_JSON: &str = include_str!("../../data/products.json");

static CATALOG: Lazy<Result<Catalog, CatalogError>> = Lazy::new(load_catalog);

fn parse<T: DeserializeOwned>(dataset: &'static str, json: &str) -> Result<Vec<T>, CatalogError> {
    serde_json::from_str(json).map_err(|source| CatalogError::Seed { dataset, source })
}

pub fn load_users() -> Result<Vec<User>, CatalogError> {
    parse("users", USERS_JSON)
}

pub fn load_categories() -> Result<Vec<Category>, CatalogError> {
    parse("categories", CATEGORIES_JSON)
}

pub fn load_products() -> Result<Vec<Product>, CatalogError> {
    parse("products", PRODUCTS_JSON)
}

/// Разобрать и связать все три набора данных
pub fn load_catalog() -> Result<Catalog, CatalogError> {
    Catalog::build(load_users()?, load_categories()?, load_products()?)
}

/// Каталог на всё время жизни приложения
pub fn catalog() -> Result<&'static Catalog, &'static CatalogError> {
    Lazy::force(&CATALOG).as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projections::p001_product_catalog::{filter_products, FilterState};

    #[test]
    fn test_bundled_seed_joins_cleanly() {
        let catalog = catalog().expect("bundled seed data must be valid");
        assert_eq!(catalog.users.len(), load_users().unwrap().len());
        assert_eq!(catalog.categories.len(), load_categories().unwrap().len());
        assert_eq!(catalog.products.len(), load_products().unwrap().len());
        assert!(!catalog.products.is_empty());
    }

    #[test]
    fn test_bundled_seed_without_filters_shows_everything() {
        let catalog = catalog().unwrap();
        let visible = filter_products(&catalog.products, &FilterState::default());
        assert_eq!(visible, catalog.products);
    }

    #[test]
    fn test_malformed_json_names_dataset() {
        let err = parse::<User>("users", "[{\"id\": 1}]").unwrap_err();
        assert!(err.to_string().starts_with("seed data `users` is malformed"));
    }
}
