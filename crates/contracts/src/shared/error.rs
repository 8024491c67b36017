use crate::domain::a001_user::aggregate::UserId;
use crate::domain::a002_category::aggregate::CategoryId;
use crate::domain::a003_product::aggregate::ProductId;
use thiserror::Error;

/// Ошибки загрузки и связывания справочников каталога
///
/// Все варианты означают битые seed-данные: восстановления нет,
/// приложение должно упасть при старте.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("seed data `{dataset}` is malformed: {source}")]
    Seed {
        dataset: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("product {product_id} references unknown category {category_id}")]
    UnknownCategory {
        product_id: ProductId,
        category_id: CategoryId,
    },

    #[error("category {category_id} references unknown owner {owner_id}")]
    UnknownOwner {
        category_id: CategoryId,
        owner_id: UserId,
    },
}
