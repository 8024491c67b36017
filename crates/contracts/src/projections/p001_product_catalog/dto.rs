use crate::domain::a001_user::aggregate::{User, UserId};
use crate::domain::a002_category::aggregate::{Category, CategoryId};
use crate::domain::a003_product::aggregate::{Product, ProductId};
use crate::shared::error::CatalogError;
use std::collections::HashMap;

/// Товар вместе с его категорией и владельцем категории
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedProduct {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub user: User,
}

impl EnrichedProduct {
    /// Текст ячейки категории: "🥛 - Dairy"
    pub fn category_label(&self) -> String {
        format!("{} - {}", self.category.icon, self.category.title)
    }

    /// Проверяет, что `needle` (уже в нижнем регистре) входит в название товара,
    /// название категории или имя владельца
    pub fn matches_query(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.category.title.to_lowercase().contains(needle)
            || self.user.name.to_lowercase().contains(needle)
    }
}

/// Справочники каталога, загруженные один раз при старте
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    /// Товары в исходном порядке
    pub products: Vec<EnrichedProduct>,
}

impl Catalog {
    /// Связать товары с категориями и владельцами
    ///
    /// Каждая категория обязана ссылаться на существующего пользователя,
    /// каждый товар на существующую категорию. При дубликатах id берётся
    /// первая запись.
    pub fn build(
        users: Vec<User>,
        categories: Vec<Category>,
        products: Vec<Product>,
    ) -> Result<Self, CatalogError> {
        let mut users_by_id: HashMap<UserId, &User> = HashMap::new();
        for user in &users {
            users_by_id.entry(user.id).or_insert(user);
        }

        let mut categories_by_id: HashMap<CategoryId, &Category> = HashMap::new();
        for category in &categories {
            if !users_by_id.contains_key(&category.owner_id) {
                return Err(CatalogError::UnknownOwner {
                    category_id: category.id,
                    owner_id: category.owner_id,
                });
            }
            categories_by_id.entry(category.id).or_insert(category);
        }

        let enriched = products
            .into_iter()
            .map(|product| -> Result<EnrichedProduct, CatalogError> {
                let category = categories_by_id.get(&product.category_id).ok_or(
                    CatalogError::UnknownCategory {
                        product_id: product.id,
                        category_id: product.category_id,
                    },
                )?;
                // владелец уже проверен выше
                let user = users_by_id.get(&category.owner_id).ok_or(
                    CatalogError::UnknownOwner {
                        category_id: category.id,
                        owner_id: category.owner_id,
                    },
                )?;

                Ok(EnrichedProduct {
                    id: product.id,
                    name: product.name,
                    category: (*category).clone(),
                    user: (*user).clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            users,
            categories,
            products: enriched,
        })
    }
}
