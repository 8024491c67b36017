use crate::domain::a001_user::aggregate::UserId;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

crate::numeric_id!(
    /// Уникальный идентификатор категории
    CategoryId
);

// ============================================================================
// Aggregate
// ============================================================================

/// Категория товаров
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    /// Эмодзи, выводится перед названием
    pub icon: String,

    #[serde(rename = "ownerId")]
    pub owner_id: UserId,
}

impl Category {
    pub fn new(id: u32, title: impl Into<String>, icon: impl Into<String>, owner_id: u32) -> Self {
        Self {
            id: CategoryId::new(id),
            title: title.into(),
            icon: icon.into(),
            owner_id: UserId::new(owner_id),
        }
    }
}
