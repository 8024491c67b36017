use crate::enums::Sex;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

crate::numeric_id!(
    /// Уникальный идентификатор пользователя
    UserId
);

// ============================================================================
// Aggregate
// ============================================================================

/// Пользователь, владелец категорий
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub sex: Sex,
}

impl User {
    pub fn new(id: u32, name: impl Into<String>, sex: Sex) -> Self {
        Self {
            id: UserId::new(id),
            name: name.into(),
            sex,
        }
    }
}
