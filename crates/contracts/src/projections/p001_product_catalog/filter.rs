use super::dto::EnrichedProduct;

/// Состояние фильтров списка товаров
///
/// Меняется только явными действиями пользователя. Запрос хранится как
/// введён, обрезка пробелов делается в момент фильтрации.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Имя владельца категории, пустая строка = все
    pub name_filter: String,
    /// Выбранные названия категорий в порядке выбора, пусто = все
    pub selected_categories: Vec<String>,
    /// Поисковый запрос
    pub query: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name_filter(&mut self, name: impl Into<String>) {
        self.name_filter = name.into();
    }

    /// Снять категорию, если она выбрана, иначе добавить в конец
    pub fn toggle_category(&mut self, title: &str) {
        if let Some(pos) = self.selected_categories.iter().position(|t| t == title) {
            self.selected_categories.remove(pos);
        } else {
            self.selected_categories.push(title.to_string());
        }
    }

    pub fn clear_categories(&mut self) {
        self.selected_categories.clear();
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Сбросить все три фильтра одновременно
    pub fn reset_all(&mut self) {
        *self = Self::default();
    }

    /// Ссылка пользователя подсвечивается только при точном совпадении имени
    pub fn is_user_selected(&self, name: &str) -> bool {
        self.name_filter == name
    }

    pub fn is_category_selected(&self, title: &str) -> bool {
        self.selected_categories.iter().any(|t| t == title)
    }

    pub fn has_category_selection(&self) -> bool {
        !self.selected_categories.is_empty()
    }
}

/// Отфильтровать товары по владельцу, категориям и поисковому запросу
///
/// Порядок исходного списка сохраняется, сортировки нет.
pub fn filter_products(products: &[EnrichedProduct], state: &FilterState) -> Vec<EnrichedProduct> {
    let name_filter = state.name_filter.to_lowercase();
    let query = state.query.trim().to_lowercase();

    products
        .iter()
        .filter(|product| product.user.name.to_lowercase().contains(&name_filter))
        .filter(|product| {
            !state.has_category_selection() || state.is_category_selected(&product.category.title)
        })
        .filter(|product| product.matches_query(&query))
        .cloned()
        .collect()
}
