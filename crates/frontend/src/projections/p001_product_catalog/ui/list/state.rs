use crate::shared::components::sort_header_cell::SortIcon;
use contracts::FilterState;
use leptos::prelude::*;

/// Колонки таблицы товаров
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortColumn {
    Id,
    Product,
    Category,
    User,
}

impl SortColumn {
    pub fn all() -> [SortColumn; 4] {
        [
            SortColumn::Id,
            SortColumn::Product,
            SortColumn::Category,
            SortColumn::User,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortColumn::Id => "ID",
            SortColumn::Product => "Product",
            SortColumn::Category => "Category",
            SortColumn::User => "User",
        }
    }
}

/// Иконки сортировки в заголовках
///
/// Только отображение: на порядок строк не влияет и действиями не меняется.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortIntent {
    icons: [(SortColumn, SortIcon); 4],
}

impl SortIntent {
    pub fn icon_for(&self, column: SortColumn) -> SortIcon {
        self.icons
            .iter()
            .find(|(c, _)| *c == column)
            .map(|(_, icon)| *icon)
            .unwrap_or(SortIcon::Unsorted)
    }
}

impl Default for SortIntent {
    fn default() -> Self {
        Self {
            icons: [
                (SortColumn::Id, SortIcon::Unsorted),
                (SortColumn::Product, SortIcon::Descending),
                (SortColumn::Category, SortIcon::Ascending),
                (SortColumn::User, SortIcon::Unsorted),
            ],
        }
    }
}

/// Действия пользователя над фильтрами
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterAction {
    SetNameFilter(String),
    ToggleCategory(String),
    ClearCategories,
    SetQuery(String),
    ClearQuery,
    ResetAll,
}

impl FilterAction {
    pub fn apply(self, filters: &mut FilterState) {
        match self {
            FilterAction::SetNameFilter(name) => filters.set_name_filter(name),
            FilterAction::ToggleCategory(title) => filters.toggle_category(&title),
            FilterAction::ClearCategories => filters.clear_categories(),
            FilterAction::SetQuery(text) => filters.set_query(text),
            FilterAction::ClearQuery => filters.clear_query(),
            FilterAction::ResetAll => filters.reset_all(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ProductCatalogState {
    // filters
    pub filters: FilterState,

    // cosmetic sorting
    pub sort: SortIntent,
}

impl ProductCatalogState {
    pub fn dispatch(&mut self, action: FilterAction) {
        log::debug!("product catalog filter action: {:?}", action);
        action.apply(&mut self.filters);
    }
}

pub fn create_state() -> RwSignal<ProductCatalogState> {
    RwSignal::new(ProductCatalogState::default())
}
