//! Заголовок колонки с иконкой сортировки
//!
//! Иконка только декоративная: клик по ней ничего не сортирует.

use crate::shared::icons::icon;
use leptos::prelude::*;

/// Какую иконку показывать в заголовке
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIcon {
    Unsorted,
    Ascending,
    Descending,
}

impl SortIcon {
    pub fn icon_name(&self) -> &'static str {
        match self {
            SortIcon::Unsorted => "sort",
            SortIcon::Ascending => "sort-up",
            SortIcon::Descending => "sort-down",
        }
    }
}

#[component]
pub fn SortHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,
    sort_icon: SortIcon,
) -> impl IntoView {
    view! {
        <th>
            <span class="is-flex is-flex-wrap-nowrap">
                {label}
                <a href="#/">
                    <span class="icon">{icon(sort_icon.icon_name())}</span>
                </a>
            </span>
        </th>
    }
}
