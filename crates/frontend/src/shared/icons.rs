use leptos::prelude::*;

/// Иконка Font Awesome по имени (разметка Bulma-страницы)
pub fn icon(name: &str) -> AnyView {
    match name {
        "search" => view! { <i class="fas fa-search" aria-hidden="true"></i> }.into_any(),
        "sort" => view! { <i data-cy="SortIcon" class="fas fa-sort"></i> }.into_any(),
        "sort-up" => view! { <i data-cy="SortIcon" class="fas fa-sort-up"></i> }.into_any(),
        "sort-down" => view! { <i data-cy="SortIcon" class="fas fa-sort-down"></i> }.into_any(),
        _ => view! { <span></span> }.into_any(),
    }
}
