use super::state::{create_state, FilterAction, ProductCatalogState, SortColumn};
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::sort_header_cell::SortHeaderCell;
use crate::shared::config::Config;
use contracts::{filter_products, Catalog, EnrichedProduct};
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductRow {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub user: String,
    pub user_class: &'static str,
}

impl From<EnrichedProduct> for ProductRow {
    fn from(p: EnrichedProduct) -> Self {
        let category = p.category_label();
        Self {
            id: p.id.0,
            name: p.name,
            category,
            user: p.user.name,
            user_class: "has-text-link",
        }
    }
}

/// Содержимое тела таблицы
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableBody {
    Rows(Vec<ProductRow>),
    /// Ничего не найдено, вместо строк выводится сообщение
    Empty(String),
}

pub fn table_body(items: Vec<EnrichedProduct>, empty_message: &str) -> TableBody {
    if items.is_empty() {
        TableBody::Empty(empty_message.to_string())
    } else {
        TableBody::Rows(items.into_iter().map(ProductRow::from).collect())
    }
}

pub fn category_button_class(is_selected: bool) -> &'static str {
    if is_selected {
        "button mr-2 my-1 is-info"
    } else {
        "button mr-2 my-1"
    }
}

fn dispatch(state: RwSignal<ProductCatalogState>, action: FilterAction) {
    state.update(|s| s.dispatch(action));
}

#[component]
pub fn ProductCatalogList(catalog: &'static Catalog) -> impl IntoView {
    let config = use_context::<Config>().expect("Config not found in context");
    let state = create_state();

    // Пересчитывается синхронно после каждого действия
    let visible = Memo::new(move |_| {
        let items = state.with(|s| filter_products(&catalog.products, &s.filters));
        log::debug!(
            "product catalog: {} of {} products visible",
            items.len(),
            catalog.products.len()
        );
        items
    });

    let query = Signal::derive(move || state.with(|s| s.filters.query.clone()));

    let user_links = catalog
        .users
        .iter()
        .map(|user| {
            let name = user.name.clone();
            let name_for_class = name.clone();
            let name_for_click = name.clone();
            view! {
                <a
                    data-cy="FilterUser"
                    href="#/"
                    class=move || {
                        if state.with(|s| s.filters.is_user_selected(&name_for_class)) {
                            "is-active"
                        } else {
                            ""
                        }
                    }
                    on:click=move |_| {
                        dispatch(state, FilterAction::SetNameFilter(name_for_click.clone()))
                    }
                >
                    {name}
                </a>
            }
        })
        .collect_view();

    let category_buttons = catalog
        .categories
        .iter()
        .map(|category| {
            let title = category.title.clone();
            let title_for_class = title.clone();
            let title_for_click = title.clone();
            view! {
                <a
                    data-cy="Category"
                    href="#/"
                    class=move || {
                        category_button_class(
                            state.with(|s| s.filters.is_category_selected(&title_for_class)),
                        )
                    }
                    on:click=move |_| {
                        dispatch(state, FilterAction::ToggleCategory(title_for_click.clone()))
                    }
                >
                    {title}
                </a>
            }
        })
        .collect_view();

    let header_cells = SortColumn::all()
        .into_iter()
        .map(|column| {
            let sort_icon = state.with_untracked(|s| s.sort.icon_for(column));
            view! { <SortHeaderCell label=column.label() sort_icon=sort_icon /> }
        })
        .collect_view();

    let empty_message = config.view.empty_message.clone();

    view! {
        <div class="section">
            <div class="container">
                <h1 class="title">{config.view.title.clone()}</h1>

                <div class="block">
                    <nav class="panel">
                        <p class="panel-heading">"Filters"</p>

                        <p class="panel-tabs has-text-weight-bold">
                            <a
                                data-cy="FilterAllUsers"
                                href="#/"
                                on:click=move |_| {
                                    dispatch(state, FilterAction::SetNameFilter(String::new()))
                                }
                            >
                                "All"
                            </a>
                            {user_links}
                        </p>

                        <div class="panel-block">
                            <SearchInput
                                value=query
                                placeholder=config.view.search_placeholder.clone()
                                on_change=Callback::new(move |text: String| {
                                    dispatch(state, FilterAction::SetQuery(text))
                                })
                                on_clear=Callback::new(move |_: ()| {
                                    dispatch(state, FilterAction::ClearQuery)
                                })
                            />
                        </div>

                        <div class="panel-block is-flex-wrap-wrap">
                            <a
                                data-cy="AllCategories"
                                href="#/"
                                class=move || {
                                    category_button_class(
                                        !state.with(|s| s.filters.has_category_selection()),
                                    )
                                }
                                on:click=move |_| dispatch(state, FilterAction::ClearCategories)
                            >
                                "All"
                            </a>
                            {category_buttons}
                        </div>

                        <div class="panel-block">
                            <a
                                data-cy="ResetAllButton"
                                href="#/"
                                class="button is-link is-outlined is-fullwidth"
                                on:click=move |_| dispatch(state, FilterAction::ResetAll)
                            >
                                "Reset all filters"
                            </a>
                        </div>
                    </nav>
                </div>

                <div class="box table-container">
                    <table
                        data-cy="ProductTable"
                        class="table is-striped is-narrow is-fullwidth"
                    >
                        <thead>
                            <tr>{header_cells}</tr>
                        </thead>

                        <tbody>
                            {move || match table_body(visible.get(), &empty_message) {
                                TableBody::Empty(message) => view! {
                                    <tr>
                                        <td colspan="4">{message}</td>
                                    </tr>
                                }
                                .into_any(),
                                TableBody::Rows(rows) => {
                                    rows.into_iter().map(product_row).collect_view().into_any()
                                }
                            }}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}

fn product_row(row: ProductRow) -> impl IntoView {
    view! {
        <tr data-cy="Product">
            <td class="has-text-weight-bold" data-cy="ProductId">
                {row.id}
            </td>
            <td data-cy="ProductName">{row.name}</td>
            <td data-cy="ProductCategory">{row.category}</td>
            <td data-cy="ProductUser" class=row.user_class>
                {row.user}
            </td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_user::aggregate::User;
    use contracts::domain::a002_category::aggregate::Category;
    use contracts::domain::a003_product::aggregate::Product;
    use contracts::enums::Sex;
    use contracts::FilterState;

    fn milk_only() -> Vec<EnrichedProduct> {
        Catalog::build(
            vec![User::new(1, "Roma", Sex::Male)],
            vec![Category::new(1, "Dairy", "🥛", 1)],
            vec![Product::new(1, "Milk", 1)],
        )
        .unwrap()
        .products
    }

    #[test]
    fn test_unmatched_category_shows_message() {
        let mut filters = FilterState::new();
        filters.toggle_category("Drinks");
        let body = table_body(
            filter_products(&milk_only(), &filters),
            "No products matching selected criteria",
        );
        assert_eq!(
            body,
            TableBody::Empty("No products matching selected criteria".to_string())
        );
    }

    #[test]
    fn test_matching_products_become_rows() {
        let mut filters = FilterState::new();
        filters.set_query("dai");
        let body = table_body(filter_products(&milk_only(), &filters), "none");
        assert_eq!(
            body,
            TableBody::Rows(vec![ProductRow {
                id: 1,
                name: "Milk".to_string(),
                category: "🥛 - Dairy".to_string(),
                user: "Roma".to_string(),
                user_class: "has-text-link",
            }])
        );
    }

    #[test]
    fn test_user_cell_class_ignores_sex() {
        let products = Catalog::build(
            vec![User::new(1, "Anna", Sex::Female)],
            vec![Category::new(1, "Fruits", "🍏", 1)],
            vec![Product::new(1, "Apple", 1)],
        )
        .unwrap()
        .products;
        let row = ProductRow::from(products[0].clone());
        assert_eq!(row.user_class, "has-text-link");
    }

    #[test]
    fn test_category_button_class() {
        assert_eq!(category_button_class(true), "button mr-2 my-1 is-info");
        assert_eq!(category_button_class(false), "button mr-2 my-1");
    }
}
