use crate::projections::p001_product_catalog::ui::list::ProductCatalogList;
use crate::shared::config::Config;
use contracts::Catalog;
use leptos::prelude::*;

#[component]
pub fn App(config: Config, catalog: &'static Catalog) -> impl IntoView {
    // Provide the view configuration to the whole app via context.
    provide_context(config);

    view! {
        <ProductCatalogList catalog=catalog />
    }
}
