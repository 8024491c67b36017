pub mod app;
pub mod projections;
pub mod shared;

use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();

    let config = match shared::config::load_config() {
        Ok(config) => config,
        Err(e) => panic!("embedded config is invalid: {e}"),
    };

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.logging.log_level());

    // битые seed-данные: падаем сразу, восстановления нет
    let catalog = match contracts::shared::seed::catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("Failed to load product catalog: {}", e);
            panic!("product catalog seed data is invalid: {e}");
        }
    };
    log::info!(
        "Product catalog loaded: {} users, {} categories, {} products",
        catalog.users.len(),
        catalog.categories.len(),
        catalog.products.len()
    );

    leptos::mount::mount_to_body(move || view! { <app::App config=config catalog=catalog /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
