pub mod app;
pub mod domain;
pub mod routes;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn mount() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(shared::api_utils::log_level());
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    mount();
}
