use leptos::*;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod hooks;

pub use app::App;
pub use components::ZoomableImage;

#[wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount_to_body(App);
}
