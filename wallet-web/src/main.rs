//! Stellar Wallet Gate - browser front-end
//!
//! Leptos CSR app whose dashboard is guarded by a wallet gate. Gate logic lives
//! in `lib-gate`; this crate adapts it to components and browser APIs.

use leptos::prelude::*;
use lib_gate::config::{init_config, GateConfig};
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod environment;
mod pages;
mod services;
mod state;
mod utils;

use app::App;
use environment::{Environment, RenderTarget};

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Stellar wallet gate starting");

    let config = match utils::build_env::load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}; falling back to defaults", e);
            GateConfig::default()
        }
    };
    log::debug!("Gate configuration: {:?}", config);
    init_config(config);

    // Checked once; overlays read the result from context.
    let env = Environment::detect();
    let render_target = RenderTarget::from(&env);
    match env {
        Ok(env) => {
            log::debug!("Rendering into <{}>", env.body().tag_name().to_lowercase());
            env.hide_boot_screen();
        }
        Err(e) => {
            log::error!("{}; nothing to mount", e);
            return;
        }
    }

    leptos::mount::mount_to_body(move || view! { <App render_target=render_target/> });
}
