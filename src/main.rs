//! Todo Widget Frontend Entry Point

mod config;
mod storage;
mod context;
mod store;
mod components;
mod app;
mod dom;

use app::App;
use config::{Variant, WidgetConfig};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();

    let config = WidgetConfig::from_body();
    tracing::info!(
        variant = config.variant.as_str(),
        key = %config.storage_key,
        "starting todo widget"
    );

    match config.variant {
        Variant::Bound => {
            mount_to_body(move || view! { <App config=config /> });
        }
        Variant::Dom => {
            if let Err(err) = dom::mount(&config) {
                tracing::error!(error = ?err, "failed to mount DOM widget");
            }
        }
    }
}
