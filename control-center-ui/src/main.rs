//! Control Center Dashboard
//!
//! Global AI Business Control Center built with Leptos (WASM).
//!
//! # Features
//!
//! - Seven views over pre-aggregated business metrics
//! - Collapsible side navigation with exact-path active highlighting
//! - Canvas trend and share charts, tables, highlight lists and a heatmap
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All routing, navigation state and view composition lives in
//! the `control-center` crate; this crate only renders its layouts.

use control_center::Config;
use leptos::*;

mod app;
mod components;
mod logging;
mod pages;

/// Configuration baked into the bundle at build time
const EMBEDDED_CONFIG: &str = include_str!("../../control-center.toml");

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let (config, config_error) = match Config::from_toml_str(EMBEDDED_CONFIG) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    logging::init(&config.logging);
    if let Some(e) = config_error {
        tracing::warn!("Falling back to default config: {}", e);
    }
    tracing::info!("Control Center dashboard v{}", env!("CARGO_PKG_VERSION"));

    // Mount the app to the document body
    mount_to_body(move || view! { <app::App config=config /> });
}
