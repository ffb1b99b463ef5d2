//! Browser console logging
//!
//! `tracing-wasm` forwards events to the browser console; an `EnvFilter`
//! built from `logging.level` sits in front of it.

use control_center::LoggingConfig;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
use tracing_wasm::{ConsoleConfig, WASMLayer, WASMLayerConfigBuilder};

/// `pretty` styles each line with console colors, `compact` prints plain text
fn console_config(format: &str) -> ConsoleConfig {
    match format {
        "compact" => ConsoleConfig::ReportWithoutConsoleColor,
        _ => ConsoleConfig::ReportWithConsoleColor,
    }
}

/// Install the global subscriber
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|e| {
        web_sys::console::warn_1(
            &format!("Invalid log level {:?}: {}, using info", config.level, e).into(),
        );
        EnvFilter::new("info")
    });

    let layer_config = WASMLayerConfigBuilder::new()
        .set_console_config(console_config(&config.format))
        .build();

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(WASMLayer::new(layer_config))
        .try_init();

    if let Err(e) = result {
        web_sys::console::warn_1(&format!("Logging already initialized: {}", e).into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn compact_format_drops_console_colors() {
        assert!(matches!(
            console_config("compact"),
            ConsoleConfig::ReportWithoutConsoleColor
        ));
        assert!(matches!(
            console_config("pretty"),
            ConsoleConfig::ReportWithConsoleColor
        ));
    }
}
