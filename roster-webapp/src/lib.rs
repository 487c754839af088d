#![recursion_limit = "512"]

use log::*;

use wasm_bindgen::prelude::*;

use roster_commons::config::{Config, ConfigurationError};

mod app;
mod views;

pub mod ctrl;
pub mod resource;

/// JSON configuration baked in at build time
const EMBEDDED_CONFIG: Option<&str> = option_env!("CONFIG");

fn resolve_config(embedded: Option<&str>) -> Result<Config, ConfigurationError> {
    match embedded {
        Some(raw) => Config::from_json(raw),
        None => Ok(Config::default()),
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    console_error_panic_hook::set_once();

    let resolved = resolve_config(EMBEDDED_CONFIG);
    let config = match resolved {
        Ok(ref config) => config.clone(),
        Err(_) => Config::default(),
    };

    wasm_logger::init(wasm_logger::Config::new(config.log_level()));

    if let Err(error) = resolved {
        warn!("Ignoring embedded configuration: {}", error);
    }
    debug!("Starting with {:?}", config);

    yew::start_app_with_props::<app::AppContainer>(app::AppProps { config });
}
