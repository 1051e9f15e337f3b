use clap::Parser;
use recipes_ui_core::PageConfig;
use wasm_bindgen::prelude::*;

pub use env::*;

mod env;

#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::window;

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window().location().hash().unwrap_or_default();

    let (args, bad_flags) = match Args::try_parse_from(location_hash.split(['#', '&'])) {
        Ok(args) => (args, None),
        Err(err) => (Args::default(), Some(err)),
    };
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Some(err) = bad_flags {
        log::warn!("ignoring location flags: {}", err);
    }

    match recipes_ui_core::install(BrowserEnv, &PageConfig::default()) {
        Ok(installed) => log::debug!("page behavior installed: {:?}", installed),
        Err(err) => log::error!("failed to install page behavior: {}", err),
    }
}
