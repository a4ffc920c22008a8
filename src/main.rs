use std::sync::Arc;

use clap::Parser;
use eframe::egui;
use pokedetail::{
    core::{
        settings::SETTINGS_FILE,
        PokeApiClient,
        PokedetailError,
        SettingsData,
        SettingsOverrides,
    },
    gui::PokedetailApp,
    persistence::load_json_or_default,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Show the Pokédex entry for one Pokémon
#[derive(Parser, Debug)]
#[command(name = "pokedetail", version, about, long_about = None)]
struct Args {
    /// Pokémon name or number, passed to the API as given
    #[arg(value_name = "IDENTIFIER")]
    identifier: Option<String>,

    /// PokeAPI base URL (overrides settings)
    #[arg(long, env = "POKEDETAIL_API_BASE")]
    api_base: Option<String>,

    /// Request timeout in seconds (overrides settings)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Start in light mode
    #[arg(long)]
    light: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), PokedetailError> {
    let args = Args::parse();

    let default_level = if args.verbose { "pokedetail=debug,info" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let overrides = SettingsOverrides {
        api_base: args.api_base,
        timeout_secs: args.timeout_secs,
        light: args.light,
    };
    let settings = load_json_or_default::<SettingsData>(SETTINGS_FILE).with_overrides(&overrides);

    info!("Starting pokedetail {}", env!("CARGO_PKG_VERSION"));
    info!(api_base = %settings.api_base, "Using PokeAPI");

    let source = Arc::new(PokeApiClient::new(&settings.api_base, settings.timeout())?);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Pokédex")
            .with_inner_size([480.0, 820.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };

    let identifier = args.identifier;
    eframe::run_native(
        "pokedetail",
        options,
        Box::new(move |cc| {
            let app = PokedetailApp::new(cc, settings, identifier, source)?;
            Ok(Box::new(app))
        }),
    )?;

    Ok(())
}
