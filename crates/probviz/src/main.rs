#[cfg(feature = "native")]
use clap::Parser;
#[cfg(feature = "native")]
use color_eyre::eyre::eyre;
#[cfg(feature = "native")]
use probviz::{App, data::keybindings_data::KeybindingsConfig, init_logging};
#[cfg(feature = "native")]
use probviz_core::DistributionKind;
#[cfg(feature = "native")]
use std::path::PathBuf;

#[cfg(feature = "native")]
#[derive(Parser, Debug)]
#[command(name = "probviz")]
#[command(about = "An interactive terminal explorer for probability distributions")]
struct Args {
    /// Path to the data directory (default: ~/.probviz/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Distribution selected at startup (Normal, Poisson, Bernoulli)
    #[arg(long, default_value = "Normal")]
    distribution: String,
}

#[cfg(feature = "native")]
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".probviz")
}

#[cfg(feature = "native")]
fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    let initial: DistributionKind = args
        .distribution
        .parse()
        .map_err(|e| eyre!("{e} (expected one of Normal, Poisson, Bernoulli)"))?;

    init_logging(&data_dir, &args.log_level)?;

    let keybindings = KeybindingsConfig::load_or_init(&data_dir);
    let mut app = App::new(initial, keybindings);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    Ok(())
}

#[cfg(not(feature = "native"))]
fn main() {
    // Web entry point is handled via wasm_bindgen in lib.rs
    // This main() exists only to satisfy the binary target requirement
    panic!(
        "This binary requires the 'native' feature. For web, use trunk to build the WASM target."
    );
}
