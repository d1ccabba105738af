use clap::Parser;

mod backend;
mod config;
mod draw;
mod input;
mod ui;
mod util;

#[derive(Parser, Debug)]
#[command(name = "chalkboard")]
#[command(version, about = "Chalkboard drawing toy for Wayland compositors")]
struct Cli {
    /// Tool to start with (chalk or duster)
    #[arg(long, short = 't', value_name = "TOOL")]
    tool: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if std::env::var("WAYLAND_DISPLAY").is_err() {
        log::error!("WAYLAND_DISPLAY not set - this application requires Wayland.");
        log::error!("Please run on a Wayland compositor (Hyprland, Sway, etc.).");
        return Err(anyhow::anyhow!("Wayland environment required"));
    }

    log::info!("Starting chalkboard...");
    log::info!("Controls:");
    log::info!("  - Draw: drag with the left button or one finger");
    log::info!("  - Chalk: press C");
    log::info!("  - Duster: press D");
    log::info!("  - Exit: Escape");

    backend::run_wayland(cli.tool)?;

    log::info!("Chalkboard closed.");
    Ok(())
}
