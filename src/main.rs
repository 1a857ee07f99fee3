use anyhow::Result;
use checklist::config::Config;
use checklist::logger::Logger;
use checklist::ui;

const USAGE: &str = "Usage: checklist [--generate-config] [--help] [--version]

Options:
  --generate-config  Write a default config file to the XDG config directory and exit
  -h, --help         Show this message
  -V, --version      Show version";

#[tokio::main]
async fn main() -> Result<()> {
    if let Some(arg) = std::env::args().nth(1) {
        match arg.as_str() {
            "--generate-config" => {
                let path = Config::get_default_config_path()?;
                Config::generate_default_config(&path)?;
                return Ok(());
            }
            "-h" | "--help" => {
                println!("{}", USAGE);
                return Ok(());
            }
            "-V" | "--version" => {
                println!("checklist {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            other => {
                eprintln!("❌ Unknown argument: {}\n\n{}", other, USAGE);
                std::process::exit(2);
            }
        }
    }

    let config = Config::load()?;
    let logger = Logger::from_config(config.logging.enabled)?;
    log::info!("Starting checklist {}", env!("CARGO_PKG_VERSION"));

    // Run the TUI application
    ui::run_app(config, logger).await?;

    Ok(())
}
