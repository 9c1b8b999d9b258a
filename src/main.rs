use anyhow::Result;
use tasklist::config::Config;
use tasklist::{logger, storage, ui};

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().skip(1).any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = Config::load()?;
    logger::init(&config.logging)?;

    let store = storage::open(&config.storage).await?;

    // Run the TUI application
    ui::run_app(config, store).await?;

    Ok(())
}
