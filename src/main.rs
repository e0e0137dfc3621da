/// Admin Panel Client - Main entry point
///
/// An interactive console for managing the product catalog and user directory
/// of a REST resource store.
use admin_panel_client::api::CollectionApi;
use admin_panel_client::console::{Console, ScreenKind};
use admin_panel_client::i18n::Locale;
use admin_panel_client::Result;
use clap::Parser;
use log::info;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "admin-panel")]
#[command(about = "Admin panel console - product catalog and user directory")]
struct Args {
    /// Backend base URL (default: http://localhost:3000)
    #[arg(long, default_value = "http://localhost:3000")]
    server: String,

    /// Screen to open first (products or users)
    #[arg(long, default_value = "products")]
    screen: String,

    /// UI language (uz or en)
    #[arg(long, default_value = "uz")]
    lang: String,

    /// Enable verbose logging (DEBUG level)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    info!("Starting Admin Panel Client");
    info!("Server: {}", args.server);

    let screen = ScreenKind::parse(&args.screen)?;
    let locale = Locale::parse(&args.lang)?;

    let api = Arc::new(CollectionApi::new(&args.server));
    let mut console = Console::new(api, screen, locale);

    console.run().await?;

    Ok(())
}
