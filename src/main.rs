use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::Result;

use minicart::{
    infrastructure::{
        cart_store::InMemoryCartProvider, cli::Cli, config::Config, tui::real::RealTui,
    },
    integration::App,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    let config = Config::new()?;

    let provider =
        InMemoryCartProvider::new("USD").latency(Duration::from_millis(args.latency_ms));
    let mut tui = RealTui::new()?
        .tick_rate(args.tick_rate)
        .frame_rate(args.frame_rate);
    let mut app = App::new(config, provider)?;
    app.run(&mut tui).await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
