//! CLI entry point for order-lookup.

mod cli;

use clap::Parser;
use order_lookup::api::{ClientOptions, ShopifyClient};
use order_lookup::config::{default_config_path, load_or_init_config};
use order_lookup::error::{ConfigError, LookupError};
use order_lookup::logging::init_tracing;
use order_lookup::repl::{run_repl, FetchErrorPolicy};
use order_lookup::ui::input::StdinReader;
use order_lookup::ui::render::{RenderSink, Renderer};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    init_tracing();
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "starting");

    let color = !args.no_color && std::io::stderr().is_terminal();
    let renderer = Renderer::new(color);

    if let Err(e) = run(&args, color, &renderer).await {
        renderer.error(&e.to_string());
        std::process::exit(1);
    }
}

/// Load or create the credentials, then run the lookup loop.
async fn run(args: &cli::Args, color: bool, renderer: &Renderer) -> Result<(), LookupError> {
    let config_path = args
        .config
        .as_deref()
        .map(PathBuf::from)
        .or_else(default_config_path)
        .ok_or_else(|| {
            ConfigError::Invalid("unable to resolve the config path; pass --config <PATH>".into())
        })?;

    let mut input = StdinReader::new(color);
    let (config, _) = load_or_init_config(&config_path, &mut input, renderer)?;

    let options = ClientOptions {
        api_version: args.api_version.clone(),
        timeout: args.timeout_secs.map(Duration::from_secs),
    };
    let client = ShopifyClient::new(&config, &options);
    let policy = if args.fail_fast {
        FetchErrorPolicy::FailFast
    } else {
        FetchErrorPolicy::Continue
    };

    run_repl(&mut input, &client, renderer, policy).await?;
    Ok(())
}
