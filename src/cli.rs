//! CLI argument parsing via clap.

use clap::Parser;
use order_lookup::api::DEFAULT_API_VERSION;

/// Look up Shopify orders by name, order number, or order id.
#[derive(Debug, Parser)]
#[command(name = "order-lookup", version)]
pub struct Args {
    /// Path to the credential file (default: config.json next to the executable).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Exit on the first network or decode error instead of prompting again.
    #[arg(long = "fail-fast")]
    pub fail_fast: bool,

    /// Abort an order search after this many seconds (no limit by default).
    #[arg(long = "timeout-secs", value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Admin API version used in the request path.
    #[arg(long = "api-version", default_value = DEFAULT_API_VERSION)]
    pub api_version: String,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}
