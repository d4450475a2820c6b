use anyhow::Context;
use clap::Parser;

use cuppa::config::Config;
use cuppa::{logging, ui};

/// Terminal browser for a hot-coffee catalog.
#[derive(Debug, Parser)]
#[command(name = "cuppa", version, about)]
struct Cli {
    /// Collection endpoint to fetch the catalog from.
    #[arg(long)]
    endpoint: Option<String>,

    /// UI tick interval in milliseconds.
    #[arg(long)]
    tick_ms: Option<u64>,
}

impl Cli {
    fn apply(self, config: &mut Config) {
        if let Some(endpoint) = self.endpoint {
            config.endpoint = endpoint;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_ms = tick_ms;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing();

    let mut config = Config::load().context("failed to load configuration")?;
    cli.apply(&mut config);
    config.validate().context("invalid configuration")?;

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let _enter = runtime.enter();
    ui::runtime::run(config).context("terminal UI failed")?;
    Ok(())
}
