use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pet_registry::console::{shell, LineConsole};
use pet_registry::registry::Registry;

#[derive(Parser)]
#[command(name = "petshop")]
#[command(about = "Register shop pets and list them back, interactively")]
struct Cli {
    /// Tracing filter directives, e.g. `pet_registry=debug`
    #[arg(long, env = "RUST_LOG", default_value = "pet_registry=warn")]
    log_filter: String,
}

/// Initialize tracing on stderr so stdout carries only the dialogue
fn init_tracing(directives: &str) {
    let filter = tracing_subscriber::EnvFilter::new(directives);

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_filter);

    let mut registry = Registry::new();
    let mut console = LineConsole::stdio();

    shell::run(&mut console, &mut registry)?;

    tracing::debug!(pets = registry.len(), "session finished");
    Ok(())
}
