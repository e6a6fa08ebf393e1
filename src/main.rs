use anyhow::Result;
use clap::Parser;
use snake_arcade::app::App;
use snake_arcade::game::GameConfig;

#[derive(Parser)]
#[command(name = "snake_arcade")]
#[command(version, about = "Classic Snake with a menu and two food types")]
struct Cli {
    /// Milliseconds between game ticks
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: u64,

    /// Fixed RNG seed for reproducible food placement
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig {
        tick_ms: cli.tick_ms,
        ..Default::default()
    };

    let mut app = match cli.seed {
        Some(seed) => App::with_seed(config, seed),
        None => App::new(config),
    };

    app.run().await
}
