use std::sync::Arc;

use clap::Parser;

use squall::api::{self, ApiState};
use squall::rng::SimRng;

#[derive(Debug, Parser)]
#[command(
    name = "squall",
    about = "Adversarial weather API simulator for frontend resilience auditing"
)]
struct Cli {
    /// Port the simulator listens on
    #[arg(long, short, default_value = "3000", env = "SQUALL_PORT")]
    port: u16,

    /// Fix the random seed so simulated corruption is reproducible
    #[arg(long, env = "SQUALL_SEED")]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new().init().unwrap();
    let cli = Cli::parse();

    let rng = match cli.seed {
        Some(seed) => {
            log::warn!("Running with fixed seed {seed}; corruption draws are reproducible");
            Arc::new(SimRng::seeded(seed))
        }
        None => Arc::new(SimRng::from_entropy()),
    };

    api::serve(ApiState::new(rng), cli.port).await
}
