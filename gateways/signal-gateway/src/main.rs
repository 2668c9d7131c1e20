mod paper;

use anyhow::Context;
use log::{info, warn};
use signal_core::api::{run_api_server, ApiState};
use signal_core::args::GatewayArgs;
use signal_core::config::{invalid_descriptors, FileSignalConfig, SignalConfig};
use signal_core::SignalDispatcher;
use std::sync::Arc;

use paper::PaperAlgo;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = GatewayArgs::parse_args(std::env::args().collect());
    info!("=== {} Starting ===", args.get_service_name());

    // 1. Load signal configuration
    let config_path = args.get_signal_config();
    let config = Arc::new(
        FileSignalConfig::load(&config_path)
            .with_context(|| format!("Loading {}", config_path.display()))?,
    );
    for (signal, err) in invalid_descriptors(&config.signal_actions()) {
        warn!("Signal {} will fail when received: {}", signal, err);
    }

    // 2. Wire the dispatcher to the paper algo
    let algo = Arc::new(PaperAlgo::new());
    let dispatcher = SignalDispatcher::new(algo, config.clone());

    // 3. Serve
    let state = ApiState::new(Arc::new(dispatcher)).with_reloader(config);
    run_api_server(state, args.get_port()).await
}
