use log::{error, info};
use seasonal_ts::config::DemoConfig;
use seasonal_ts::demo;
use std::env;

fn main() {
    // Optional first argument: path to a TOML or YAML config file
    let config_path = env::args().nth(1);

    let config = match DemoConfig::load_with_precedence(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            init_logger("info");
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logger(&config.logging.level);
    info!("seasonal-demo {} starting", seasonal_ts::VERSION);

    demo::run(&config);

    info!("Done");
}

/// Initialize env_logger at the configured level
fn init_logger(level: &str) {
    env_logger::Builder::new().parse_filters(level).init();
}
