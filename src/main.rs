//! wire4d - perspective projection of 4D polytopes to TikZ wireframes
//!
//! Projects the canonical 4-simplex down to 2D and prints the TikZ
//! document to stdout. Per-vertex intermediate images go to the log's
//! debug channel (`RUST_LOG=debug`).

use wire4d::config::AppConfig;
use wire4d::pipeline;

fn main() {
    env_logger::init();

    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let document = pipeline::run(&config)
        .unwrap_or_else(|e| panic!("Projection failed: {}", e));

    print!("{}", document);
}
