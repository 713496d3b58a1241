//! Distpack - build and packaging orchestrator for desktop applications.
//!
//! This binary compiles an application's back-end shell and front-end bundles
//! with an external bundler, then packages the compiled output into
//! platform-native distributables for the host platform or the full
//! platform/architecture matrix.

mod cli;
mod error;
mod manifest;
mod pack;
mod version;

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging; pipeline progress is reported at info level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
