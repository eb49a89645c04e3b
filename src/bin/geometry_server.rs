//! Geometry server: one JSON-RPC request per stdin line, one response per
//! stdout line. Logs go to stderr; set RUST_LOG to change the level.

use slide_geometry::server::{serve, ServerState};
use std::io;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    log::info!("Starting geometry server...");
    let mut state = ServerState::new();
    serve(&mut state, io::stdin().lock(), io::stdout().lock())?;

    log::info!("Shutting down...");
    Ok(())
}
