//! casedash dashboard (text mode)
//!
//! - Loads `dashboard.yaml` (or the path given as the first argument)
//! - Prints the complaint table once
//! - Animates the stat cards, one frame per tick
//! - Ctrl-C tears the run down immediately
//!
//! `CASEDASH_JSON=1` prints each frame as a JSON snapshot instead.

use tokio::sync::broadcast::error::RecvError;
use tracing_subscriber::{fmt, EnvFilter};

use casedash_core::animation::Snapshot;
use casedash_core::error::{CaseDashError, Result};
use casedash_surface::config;
use casedash_surface::surface::DisplaySurface;

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "dashboard.yaml".to_string());
    let cfg = config::load_from_file(&path)?;
    let json = std::env::var("CASEDASH_JSON").is_ok_and(|v| v == "1");

    let mut surface = DisplaySurface::new(cfg);
    for line in surface.render_records() {
        println!("{line}");
    }
    println!();

    let run = surface.mount()?;
    let mut rx = run.subscribe();
    let initial = run.snapshot();
    tracing::info!(%path, run_id = run.id(), "casedash dashboard mounted");

    if initial.phase.is_terminal() {
        print_frame(&surface, &initial, json)?;
    } else {
        loop {
            tokio::select! {
                msg = rx.recv() => match msg {
                    Ok(snap) => {
                        print_frame(&surface, &snap, json)?;
                        if snap.phase.is_terminal() {
                            break;
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "renderer lagged behind the animator");
                    }
                    Err(RecvError::Closed) => break,
                },
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("interrupted, tearing down");
                    break;
                }
            }
        }
    }

    surface.unmount();
    tracing::debug!(metrics = %surface.animator().metrics().render(), "animator counters");
    Ok(())
}

fn print_frame(surface: &DisplaySurface, snap: &Snapshot, json: bool) -> Result<()> {
    if json {
        let line = serde_json::to_string(snap)
            .map_err(|e| CaseDashError::Internal(format!("json encode failed: {e}")))?;
        println!("{line}");
    } else {
        println!("tick {:>3} | {}", snap.tick, surface.render_stats(snap).join(" | "));
    }
    Ok(())
}
