//! Tracing bootstrap for binaries. Library code only emits events.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const ENV_LOG_JSON: &str = "RERANK_LOG_JSON";
const DEFAULT_FILTER: &str = "sector_rerank=info,warn";

/// Install a global subscriber: `RUST_LOG` filter (default
/// `sector_rerank=info,warn`), compact output, or JSON when
/// `RERANK_LOG_JSON=1`. Calling it twice is harmless.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let json = std::env::var(ENV_LOG_JSON)
        .ok()
        .is_some_and(|v| v == "1");

    let registry = tracing_subscriber::registry().with(filter);
    // Already initialised elsewhere (tests, embedding app) → keep theirs.
    let _ = if json {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer().compact()).try_init()
    };
}
