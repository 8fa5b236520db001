// File: crates/chart-core/src/telemetry.rs
// Summary: Opt-in tracing setup for the demo binaries; the library itself only emits events.

/// Route the engine's `tracing` events (redraws, hover changes, animation
/// completion) to stderr. `RUST_LOG` picks the level, `info` otherwise.
///
/// `false` means nothing was installed: either the crate was built without
/// `telemetry` or the binary already has a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
