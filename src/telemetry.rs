//! Telemetry helpers for applications embedding `axis-rs`.
//!
//! Tracing setup stays explicit and opt-in: hosts either call
//! `init_default_tracing` or install their own subscriber and filters.
//! The engine only emits events (rescales at `debug`, cache hits and limit
//! aggregation at `trace`); it never installs a subscriber on its own.

/// Filter applied when `RUST_LOG` is unset: the crate's own recompute
/// events at `debug`, everything else at `warn`.
#[cfg(feature = "telemetry")]
const DEFAULT_FILTER: &str = "axis_rs=debug,warn";

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or if a
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER)),
            )
            // Targets distinguish the aggregator from the scalers in one
            // layout pass, so keep them visible.
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
