//! Opt-in tracing setup for hosts embedding `art-timeline`.
//!
//! The engine only emits `tracing` events. Hosts that already own a
//! subscriber should ignore this module.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_TIMELINE_FILTER: &str = "info,art_timeline=debug";

/// Installs a compact fmt subscriber using [`DEFAULT_TIMELINE_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback_filter(DEFAULT_TIMELINE_FILTER)
}

/// Installs a compact fmt subscriber, preferring `RUST_LOG` over `fallback`.
#[must_use]
pub fn init_tracing_with_fallback_filter(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}
