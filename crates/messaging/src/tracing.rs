//! Observability setup for the whole system.
//!
//! Structured logging with the `tracing` crate: actors log start/shutdown,
//! handlers log per-message fields, and clients use
//! `#[instrument(skip(self))]` so request flows show up as hierarchical
//! spans.
//!
//! ```bash
//! RUST_LOG=info cargo run      # compact logs
//! RUST_LOG=debug cargo run     # full payloads
//! ```

/// Initializes the global tracing subscriber.
///
/// Call once at process start. Log level comes from `RUST_LOG`; the compact
/// format shows span hierarchy inline and hides module paths, since actors
/// identify themselves with an `actor` field instead.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
