use cucumber::World;

pub mod common;
pub mod steps;

pub use common::world::FormWorld;

/// # curlform Integration Tests
///
/// Drives the real `AppController` with injected key events and a mock
/// render stream, so no TTY is needed. Copies land in an in-memory
/// clipboard that the steps can inspect.
///
/// ```bash
/// cargo test --test integration_tests
/// CURLFORM_LOG_LEVEL=debug cargo test --test integration_tests -- --nocapture
/// ```
#[tokio::main]
async fn main() {
    let log_level = std::env::var("CURLFORM_LOG_LEVEL")
        .unwrap_or_else(|_| "error".to_string())
        .to_lowercase();

    let level = match log_level.as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        _ => tracing::Level::ERROR,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    // One scenario at a time keeps step output readable
    FormWorld::cucumber()
        .max_concurrent_scenarios(1)
        .fail_on_skipped()
        .run_and_exit("features")
        .await;
}
