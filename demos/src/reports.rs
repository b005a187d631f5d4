use core::fmt::Display;
use std::process::ExitCode;

use tracing_forest::ForestLayer;
use tracing_forest::util::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Install a forest-shaped tracing subscriber, filtered by `RUST_LOG` and defaulting to `INFO`.
pub fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    Registry::default()
        .with(env_filter)
        .with(ForestLayer::default())
        .init();
}

/// Print whether the witness satisfied the circuit and turn the verdict into an exit code.
///
/// When `expect_failure` is set the verdict is inverted, so a deliberately tampered witness that
/// gets rejected counts as a success.
pub fn report_result<E: Display>(result: Result<(), E>, expect_failure: bool) -> ExitCode {
    match (result, expect_failure) {
        (Ok(()), false) => {
            println!("Witness satisfies the circuit");
            ExitCode::SUCCESS
        }
        (Err(e), true) => {
            println!("Witness rejected as expected: {e}");
            ExitCode::SUCCESS
        }
        (Ok(()), true) => {
            println!("Tampered witness was accepted");
            ExitCode::FAILURE
        }
        (Err(e), false) => {
            println!("Witness rejected: {e}");
            ExitCode::FAILURE
        }
    }
}
