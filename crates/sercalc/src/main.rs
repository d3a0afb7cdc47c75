//! SerCalc-rs — concurrent series-sum verifier.

use sercalc_lib::{app, config, errors};

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    // Parse CLI args and run; errors were already presented by the app.
    let config = config::AppConfig::parse();
    if let Err(err) = app::run(&config) {
        std::process::exit(errors::exit_code_for(&err));
    }
}
