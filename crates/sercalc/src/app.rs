//! Application entry point and dispatch.

use anyhow::Result;

use sercalc_cli::completion::generate_completion;
use sercalc_cli::presenter::CliResultPresenter;
use sercalc_core::{CancellationToken, SumError, WaitPolicy};
use sercalc_orchestration::interfaces::ResultPresenter;
use sercalc_orchestration::orchestrator::{analyze_outcome, run_pipeline, PipelineParams};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let presenter = CliResultPresenter::new(config.verbose, config.quiet);
    match run_verification(config) {
        Ok(outcome) => {
            let verdict = analyze_outcome(&outcome.record, outcome.epsilon);
            presenter.present_outcome(&outcome, verdict);
            Ok(())
        }
        Err(err) => {
            presenter.present_error(&err.to_string());
            Err(err.into())
        }
    }
}

fn run_verification(
    config: &AppConfig,
) -> Result<sercalc_orchestration::VerificationOutcome, SumError> {
    if !config.epsilon.is_finite() || config.epsilon <= 0.0 {
        return Err(SumError::Config(format!(
            "epsilon must be positive and finite, got {}",
            config.epsilon
        )));
    }
    if config.x.abs() <= 1.0 {
        tracing::warn!(
            x = config.x,
            "the control value is undefined for |x| <= 1; the comparison will be flagged"
        );
    }

    let policy = match config.wait_policy.as_str() {
        "blocking" => WaitPolicy::Blocking,
        "polling" => WaitPolicy::Polling(config.poll_interval_duration()),
        other => {
            return Err(SumError::Config(format!(
                "unknown wait policy '{other}' (expected 'blocking' or 'polling')"
            )))
        }
    };

    let params = PipelineParams {
        x: config.x,
        epsilon: config.epsilon,
        policy,
        timeout: config.timeout_duration(),
    };

    let cancel = CancellationToken::new();
    ctrlc_handler(cancel.clone());

    run_pipeline(&params, &cancel)
}

fn ctrlc_handler(cancel: CancellationToken) {
    ctrlc::set_handler(move || {
        cancel.cancel();
    })
    .expect("Error setting Ctrl+C handler");
}
