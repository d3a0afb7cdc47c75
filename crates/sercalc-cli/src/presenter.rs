//! CLI result presenter.

use sercalc_orchestration::interfaces::{ResultPresenter, Verdict, VerificationOutcome};

use crate::output::{format_difference, format_duration, format_value};

/// Presents verification results on stdout.
pub struct CliResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CliResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

impl ResultPresenter for CliResultPresenter {
    fn present_outcome(&self, outcome: &VerificationOutcome, verdict: Verdict) {
        if self.quiet {
            println!("{}", format_value(outcome.record.series_sum));
            return;
        }

        println!("{:=<50}", "");
        println!("Series sum for x = {}", outcome.x);
        println!("Threshold ε = {:e}", outcome.epsilon);
        println!("{:-<50}", "");
        println!("Series sum       S = {}", format_value(outcome.record.series_sum));
        println!(
            "Control value    y = {}",
            format_value(outcome.record.control_value)
        );
        println!(
            "Difference |S - y| = {}",
            format_difference(outcome.record.difference)
        );

        if !outcome.record.converged {
            println!(
                "Series aborted after {} terms; the sum is partial",
                outcome.record.terms
            );
        }

        match verdict {
            Verdict::Achieved => println!("Precision achieved: |S - y| < ε"),
            Verdict::NotAchieved => println!("Precision not achieved: |S - y| >= ε"),
            Verdict::Undefined => {
                println!("Control value undefined for x <= 1; comparison not possible");
            }
        }

        if self.verbose {
            println!("Terms summed: {}", outcome.record.terms);
            println!("Duration: {}", format_duration(outcome.duration));
        }
        println!("{:=<50}", "");
    }

    fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}
