//! Check pull request commits for sign-offs

use dco::output::{CheckReport, OutputMode};

use super::evaluate_input;
use crate::cli::app::InputArgs;

/// Evaluate the selected commits and report violations
///
/// Exits with status 1 when any commit fails.
pub fn check(input: &InputArgs, mode: OutputMode) -> anyhow::Result<()> {
    let evaluation = evaluate_input(input)?;
    let report =
        CheckReport::new(evaluation.commits_checked, evaluation.violations, evaluation.policy)
            .with_root(evaluation.reaches_root);

    report.render(mode);

    if !report.passed {
        std::process::exit(1);
    }
    Ok(())
}
