//! Print the legacy commit status

use dco::output::{OutputMode, render_status};
use dco::status::CommitStatus;

use super::evaluate_input;
use crate::cli::app::InputArgs;

/// Evaluate the selected commits and print the resulting commit status
pub fn status(input: &InputArgs, mode: OutputMode) -> anyhow::Result<()> {
    let evaluation = evaluate_input(input)?;
    render_status(&CommitStatus::from_violations(&evaluation.violations), mode);
    Ok(())
}
