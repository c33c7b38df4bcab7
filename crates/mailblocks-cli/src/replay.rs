use anyhow::{Result, bail};
use mailblocks_core::{Action, BuilderConfig, BuilderState, EmailValue, Outcome, Template};

pub struct ReplayReport {
    pub state: BuilderState,
    pub applied: usize,
    pub unchanged: usize,
    pub rejected: usize,
}

impl ReplayReport {
    pub fn value(&self) -> EmailValue {
        EmailValue::from_blocks(self.state.blocks())
    }
}

pub fn parse_script(source: &str) -> Result<Vec<Action>> {
    Ok(serde_json::from_str(source)?)
}

/// Applies `actions` in order. Rejected actions are logged and skipped
/// unless `strict` is set.
pub fn run(
    template: Template,
    config: BuilderConfig,
    actions: Vec<Action>,
    strict: bool,
) -> Result<ReplayReport> {
    let mut report = ReplayReport {
        state: BuilderState::from_template(template, config),
        applied: 0,
        unchanged: 0,
        rejected: 0,
    };

    for (step, action) in actions.into_iter().enumerate() {
        let name = action.name();
        match report.state.apply(action) {
            Ok(outcome) if outcome.is_noop() => {
                report.unchanged += 1;
                tracing::info!(step, action = name, ?outcome, "nothing to do");
            }
            Ok(Outcome::Selected) => {}
            Ok(_) => report.applied += 1,
            Err(err) => {
                if strict {
                    bail!("step {step} ({name}) rejected: {err}");
                }
                report.rejected += 1;
                tracing::warn!(step, action = name, %err, "action rejected");
            }
        }
    }
    Ok(report)
}
