//! Target admin commands.

use sr_app::usecases::targets::{ListParams, SaveAction, TargetForm};
use sr_app::{Completed, SubmitOutcome};
use sr_core::{OptionOverrides, TargetId};
use tracing::{info_span, Instrument};

use super::error::{CommandError, CommandResult};
use crate::bootstrap::AppRuntime;
use crate::render::render_target_table;

/// Editor fields supplied on the command line; `None` keeps the loaded value.
#[derive(Debug, Clone, Default)]
pub struct TargetInput {
    pub selector: Option<String>,
    pub label: Option<String>,
    pub comment: Option<String>,
    pub enabled: Option<bool>,
    /// JSON object of option overrides, e.g. `{"opacity":0.5}`.
    pub options: Option<String>,
    pub return_to_list: bool,
}

impl TargetInput {
    fn apply(self, form: &mut TargetForm) -> Result<(), CommandError> {
        if let Some(selector) = self.selector {
            form.selector = selector;
        }
        if let Some(label) = self.label {
            form.label = label;
        }
        if let Some(comment) = self.comment {
            form.comment = comment;
        }
        if let Some(enabled) = self.enabled {
            form.enabled = enabled;
        }
        if let Some(raw) = self.options {
            let overrides: OptionOverrides = serde_json::from_str(&raw)
                .map_err(|e| CommandError::invalid("options", e.to_string()))?;
            form.options = overrides.resolve(&form.options);
        }
        Ok(())
    }

    fn action(&self) -> SaveAction {
        if self.return_to_list {
            SaveAction::SaveAndReturnToList
        } else {
            SaveAction::Save
        }
    }
}

fn saved(outcome: SubmitOutcome) -> CommandResult {
    match outcome {
        SubmitOutcome::Saved {
            id,
            notice,
            redirect,
        } => Ok(format!("{}\nid: {id}\nnext: {redirect}\n", notice.message)),
        SubmitOutcome::Invalid(errors) => Err(CommandError::Validation(errors)),
    }
}

fn completed(done: Completed) -> String {
    format!("{}\nnext: {}\n", done.notice.message, done.redirect)
}

pub async fn list(runtime: &AppRuntime, params: ListParams) -> CommandResult {
    let view = runtime
        .usecases()
        .list_targets()
        .execute(params)
        .instrument(info_span!("command.targets.list"))
        .await?;
    Ok(render_target_table(&view))
}

pub async fn show(runtime: &AppRuntime, id: TargetId) -> CommandResult {
    let form = runtime.usecases().load_target_form().execute(id).await?;
    serde_json::to_string_pretty(&form)
        .map(|json| json + "\n")
        .map_err(|e| CommandError::Other(e.into()))
}

pub async fn add(runtime: &AppRuntime, input: TargetInput) -> CommandResult {
    save(runtime, TargetId::NEW, input).await
}

pub async fn edit(runtime: &AppRuntime, id: TargetId, input: TargetInput) -> CommandResult {
    if id.is_new() {
        return Err(CommandError::NotFound(format!("Target {id} not found.")));
    }
    save(runtime, id, input).await
}

async fn save(runtime: &AppRuntime, id: TargetId, input: TargetInput) -> CommandResult {
    let uc = runtime.usecases();
    let mut form = uc.load_target_form().execute(id).await?;
    let action = input.action();
    input.apply(&mut form)?;

    let outcome = uc
        .submit_target_form()
        .execute(form, action)
        .instrument(info_span!("command.targets.save", target_id = %id))
        .await?;
    saved(outcome)
}

/// Without `confirmed` only the confirmation question is printed.
pub async fn delete(runtime: &AppRuntime, id: TargetId, confirmed: bool) -> CommandResult {
    let uc = runtime.usecases().delete_target();
    let confirmation = uc.prepare(id).await?;
    if !confirmed {
        return Ok(format!(
            "{}\nThis action cannot be undone. Re-run with --yes to {}.\n",
            confirmation.question,
            confirmation.confirm_text.to_lowercase()
        ));
    }

    let done = uc.confirm(id).await?;
    Ok(completed(done))
}

pub async fn duplicate(runtime: &AppRuntime, id: TargetId, selector: &str) -> CommandResult {
    let uc = runtime.usecases().duplicate_target();
    uc.prepare(id).await?;
    saved(uc.submit(id, selector).await?)
}
