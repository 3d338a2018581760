use anyhow::bail;
use campus_client::Transport;
use campus_console::{FormKind, Outcome};

use super::CommandContext;
use super::confirm::StdinConfirm;
use super::view::print_refreshed;
use crate::output::{output, print_toasts};

/// Print pending toasts for a successful outcome, or turn a failed one
/// into the command's error.
fn settle<T: Transport>(ctx: &mut CommandContext<'_, T>, outcome: Outcome) -> anyhow::Result<bool> {
    let toasts = ctx.console.page_mut().drain_toasts();
    match outcome {
        Outcome::Done(_) => {
            print_toasts(&toasts);
            Ok(true)
        }
        Outcome::Cancelled => {
            if !ctx.flags.quiet {
                eprintln!("Cancelled.");
            }
            Ok(false)
        }
        Outcome::Rejected(message) | Outcome::Failed(message) => bail!(message),
    }
}

fn fill<T: Transport>(ctx: &mut CommandContext<'_, T>, pairs: &[(&'static str, String)]) -> anyhow::Result<()> {
    for (name, value) in pairs {
        ctx.console.set_field(name, value)?;
    }
    Ok(())
}

async fn submit<T: Transport>(ctx: &mut CommandContext<'_, T>, kind: FormKind) -> anyhow::Result<()> {
    let outcome = ctx.console.submit().await?;
    if settle(ctx, outcome)? {
        print_refreshed(ctx, kind.tab())?;
    }
    Ok(())
}

/// Open the add form, fill it from flags and submit.
pub async fn create<T: Transport>(
    ctx: &mut CommandContext<'_, T>,
    kind: FormKind,
    pairs: &[(&'static str, String)],
) -> anyhow::Result<()> {
    ctx.console.open_add(kind)?;
    fill(ctx, pairs)?;
    submit(ctx, kind).await
}

/// Open the edit form for `id`, overwrite the given fields and submit.
pub async fn update<T: Transport>(
    ctx: &mut CommandContext<'_, T>,
    kind: FormKind,
    id: i64,
    pairs: &[(&'static str, String)],
) -> anyhow::Result<()> {
    if pairs.is_empty() {
        bail!("nothing to update: pass at least one field flag");
    }
    let outcome = ctx.console.open_edit(kind, id).await?;
    settle(ctx, outcome)?;
    fill(ctx, pairs)?;
    submit(ctx, kind).await
}

/// Print the edit form for `id` as it would be populated.
pub async fn show<T: Transport>(ctx: &mut CommandContext<'_, T>, kind: FormKind, id: i64) -> anyhow::Result<()> {
    let outcome = ctx.console.open_edit(kind, id).await?;
    settle(ctx, outcome)?;
    let fields = ctx
        .console
        .page()
        .form
        .as_ref()
        .map(|form| form.fields.clone())
        .unwrap_or_default();
    ctx.console.close_form();
    output(&fields, ctx.flags.format)
}

/// Confirm, delete, and print the refreshed table.
pub async fn delete<T: Transport>(ctx: &mut CommandContext<'_, T>, kind: FormKind, id: i64) -> anyhow::Result<()> {
    let confirm = StdinConfirm::new(ctx.flags.yes);
    let outcome = ctx.console.delete(kind, id, &confirm).await?;
    if settle(ctx, outcome)? {
        print_refreshed(ctx, kind.tab())?;
    }
    Ok(())
}
