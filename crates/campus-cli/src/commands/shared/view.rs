use anyhow::bail;
use campus_client::Transport;
use campus_console::render;
use campus_console::view::TableView;
use campus_core::enums::Tab;

use super::CommandContext;
use super::limit::limit_rows;
use crate::output::output_view;

/// The table behind `tab`. A table still showing its loading placeholder
/// means the load failed (the loader only logs).
pub fn loaded_table<'a, T: Transport>(ctx: &'a CommandContext<'_, T>, tab: Tab) -> anyhow::Result<&'a TableView> {
    let Some(view) = ctx.console.page().table(tab) else {
        bail!("the {} dashboard has no {tab} table", ctx.console.dashboard());
    };
    if *view == TableView::loading(render::columns(tab)) {
        bail!("failed to load {tab}; rerun with --verbose for details");
    }
    Ok(view)
}

/// After a successful mutation: the change went through, so a failed
/// refresh is only reported on stderr.
pub fn print_refreshed<T: Transport>(ctx: &CommandContext<'_, T>, tab: Tab) -> anyhow::Result<()> {
    match loaded_table(ctx, tab) {
        Ok(view) => output_view(&limit_rows(view, ctx.limit), ctx.flags.format),
        Err(error) => {
            tracing::warn!(%error, "post-mutation refresh failed");
            if !ctx.flags.quiet {
                eprintln!("could not refresh {tab}: {error}");
            }
            Ok(())
        }
    }
}

/// Print the table behind `tab`, capped at the row limit.
pub fn print_tab<T: Transport>(ctx: &CommandContext<'_, T>, tab: Tab) -> anyhow::Result<()> {
    let view = loaded_table(ctx, tab)?;
    output_view(&limit_rows(view, ctx.limit), ctx.flags.format)
}
