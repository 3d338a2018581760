use campus_client::Transport;
use campus_console::view::StatCard;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::shared::CommandContext;
use crate::commands::shared::limit::limit_rows;
use crate::commands::shared::session::load_page;
use crate::commands::shared::view::loaded_table;
use crate::output::{output, output_view};
use crate::progress::Progress;

#[derive(Serialize)]
struct Summary<'a> {
    dashboard: &'a str,
    header: Option<&'a str>,
    subtitle: Option<&'a str>,
    active_tab: &'a str,
    stats: &'a [StatCard],
}

/// Load every panel, then print the header, stats and the active tab.
pub async fn handle<T: Transport>(ctx: &mut CommandContext<'_, T>) -> anyhow::Result<()> {
    let spinner = Progress::spinner("Loading dashboard...");
    let loaded = load_page(ctx.console).await;
    spinner.finish_clear();
    loaded?;

    let page = ctx.console.page();
    let active = page
        .tabs
        .active()
        .ok_or_else(|| anyhow::anyhow!("the {} dashboard has no active tab", page.dashboard))?;
    let summary = Summary {
        dashboard: page.dashboard.as_str(),
        header: page.header.as_deref(),
        subtitle: page.subtitle.as_deref(),
        active_tab: active.as_str(),
        stats: &page.stats,
    };

    if ctx.flags.format == OutputFormat::Table {
        print_banner(&summary);
    } else {
        output(&summary, ctx.flags.format)?;
    }

    let view = loaded_table(ctx, active)?;
    output_view(&limit_rows(view, ctx.limit), ctx.flags.format)
}

fn print_banner(summary: &Summary<'_>) {
    match (summary.header, summary.subtitle) {
        (Some(header), Some(subtitle)) => println!("{header} · {subtitle}"),
        (Some(header), None) => println!("{header}"),
        _ => {}
    }
    let cards: Vec<String> = summary
        .stats
        .iter()
        .map(|card| format!("{}: {}", card.label, card.value))
        .collect();
    if !cards.is_empty() {
        println!("{}", cards.join("  "));
    }
    println!();
}
