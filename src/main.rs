mod cli;

use std::io;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use paper_review::{
    config::Config,
    llm,
    printer::{summary_markdown, MarkdownPrinter, TextPrinter},
    report, Reviewer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paper_review=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = cli::Cli::parse();

    // Load config, then let CLI flags win
    let mut cfg = Config::load();
    args.apply(&mut cfg);

    let papers_dir = cfg.papers_dir();
    let report_path = cfg.report_path();

    let clients = llm::clients_from_config(&cfg)?;
    let reviewer = Reviewer::new(clients).keep_going(args.keep_going);

    let records = reviewer
        .run(&papers_dir, &mut io::stdout())
        .await
        .with_context(|| format!("review of '{}' aborted", papers_dir.display()))?;

    // Written only after the whole loop succeeded.
    report::write_report(&records, &report_path)?;

    TextPrinter { color: Some("green") }.print(&format!(
        "Analisi completata! File creato: {}",
        report_path.display()
    ));

    if !args.no_summary && io::stdout().is_terminal() {
        MarkdownPrinter::default().print(&summary_markdown(&records));
    }
    Ok(())
}
