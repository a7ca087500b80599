use crate::cli::CommonArgs;
use crate::config::Settings;
use crate::git::GitRepo;
use crate::model::Region;
use crate::output::{output_json, output_ndjson, output_report};
use crate::predict::SystemClock;
use crate::report::Analyzer;
use anyhow::Context;
use console::style;

pub fn report(
    common: CommonArgs,
    json: bool,
    ndjson: bool,
    interactive: bool,
    region: Option<Region>,
) -> anyhow::Result<()> {
    let settings = Settings::from_args(&common).context("Invalid configuration")?;

    // Spinners would garble machine-readable output and the TUI.
    let show_progress = !(json || ndjson || interactive);

    GitRepo::ensure_present(
        &settings.repo_path,
        &settings.remote,
        settings.offline,
        show_progress,
    )
    .context("Failed to acquire repository")?;
    let repo = GitRepo::open(&settings.repo_path)
        .context("Failed to open git repository")?
        .with_progress(show_progress);
    let repo_path = repo.path().to_path_buf();

    let mut analyzer = Analyzer::new(repo, settings).context("Failed to initialize analyzer")?;

    if interactive {
        let initial = region.or_else(|| Region::all().next());
        return crate::tui::run(&mut analyzer, initial).context("Interactive view failed");
    }

    let region = region.context("A region code is required, e.g. `cadence report ZH`")?;
    let report = analyzer
        .report(region, &SystemClock)
        .with_context(|| format!("Failed to compute report for {region}"))?;

    if json {
        output_json(&report, &repo_path)?;
    } else if ndjson {
        output_ndjson(&report)?;
    } else {
        output_report(&report)?;
    }

    Ok(())
}

pub fn regions() -> anyhow::Result<()> {
    println!("{}", style("Regions").bold());
    for region in Region::all() {
        println!("  {region}");
    }
    Ok(())
}
