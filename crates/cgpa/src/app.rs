//! Application entry point and dispatch.

use anyhow::{Context, Result};
use tracing::info;

use cgpa_cli::interactive::Session;
use cgpa_cli::messages::about_text;
use cgpa_cli::output::OutputFormat;
use cgpa_cli::presenter::{CLIResultPresenter, JsonResultPresenter};
use cgpa_cli::ui::is_color_disabled;
use cgpa_orchestration::interfaces::ResultPresenter;
use cgpa_orchestration::orchestrator::calculate_and_present;
use cgpa_orchestration::sources::collect_entries;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        cgpa_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    if config.about {
        print!("{}", about_text());
        return Ok(());
    }

    if config.interactive {
        return run_interactive(config);
    }

    run_cli(config)
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let entries = collect_entries(config.file.as_deref(), &config.courses)?;
    info!(entries = entries.len(), "collected course entries");

    let opts = config.options();
    let presenter: Box<dyn ResultPresenter> = match config.format {
        OutputFormat::Text => Box::new(CLIResultPresenter::new(
            opts,
            config.verbose,
            config.quiet,
        )),
        OutputFormat::Json => Box::new(JsonResultPresenter::new(opts)),
    };

    calculate_and_present(&entries, presenter.as_ref(), config.verbose)?;
    Ok(())
}

fn run_interactive(config: &AppConfig) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let color = !is_color_disabled() && console::user_attended();

    let mut session = Session::new(stdin.lock(), stdout.lock(), config.options(), color);
    session.run().context("interactive session failed")?;
    info!(courses = session.roster().len(), "interactive session ended");
    Ok(())
}
