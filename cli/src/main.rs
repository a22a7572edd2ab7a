//! CLI entrypoint for riskscope
//!
//! Wires the layers together, races the whole run against Ctrl-C, and
//! handles the optional JSON export after the report is shown.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use riskscope_application::{
    ExportReportUseCase, PromptError, QuestionnairePrompt, RunAssessmentUseCase,
};
use riskscope_domain::parse_yes_no;
use riskscope_infrastructure::JsonFileExporter;
use riskscope_presentation::{Cli, ConsoleReport, InteractivePrompt};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    info!("Starting riskscope");

    // The whole run races Ctrl-C; an interrupt during any prompt aborts
    // without partial output.
    tokio::select! {
        result = run(cli) => {
            if let Err(e) = result {
                eprintln!();
                eprintln!("{}", format!("Assessment aborted: {}", e).red());
                std::process::exit(1);
            }
            Ok(())
        }
        _ = tokio::signal::ctrl_c() => {
            println!();
            println!();
            println!("{}", "Assessment cancelled. Goodbye.".cyan());
            Ok(())
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    println!("{}", ConsoleReport::banner());

    let prompt = Arc::new(InteractivePrompt::new());

    let assessment = RunAssessmentUseCase::new(Arc::clone(&prompt))
        .with_organisation(cli.org.clone())
        .execute()
        .await?;

    println!();
    print!("{}", ConsoleReport::format(&assessment));

    if cli.export || confirm_export(prompt.as_ref()).await? {
        let exporter = Arc::new(JsonFileExporter::new(cli.export_dir));
        let use_case = ExportReportUseCase::new(exporter);

        // The on-screen report is already delivered; a failed write is
        // reported, not fatal.
        match use_case.execute(&assessment).await {
            Ok(path) => {
                println!();
                println!(
                    "{} Report saved to: {}",
                    "✓".green().bold(),
                    path.display().to_string().cyan()
                );
            }
            Err(e) => {
                println!();
                println!("{} {}", "✗".red().bold(), e.to_string().red());
            }
        }
    }

    println!();
    println!("{}", "Assessment complete. Stay secure.".cyan());
    Ok(())
}

/// One validated yes/no prompt for the JSON export opt-in.
async fn confirm_export(prompt: &dyn QuestionnairePrompt) -> Result<bool, PromptError> {
    loop {
        let input = prompt.ask_text("Export report to JSON? (y/n):").await?;
        match parse_yes_no(&input) {
            Some(answer) => return Ok(answer),
            None => println!(
                "  {} Please enter 'y' for Yes or 'n' for No.",
                "!".yellow().bold()
            ),
        }
    }
}
