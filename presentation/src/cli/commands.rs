//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for riskscope
#[derive(Parser, Debug)]
#[command(name = "riskscope")]
#[command(author, version, about = "Interactive IT risk assessment across five security domains")]
#[command(long_about = r#"
riskscope walks you through 25 yes/no questions across five IT security
domains, scores each domain as the percentage of healthy controls, and
prints a risk report with prioritised remediation recommendations.

Scores map to risk levels: 90-100 LOW, 70-89 MEDIUM-LOW, 50-69 MEDIUM,
25-49 HIGH, 0-24 CRITICAL. Domains scoring below 70 get recommendations,
lowest score first.

Example:
  riskscope
  riskscope --org "Acme Corp" --export
  riskscope --export-dir ./reports -v
"#)]
pub struct Cli {
    /// Organisation name (skips the interactive prompt)
    #[arg(long, value_name = "NAME")]
    pub org: Option<String>,

    /// Export the report to JSON without asking
    #[arg(short, long)]
    pub export: bool,

    /// Directory for exported reports
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub export_dir: PathBuf,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
