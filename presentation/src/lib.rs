//! Presentation layer for riskscope
//!
//! The clap CLI definition, the interactive stdin prompter, and the console
//! report formatter.

pub mod cli;
pub mod prompt;
pub mod report;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use prompt::interactive::InteractivePrompt;
pub use report::console::ConsoleReport;
