//! CLI argument definitions for the survey validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "survey-validate",
    version,
    about = "Validate airport ground-access survey exports",
    long_about = "Validate airport ground-access survey exports.\n\n\
                  Each record is classified into a respondent variant, coerced against\n\
                  the variant's schema, and checked against the skip-logic rule table.\n\
                  The annotated output carries derived fields, code labels, and the\n\
                  validation error list, severity, and count."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a survey export and write the annotated records.
    Validate(ValidateArgs),

    /// Summarize the skip-logic rule table.
    Rules(RulesArgs),

    /// List respondent variants and their field groups.
    Variants,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Survey export (CSV with a header row).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Skip-logic rule table (default: $SURVEY_STANDARDS_DIR/skip_logic_rules.csv).
    #[arg(long = "rules", value_name = "PATH")]
    pub rules: Option<PathBuf>,

    /// Annotated output file (default: <INPUT stem>_validated.csv).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Leave records with Critical severity out of the output file.
    #[arg(long = "exclude-critical")]
    pub exclude_critical: bool,

    /// Validate and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct RulesArgs {
    /// Skip-logic rule table (default: $SURVEY_STANDARDS_DIR/skip_logic_rules.csv).
    #[arg(long = "rules", value_name = "PATH")]
    pub rules: Option<PathBuf>,

    /// Report rules that can never apply as written.
    #[arg(long = "check")]
    pub check: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
