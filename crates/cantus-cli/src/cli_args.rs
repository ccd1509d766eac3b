use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cantus", version, about = "Lint first-species counterpoint")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log progress to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log per-rule detail to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    /// Rule catalog to use instead of .cantus/rules.json
    #[arg(long, global = true, env = "CANTUS_RULES")]
    pub rules: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Lint an excerpt file against the rule catalog
    Lint {
        /// Excerpt JSON file
        excerpt: PathBuf,
        /// Override the excerpt's key (C, G, D, A, E, F, Bb)
        #[arg(long)]
        key: Option<String>,
        /// Treat the cantus firmus as the upper voice
        #[arg(long)]
        cantus_upper: bool,
        /// Exit non-zero on warnings too
        #[arg(long)]
        strict: bool,
        /// Run only the named rule (repeatable)
        #[arg(long = "only", value_name = "RULE_ID")]
        only: Vec<String>,
    },

    /// List the rule catalog in evaluation order
    Rules,

    /// Show what a rule checks and how it is configured
    Explain {
        /// Rule id (e.g., noParallelPerfects)
        rule: String,
    },

    /// Write the built-in rule catalog to .cantus/rules.json
    Init {
        /// Overwrite an existing catalog
        #[arg(long)]
        force: bool,
    },

    /// Get or set rule catalog values
    Config {
        /// Rule id or <ruleId>.<field> (enabled, severity, description)
        key: Option<String>,
        /// New value to set
        value: Option<String>,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, elvish, powershell)
        shell: String,
    },
}

#[cfg(test)]
#[path = "cli_args_tests.rs"]
mod tests;
