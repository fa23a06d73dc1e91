//! Command-line interface for mathmask.

use clap::Parser;
use mathmask_core::EquationKind;
use std::path::PathBuf;

/// Mathmask - Replace LaTeX math equations with a placeholder.
///
/// Inline `$...$` spans, `equation`/`equation*` blocks and
/// `align`/`align*` blocks are replaced, in that order.
#[derive(Parser, Debug)]
#[command(
    name = "mathmask",
    author = "Mathmask Contributors",
    version,
    about = "Replace LaTeX math equations with a placeholder",
    after_help = "Examples:\n  \
                  mathmask paper.tex\n  \
                  cat paper.tex | mathmask -r '<MATH>'\n  \
                  mathmask --only inline -o plain.tex paper.tex\n  \
                  mathmask -c custom.toml paper.tex"
)]
pub struct Cli {
    /// LaTeX files to process (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Text substituted for each equation (default: [EQUATION])
    #[arg(short = 'r', long = "replacement", value_name = "TEXT")]
    pub replacement: Option<String>,

    /// Write the result to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Only replace these kinds (inline, equation, align); repeatable
    #[arg(long = "only", value_name = "KIND")]
    pub only: Vec<EquationKind>,

    /// Print how many equations of each kind were replaced to stderr
    #[arg(long = "summary")]
    pub summary: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Write the default config file if it does not exist, then exit
    #[arg(long = "init-config")]
    pub init_config: bool,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }
}

/// Show paths information.
pub fn show_paths() {
    use mathmask_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}
