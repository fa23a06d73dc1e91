//! Mathmask - Replace LaTeX math equations with a placeholder.
//!
//! This binary reads LaTeX documents from files or stdin, replaces every
//! recognized equation span, and writes the result to stdout or a file.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, LevelFilter};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use mathmask_config::Config;
use mathmask_core::{MathmaskError, ReplaceStats, Replacer, Result};

fn main() {
    let cli = <Cli as ClapParser>::parse();

    if cli.show_paths {
        cli::show_paths();
        return;
    }

    setup_logging(&cli.log_level);
    info!("Mathmask v{}", env!("CARGO_PKG_VERSION"));

    if cli.init_config {
        match Config::ensure_config_file() {
            Ok(path) => println!("{}", path.display()),
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    if let Err(e) = run(&cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let replacer = create_replacer(cli, &config);
    debug!(
        "Replacing {:?} with {:?}",
        replacer.kinds(),
        replacer.placeholder()
    );

    // Inputs are read in full before the output is opened, so `-o` may
    // name one of the inputs.
    let documents = read_inputs(cli)?;

    let mut sink: Box<dyn Write> = match cli.output {
        Some(ref path) => {
            info!("Writing to {}", path.display());
            Box::new(BufWriter::new(File::create(path)?))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let mut totals = ReplaceStats::default();
    for (label, text) in &documents {
        let stats = process(&replacer, text, &mut sink)?;
        if cli.summary {
            eprintln!("{}: {}", label, stats);
        }
        totals.absorb(&stats);
    }
    if cli.summary && documents.len() > 1 {
        eprintln!("total: {}", totals);
    }

    sink.flush()?;
    Ok(())
}

/// Load configuration with optional overrides.
///
/// A broken platform config falls back to defaults; a broken `--config`
/// override is an error.
fn load_config(cli: &Cli) -> Result<Config> {
    Config::load_with_override(cli.config.as_deref())
}

/// Build the replacer from config, then apply command-line overrides.
fn create_replacer(cli: &Cli, config: &Config) -> Replacer {
    let placeholder = cli
        .replacement
        .clone()
        .unwrap_or_else(|| config.replace.placeholder().to_string());

    let kinds = if cli.only.is_empty() {
        config.rules.enabled()
    } else {
        cli.only.clone()
    };

    Replacer::new(placeholder).with_kinds(kinds)
}

/// Read every input, labelled for the summary.
fn read_inputs(cli: &Cli) -> Result<Vec<(String, String)>> {
    if cli.should_read_stdin() {
        info!("Reading from stdin");
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(vec![("<stdin>".to_string(), text)]);
    }

    cli.files
        .iter()
        .map(|path| -> Result<(String, String)> {
            info!("Reading file: {}", path.display());
            Ok((path.display().to_string(), read_document(path)?))
        })
        .collect()
}

/// Read a document as UTF-8.
fn read_document(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| MathmaskError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|source| MathmaskError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace equations in one document and write the result.
fn process<W: Write + ?Sized>(
    replacer: &Replacer,
    text: &str,
    out: &mut W,
) -> Result<ReplaceStats> {
    let (replaced, stats) = replacer.replace_with_stats(text);
    debug!("Replaced {} span(s): {}", stats.total(), stats);
    out.write_all(replaced.as_bytes())?;
    Ok(stats)
}
