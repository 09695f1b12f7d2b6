//! vlark CLI - runs the VHDL front end over source files.
//!
//! Each input is classified, tokenized and outlined. Diagnostics go to
//! stderr; the token stream (`--emit tokens`) and the design-unit outline
//! (`--print-ast`) go to stdout.

mod config;
mod error;

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vlark_drv::Session;
use vlark_lex::{SourceBuffer, Token, TokenKind};
use vlark_util::diagnostic::{ColorConfig, Emitter};
use vlark_util::Diagnostic;

use config::Config;
use error::{CliError, Result};

/// vlark - VHDL lexical front end
#[derive(Parser, Debug)]
#[command(name = "vlark")]
#[command(author = "vlark developers")]
#[command(version = concat!("version v", env!("CARGO_PKG_VERSION")))]
#[command(about = "Tokenize and outline VHDL source files", long_about = None)]
struct Cli {
    /// Source files to read
    #[arg(value_name = "FILE")]
    inputs: Vec<PathBuf>,

    /// Source file to read (may be repeated)
    #[arg(short, long = "file", value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Print the design-unit outline of each file
    #[arg(long)]
    print_ast: bool,

    /// Print an intermediate result
    #[arg(long, value_enum)]
    emit: Option<Emit>,

    /// Worker threads for lexing several files
    #[arg(short, long)]
    jobs: Option<u32>,

    /// Enable verbose output
    #[arg(short, long, env = "VLARK_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "VLARK_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "VLARK_NO_COLOR")]
    no_color: bool,
}

/// Intermediate results `--emit` can print.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Emit {
    /// One line per token
    Tokens,
    /// The design-unit outline, as `--print-ast`
    Ast,
}

impl Cli {
    /// All inputs, positional ones first.
    fn sources(&self) -> Vec<PathBuf> {
        self.inputs.iter().chain(&self.files).cloned().collect()
    }

    fn print_ast(&self) -> bool {
        self.print_ast || self.emit == Some(Emit::Ast)
    }
}

/// Counts over every file of one invocation.
#[derive(Debug, Default)]
struct Summary {
    errors: usize,
    warnings: usize,
    failed_files: usize,
}

impl Summary {
    fn add(&mut self, diagnostics: &[Diagnostic]) {
        self.errors += diagnostics.iter().filter(|d| d.level.is_error()).count();
        self.warnings += diagnostics.iter().filter(|d| d.level.is_warning()).count();
    }

    fn succeeded(&self) -> bool {
        self.errors == 0 && self.failed_files == 0
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color).context("Failed to initialize logging")?;

    let config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;

    let summary = execute(&cli, &config)?;
    Ok(if summary.succeeded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Initialize the logging system.
///
/// `RUST_LOG` wins over `--verbose`. Logs go to stderr so that stdout only
/// carries requested output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| CliError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

fn check_inputs(paths: &[PathBuf]) -> Result<()> {
    if paths.is_empty() {
        return Err(CliError::Validation("no input files".to_string()));
    }
    if let Some(dir) = paths.iter().find(|p| p.is_dir()) {
        return Err(CliError::FileOperation(format!(
            "`{}` is a directory",
            dir.display()
        )));
    }
    Ok(())
}

/// Run the front end over every input and print what was asked for.
fn execute(cli: &Cli, config: &Config) -> anyhow::Result<Summary> {
    let paths = cli.sources();
    check_inputs(&paths)?;

    let session = Session::new(config.session_config(cli.jobs));
    let color = if cli.no_color || !config.output.color {
        ColorConfig::Never
    } else {
        ColorConfig::Auto
    };
    let emitter = Emitter::new(
        color.use_color(io::stderr().is_terminal()),
        config.output.show_snippets,
    );
    debug!(files = paths.len(), jobs = session.config().jobs, "starting");

    let mut stdout = io::stdout().lock();
    let mut summary = Summary::default();

    if cli.emit == Some(Emit::Tokens) {
        for (path, report) in session.lex_many(&paths) {
            match report {
                Ok(lexed) => {
                    let diagnostics = vlark_util::diagnostic::reportable(&lexed.diagnostics);
                    report_diagnostics(&emitter, &path, &diagnostics, &lexed.buffer)?;
                    summary.add(&diagnostics);
                    write_tokens(&mut stdout, &path, &lexed.tokens, &lexed.buffer, paths.len() > 1)
                        .context("Failed to write tokens")?;
                },
                Err(err) => report_failure(&path, &err.to_string(), &mut summary),
            }
        }
    } else {
        for path in &paths {
            match session.parse_file(path) {
                Ok(output) => {
                    let diagnostics = output.reportable();
                    report_diagnostics(&emitter, path, &diagnostics, &output.buffer)?;
                    summary.add(&diagnostics);
                    if cli.print_ast() {
                        if paths.len() > 1 {
                            writeln!(stdout, "==> {} <==", path.display())?;
                        }
                        writeln!(stdout, "{}", output.ast).context("Failed to write outline")?;
                    }
                },
                Err(err) => report_failure(path, &err.to_string(), &mut summary),
            }
        }
    }

    if summary.errors > 0 || summary.warnings > 0 {
        eprintln!(
            "{} error(s), {} warning(s)",
            summary.errors, summary.warnings
        );
    }
    Ok(summary)
}

fn report_diagnostics(
    emitter: &Emitter,
    path: &Path,
    diagnostics: &[Diagnostic],
    buffer: &SourceBuffer,
) -> anyhow::Result<()> {
    let file = path.display().to_string();
    let mut stderr = io::stderr().lock();
    for diag in diagnostics {
        let text = emitter
            .render(&file, diag, buffer)
            .with_context(|| format!("Failed to render diagnostic for {}", file))?;
        stderr.write_all(text.as_bytes())?;
    }
    Ok(())
}

fn report_failure(path: &Path, message: &str, summary: &mut Summary) {
    eprintln!("{}: error: {}", path.display(), message);
    summary.failed_files += 1;
}

/// One token per line: position, kind, spelling.
fn write_tokens(
    out: &mut impl Write,
    path: &Path,
    tokens: &[Token],
    buffer: &SourceBuffer,
    with_header: bool,
) -> io::Result<()> {
    if with_header {
        writeln!(out, "==> {} <==", path.display())?;
    }
    for token in tokens {
        if token.kind == TokenKind::Eof {
            writeln!(out, "{} {:?}", token.position, token.kind)?;
        } else {
            writeln!(
                out,
                "{} {:?} {}",
                token.position,
                token.kind,
                token.text(buffer)
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vlark_lex::LexerConfig;
    use vlark_util::Handler;

    #[test]
    fn test_cli_parse_positional_and_file() {
        let cli = Cli::parse_from(["vlark", "a.vhd", "-f", "b.vhd", "--file", "c.vhd"]);
        assert_eq!(
            cli.sources(),
            [
                PathBuf::from("a.vhd"),
                PathBuf::from("b.vhd"),
                PathBuf::from("c.vhd")
            ]
        );
    }

    #[test]
    fn test_cli_parse_print_ast() {
        let cli = Cli::parse_from(["vlark", "--print-ast", "a.vhd"]);
        assert!(cli.print_ast());
        let cli = Cli::parse_from(["vlark", "--emit", "ast", "a.vhd"]);
        assert!(cli.print_ast());
    }

    #[test]
    fn test_cli_parse_emit_tokens() {
        let cli = Cli::parse_from(["vlark", "--emit", "tokens", "a.vhd"]);
        assert_eq!(cli.emit, Some(Emit::Tokens));
        assert!(!cli.print_ast());
    }

    #[test]
    fn test_cli_rejects_unknown_emit() {
        assert!(Cli::try_parse_from(["vlark", "--emit", "llvm-ir", "a.vhd"]).is_err());
    }

    #[test]
    fn test_cli_parse_global_flags() {
        let cli = Cli::parse_from([
            "vlark",
            "--verbose",
            "--no-color",
            "--config",
            "/path/to/vlark.toml",
            "-j",
            "3",
            "a.vhd",
        ]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/vlark.toml")));
        assert_eq!(cli.jobs, Some(3));
    }

    #[test]
    fn test_check_inputs() {
        assert!(matches!(check_inputs(&[]), Err(CliError::Validation(_))));
        let dir = std::env::temp_dir();
        assert!(matches!(check_inputs(&[dir]), Err(CliError::FileOperation(_))));
    }

    #[test]
    fn test_write_tokens() {
        let handler = Handler::new();
        let buffer =
            SourceBuffer::from_source("x <= '1';", &LexerConfig::default(), &handler).unwrap();
        let tokens = vlark_lex::tokenize(&buffer, &handler).unwrap();

        let mut out = Vec::new();
        write_tokens(&mut out, Path::new("t.vhd"), &tokens, &buffer, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "(1,1) Identifier x\n(1,3) LessEqual <=\n(1,6) Character '1'\n(1,9) Semicolon ;\n(1,10) Eof\n"
        );
    }
}
