//! vlark-drv - Front-end driver
//!
//! Runs the Line Classifier, the Tokenizer and the outline parser over one
//! source and hands back everything they produced. A single [`Handler`]
//! is threaded through all three phases of a run, so the caller receives
//! one ordered list of diagnostics.
//!
//! # Example Usage
//!
//! ```
//! use vlark_par::DesignUnitKind;
//!
//! let output = vlark_drv::parse_code("entity e is\nend;\n").unwrap();
//! assert!(!output.has_errors());
//! assert_eq!(output.ast.design_units[0].kind, DesignUnitKind::Entity);
//! ```
//!
//! Several independent files can be lexed at once with
//! [`Session::lex_many`], which spreads them over a `rayon` pool.

#![warn(missing_docs)]

pub mod error;

pub use error::{FrontendError, Result};

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::{debug, warn};
use vlark_lex::{tokenize, LexerConfig, LoadResult, SourceBuffer, Token};
use vlark_par::{Ast, Parser};
use vlark_util::diagnostic::reportable;
use vlark_util::{Diagnostic, Handler};

/// Driver settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Settings handed to the Line Classifier and the Tokenizer
    pub lexer: LexerConfig,

    /// Worker threads for [`Session::lex_many`]; zero lets `rayon` decide
    pub jobs: usize,
}

/// Everything one front-end run produced
#[derive(Debug)]
pub struct FrontendOutput {
    /// Design-unit outline
    pub ast: Ast,

    /// Token stream, ending in end of file
    pub tokens: Vec<Token>,

    /// Classified lines the tokens point into
    pub buffer: SourceBuffer,

    /// Every diagnostic in emission order
    pub diagnostics: Vec<Diagnostic>,
}

impl FrontendOutput {
    /// Diagnostics as they should be shown to a user
    pub fn reportable(&self) -> Vec<Diagnostic> {
        reportable(&self.diagnostics)
    }

    /// Number of reportable errors
    pub fn error_count(&self) -> usize {
        count_errors(&self.diagnostics)
    }

    /// Returns true if the run completed with at least one reportable error
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Spelling of one of this run's tokens
    pub fn text(&self, token: &Token) -> &str {
        token.text(&self.buffer)
    }
}

/// Result of lexing one file in [`Session::lex_many`]
#[derive(Debug)]
pub struct LexedFile {
    /// Classified lines
    pub buffer: SourceBuffer,

    /// Token stream, ending in end of file
    pub tokens: Vec<Token>,

    /// Every diagnostic in emission order
    pub diagnostics: Vec<Diagnostic>,
}

impl LexedFile {
    /// Number of reportable errors
    pub fn error_count(&self) -> usize {
        count_errors(&self.diagnostics)
    }
}

/// Outcome for one path in [`Session::lex_many`]
pub type FileReport = Result<LexedFile>;

fn count_errors(diagnostics: &[Diagnostic]) -> usize {
    reportable(diagnostics)
        .iter()
        .filter(|d| d.level.is_error())
        .count()
}

/// Front-end session
///
/// A session only holds settings. Every run gets a fresh [`Handler`], so
/// one session can serve many files, from several threads at once.
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: Config,
}

impl Session {
    /// Create a session
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Session settings
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read, tokenize and outline a file
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<FrontendOutput> {
        let path = path.as_ref();
        debug!(path = %path.display(), "front end started");
        self.run(|config, handler| SourceBuffer::load(path, config, handler))
    }

    /// Tokenize and outline an in-memory source
    pub fn parse_code(&self, code: &str) -> Result<FrontendOutput> {
        debug!(bytes = code.len(), "front end started");
        self.run(|config, handler| SourceBuffer::from_source(code, config, handler))
    }

    fn run<F>(&self, load: F) -> Result<FrontendOutput>
    where
        F: FnOnce(&LexerConfig, &Handler) -> LoadResult<SourceBuffer>,
    {
        let handler = Handler::new();
        let buffer = load(&self.config.lexer, &handler)?;
        let tokens = tokenize(&buffer, &handler)?;
        let ast = Parser::new(&tokens, &buffer, &handler).parse();
        debug!(
            tokens = tokens.len(),
            units = ast.design_units.len(),
            diagnostics = handler.len(),
            "front end finished"
        );
        Ok(FrontendOutput {
            ast,
            tokens,
            buffer,
            diagnostics: handler.into_diagnostics(),
        })
    }

    /// Read and tokenize a file without parsing it
    pub fn lex_file(&self, path: impl AsRef<Path>) -> FileReport {
        let handler = Handler::new();
        let buffer = SourceBuffer::load(path, &self.config.lexer, &handler)?;
        let tokens = tokenize(&buffer, &handler)?;
        Ok(LexedFile {
            buffer,
            tokens,
            diagnostics: handler.into_diagnostics(),
        })
    }

    /// Lex independent files in parallel
    ///
    /// The map keeps the order of `paths`. A path listed twice is lexed
    /// twice and reported once.
    pub fn lex_many(&self, paths: &[PathBuf]) -> IndexMap<PathBuf, FileReport> {
        let lex = |path: &PathBuf| (path.clone(), self.lex_file(path));

        let reports: Vec<(PathBuf, FileReport)> =
            match ThreadPoolBuilder::new().num_threads(self.config.jobs).build() {
                Ok(pool) => pool.install(|| paths.par_iter().map(lex).collect()),
                Err(err) => {
                    warn!(%err, "cannot start worker pool, lexing sequentially");
                    paths.iter().map(lex).collect()
                },
            };

        debug!(files = reports.len(), jobs = self.config.jobs, "lexed files");
        reports.into_iter().collect()
    }
}

/// Read, tokenize and outline a file with default settings
pub fn parse_file(path: impl AsRef<Path>) -> Result<FrontendOutput> {
    Session::default().parse_file(path)
}

/// Tokenize and outline an in-memory source with default settings
pub fn parse_code(code: &str) -> Result<FrontendOutput> {
    Session::default().parse_code(code)
}
