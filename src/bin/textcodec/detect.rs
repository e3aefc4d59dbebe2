//! CLI handler for the `detect` command.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use textcodec::text::utf8::{self, format_byte, Utf8Error, Utf8ErrorKind};

/// Report whether inputs are UTF-8, and where they stop being so.
#[derive(Debug, Parser)]
pub struct DetectArgs {
    /// Input files to check (reads from stdin if none provided)
    #[arg(trailing_var_arg = true)]
    pub files: Vec<PathBuf>,

    /// Quiet mode: exit code only, no output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print one JSON report per input on stdout instead of diagnostics
    #[arg(long, conflicts_with = "quiet")]
    pub json: bool,

    /// Force color output even when not a TTY
    #[arg(short = 'C', long = "color")]
    pub color: bool,

    /// Disable color output
    #[arg(short = 'M', long = "no-color")]
    pub no_color: bool,
}

/// Exit codes for the detect command.
pub mod exit_codes {
    /// Every input is UTF-8.
    pub const SUCCESS: i32 = 0;
    /// At least one input is not UTF-8.
    pub const INVALID: i32 = 1;
    /// I/O error (file not found, permission denied, etc.).
    pub const IO_ERROR: i32 = 2;
}

/// ANSI color codes for diagnostics.
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const LOCATION: &str = "\x1b[1;34m"; // Bold blue
    pub const HINT: &str = "\x1b[0;33m"; // Yellow
}

struct ColorScheme {
    error: &'static str,
    location: &'static str,
    hint: &'static str,
    reset: &'static str,
}

impl ColorScheme {
    fn new(use_color: bool) -> Self {
        if use_color {
            Self {
                error: colors::ERROR,
                location: colors::LOCATION,
                hint: colors::HINT,
                reset: colors::RESET,
            }
        } else {
            Self {
                error: "",
                location: "",
                hint: "",
                reset: "",
            }
        }
    }
}

/// Machine-readable result for one input.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Report {
    pub input: String,
    pub bytes: usize,
    pub utf8: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ReportError>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ReportError {
    pub kind: Utf8ErrorKind,
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Report {
    pub fn new(name: &str, input: &[u8]) -> Self {
        let error = utf8::validate_utf8(input).err().map(|err| {
            let (line, column) = err.line_column(input);
            ReportError {
                kind: err.kind,
                offset: err.offset,
                line,
                column,
            }
        });
        Self {
            input: name.to_string(),
            bytes: input.len(),
            utf8: error.is_none(),
            error,
        }
    }
}

/// Run the detect command.
pub fn run(args: DetectArgs) -> Result<i32> {
    let use_color = if args.no_color {
        false
    } else if args.color {
        true
    } else {
        atty::is(atty::Stream::Stderr)
    };
    let scheme = ColorScheme::new(use_color);

    if args.files.is_empty() {
        let mut input = Vec::new();
        io::stdin()
            .read_to_end(&mut input)
            .context("failed to read from stdin")?;
        return check_input(&input, "<stdin>", &args, &scheme);
    }

    let mut any_invalid = false;
    let mut any_io_error = false;

    for path in &args.files {
        match fs::read(path) {
            Ok(input) => {
                let name = path.to_string_lossy();
                if check_input(&input, &name, &args, &scheme)? == exit_codes::INVALID {
                    any_invalid = true;
                }
            }
            Err(e) => {
                any_io_error = true;
                log::warn!("cannot read {}: {}", path.display(), e);
                if !args.quiet {
                    eprintln!(
                        "{}error{}: {}: {}",
                        scheme.error,
                        scheme.reset,
                        path.display(),
                        e
                    );
                }
            }
        }
    }

    if any_io_error {
        Ok(exit_codes::IO_ERROR)
    } else if any_invalid {
        Ok(exit_codes::INVALID)
    } else {
        Ok(exit_codes::SUCCESS)
    }
}

fn check_input(input: &[u8], name: &str, args: &DetectArgs, scheme: &ColorScheme) -> Result<i32> {
    if args.json {
        let report = Report::new(name, input);
        let code = if report.utf8 {
            exit_codes::SUCCESS
        } else {
            exit_codes::INVALID
        };
        println!("{}", serde_json::to_string(&report)?);
        return Ok(code);
    }

    match utf8::validate_utf8(input) {
        Ok(()) => {
            log::info!("{}: UTF-8 ({} bytes)", name, input.len());
            Ok(exit_codes::SUCCESS)
        }
        Err(err) => {
            if !args.quiet {
                eprint!("{}", format_diagnostic(&err, input, name, scheme));
            }
            Ok(exit_codes::INVALID)
        }
    }
}

fn format_diagnostic(err: &Utf8Error, input: &[u8], name: &str, scheme: &ColorScheme) -> String {
    let (line, column) = err.line_column(input);
    let byte = input
        .get(err.offset)
        .map(|&b| format!(" ({})", format_byte(b)))
        .unwrap_or_default();

    let mut out = format!(
        "{}error{}: {}{}\n  {}--> {}:{}:{}{}\n",
        scheme.error, scheme.reset, err.kind, byte, scheme.location, name, line, column, scheme.reset
    );
    if let Some(hint) = hint(err.kind) {
        out.push_str(&format!("  {}= {}{}\n", scheme.hint, hint, scheme.reset));
    }
    out
}

fn hint(kind: Utf8ErrorKind) -> Option<&'static str> {
    match kind {
        Utf8ErrorKind::InvalidLeadByte => Some("input is probably Latin-1; try `textcodec to-utf8`"),
        Utf8ErrorKind::InvalidContinuationByte => Some("expected byte 0x80-0xBF"),
        Utf8ErrorKind::OverlongEncoding => Some("use shortest possible encoding"),
        Utf8ErrorKind::SurrogateCodepoint => Some("U+D800-U+DFFF are reserved for UTF-16"),
        Utf8ErrorKind::OutOfRangeCodepoint => Some("maximum is U+10FFFF"),
        Utf8ErrorKind::TruncatedSequence => None,
    }
}
