//! CLI handlers for the conversion commands.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use textcodec::text::html::escape_html_with;
use textcodec::text::latin1::{to_legacy_with, to_unicode, to_unicode_str};
use textcodec::{remove_diacritics, Unrepresentable};

/// Input and output shared by every conversion.
#[derive(Debug, Parser)]
pub struct IoArgs {
    /// Input file (reads from stdin if omitted)
    pub input: Option<PathBuf>,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Options for conversions that narrow text to Latin-1.
#[derive(Debug, Parser)]
pub struct NarrowArgs {
    #[command(flatten)]
    pub io: IoArgs,

    /// Replace characters above U+00FF instead of failing
    #[arg(long)]
    pub lossy: bool,

    /// Replacement used with --lossy (a single ASCII character)
    #[arg(long, default_value = "?", value_parser = parse_replacement)]
    pub replacement: u8,
}

impl NarrowArgs {
    pub fn policy(&self) -> Unrepresentable {
        if self.lossy {
            Unrepresentable::Substitute(self.replacement)
        } else {
            Unrepresentable::Reject
        }
    }
}

/// Parse the `--replacement` value: exactly one ASCII character.
fn parse_replacement(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(format!(
            "Invalid replacement: '{}'. Use a single ASCII character",
            s
        )),
    }
}

/// `to-utf8`
pub fn run_to_utf8(args: IoArgs) -> Result<()> {
    let input = read_input(args.input.as_deref())?;
    let output = to_unicode(&input);
    write_output(args.output.as_deref(), &output)
}

/// `to-latin1`
pub fn run_to_latin1(args: NarrowArgs) -> Result<()> {
    let input = read_input(args.io.input.as_deref())?;
    let output = match to_legacy_with(&input, args.policy()) {
        Ok(output) => output,
        Err(err) => bail!("{}; pass --lossy to replace such characters", err),
    };
    write_output(args.io.output.as_deref(), &output)
}

/// `escape-html`
pub fn run_escape_html(args: NarrowArgs) -> Result<()> {
    let input = read_input(args.io.input.as_deref())?;
    let output = escape_html_with(&input, args.policy())
        .context("cannot escape input as Latin-1 HTML entities")?;
    write_output(args.io.output.as_deref(), output.as_bytes())
}

/// `strip-diacritics`
pub fn run_strip_diacritics(args: IoArgs) -> Result<()> {
    let input = read_input(args.input.as_deref())?;
    let text = to_unicode_str(&input);
    let output = remove_diacritics(&text);
    write_output(args.output.as_deref(), output.as_bytes())
}

pub fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => {
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut input = Vec::new();
            io::stdin()
                .read_to_end(&mut input)
                .context("failed to read from stdin")?;
            Ok(input)
        }
    }
}

pub fn write_output(path: Option<&Path>, bytes: &[u8]) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, bytes)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("wrote {} bytes to {}", bytes.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes).context("failed to write to stdout")?;
            stdout.flush()?;
        }
    }
    Ok(())
}
