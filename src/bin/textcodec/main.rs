//! textcodec CLI tool for detecting and converting text encodings.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

mod convert;
mod detect;
mod logger;

#[derive(Debug, Parser)]
#[command(name = "textcodec")]
#[command(about = "UTF-8 / Latin-1 detection, conversion and escaping", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check whether inputs are valid UTF-8
    Detect(detect::DetectArgs),
    /// Convert input to UTF-8 (UTF-8 input is passed through)
    #[command(name = "to-utf8")]
    ToUtf8(convert::IoArgs),
    /// Convert input to Latin-1 (non-UTF-8 input is passed through)
    #[command(name = "to-latin1")]
    ToLatin1(convert::NarrowArgs),
    /// Escape input as HTML entities, whatever its encoding
    EscapeHtml(convert::NarrowArgs),
    /// Replace accented Latin letters with their ASCII base letters
    StripDiacritics(convert::IoArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    match cli.command {
        Command::Detect(args) => {
            let code = detect::run(args)?;
            std::process::exit(code);
        }
        Command::ToUtf8(args) => convert::run_to_utf8(args),
        Command::ToLatin1(args) => convert::run_to_latin1(args),
        Command::EscapeHtml(args) => convert::run_escape_html(args),
        Command::StripDiacritics(args) => convert::run_strip_diacritics(args),
    }
}
