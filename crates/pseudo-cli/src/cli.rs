//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use pseudo_catalog::TextEncoding;
use pseudo_cli::pipeline::parse_transform;
use pseudo_core::TransformKind;

#[derive(Parser)]
#[command(
    name = "pseudol10n",
    version,
    about = "Pseudo-localize strings and gettext catalogs",
    long_about = "Pseudo-localize strings and gettext catalogs.\n\n\
                  Simulates translation effects (accented and non-Latin glyphs,\n\
                  text expansion, bracket markers) while keeping {0}, {name},\n\
                  %s and %(name)s placeholders intact."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Transform to apply, in order. Repeat to build a pipeline
    /// (default: transliterate_diacritic, pad_length, square_brackets).
    #[arg(
        short = 't',
        long = "transform",
        value_name = "NAME",
        value_parser = parse_transform,
        global = true
    )]
    pub transforms: Vec<TransformKind>,

    /// Use an empty pipeline; output equals input.
    #[arg(long = "no-transforms", global = true, conflicts_with = "transforms")]
    pub no_transforms: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
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

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// Log span close events with timings (json format only).
    #[arg(long = "log-spans", global = true)]
    pub log_spans: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Pseudo-localize each TEXT argument, or stdin line by line.
    Text(TextArgs),

    /// Generate a pseudo-localized .po catalog from a .pot template.
    Catalog(CatalogArgs),

    /// Answer a JSON strings request ({"strings": {"key": "text"}}).
    Strings(StringsArgs),

    /// List the available transforms.
    Transforms,
}

#[derive(Parser)]
pub struct TextArgs {
    /// Text to pseudo-localize; reads stdin when omitted.
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,
}

#[derive(Parser)]
pub struct CatalogArgs {
    /// Template to read.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Catalog to write.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Fail instead of replacing an existing OUTPUT.
    #[arg(long = "no-overwrite")]
    pub no_overwrite: bool,

    /// Print the run summary as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,

    /// Encoding of INPUT (utf-8, latin-1).
    #[arg(
        long = "input-encoding",
        value_name = "ENCODING",
        value_parser = str::parse::<TextEncoding>,
        default_value = "utf-8"
    )]
    pub input_encoding: TextEncoding,

    /// Encoding of OUTPUT (utf-8, latin-1).
    #[arg(
        long = "output-encoding",
        value_name = "ENCODING",
        value_parser = str::parse::<TextEncoding>,
        default_value = "utf-8"
    )]
    pub output_encoding: TextEncoding,
}

#[derive(Parser)]
pub struct StringsArgs {
    /// JSON request file; reads stdin when omitted.
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Pretty-print the response.
    #[arg(long = "pretty")]
    pub pretty: bool,
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

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pseudol10n").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn catalog_encodings_default_to_utf8() {
        let cli = parse(&["catalog", "in.pot", "out.po"]);
        let Command::Catalog(args) = cli.command else {
            panic!("expected catalog command");
        };
        assert_eq!(args.input_encoding, TextEncoding::Utf8);
        assert_eq!(args.output_encoding, TextEncoding::Utf8);
        assert!(!args.no_overwrite);
        assert!(!args.json);
    }

    #[test]
    fn catalog_encodings_accept_labels() {
        let cli = parse(&[
            "catalog",
            "in.pot",
            "out.po",
            "--input-encoding",
            "ISO-8859-1",
            "--output-encoding",
            "latin1",
        ]);
        let Command::Catalog(args) = cli.command else {
            panic!("expected catalog command");
        };
        assert_eq!(args.input_encoding, TextEncoding::Latin1);
        assert_eq!(args.output_encoding, TextEncoding::Latin1);
    }

    #[test]
    fn unknown_encoding_is_rejected() {
        let result = Cli::try_parse_from([
            "pseudol10n",
            "catalog",
            "in.pot",
            "out.po",
            "--input-encoding",
            "cp1252",
        ]);
        let Err(error) = result else {
            panic!("cp1252 should not parse");
        };
        assert!(error.to_string().contains("unsupported encoding: cp1252"));
    }

    #[test]
    fn transforms_and_log_flags_are_global() {
        let cli = parse(&[
            "text",
            "Hi",
            "-t",
            "square_brackets",
            "--log-timestamps",
            "--log-spans",
        ]);
        assert_eq!(cli.transforms, vec![TransformKind::SquareBrackets]);
        assert!(cli.log_timestamps);
        assert!(cli.log_spans);
        assert!(!cli.log_target);
    }
}
