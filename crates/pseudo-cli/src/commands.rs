use std::fs;
use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use tracing::info_span;

use pseudo_catalog::{CatalogOptions, CatalogStats, pseudolocalize_file};
use pseudo_cli::pipeline::{answer_strings, pseudolocalize_lines};
use pseudo_cli::summary::transforms_table;
use pseudo_core::PseudoLocalizer;

use crate::cli::{CatalogArgs, StringsArgs, TextArgs};

pub fn run_text(localizer: &PseudoLocalizer, args: &TextArgs) -> Result<()> {
    if args.text.is_empty() {
        let stdin = io::stdin().lock();
        let stdout = io::stdout().lock();
        pseudolocalize_lines(localizer, stdin, stdout)?;
        return Ok(());
    }
    let mut stdout = io::stdout().lock();
    for text in &args.text {
        writeln!(stdout, "{}", localizer.pseudolocalize(text)).context("write output")?;
    }
    Ok(())
}

pub fn run_catalog(localizer: &PseudoLocalizer, args: &CatalogArgs) -> Result<CatalogStats> {
    let options = CatalogOptions::default()
        .with_input_encoding(args.input_encoding)
        .with_output_encoding(args.output_encoding)
        .with_overwrite_existing(!args.no_overwrite);
    pseudolocalize_file(localizer, &args.input, &args.output, &options)
        .with_context(|| format!("pseudo-localize {}", args.input.display()))
}

pub fn run_strings(localizer: &PseudoLocalizer, args: &StringsArgs) -> Result<()> {
    let span = info_span!("strings");
    let _guard = span.enter();
    let request = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("read stdin")?;
            buffer
        }
    };
    let response = answer_strings(localizer, &request)?;
    let json = if args.pretty {
        serde_json::to_string_pretty(&response)
    } else {
        serde_json::to_string(&response)
    }
    .context("serialize strings response")?;
    println!("{json}");
    Ok(())
}

pub fn run_transforms() -> Result<()> {
    println!("{}", transforms_table());
    Ok(())
}
