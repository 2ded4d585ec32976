//! Glue between command-line input and the engine.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use pseudo_core::{PseudoLocalizer, StringsRequest, StringsResponse, TransformKind};
use tracing::debug;

/// Parse a transform name for clap.
pub fn parse_transform(name: &str) -> std::result::Result<TransformKind, String> {
    name.parse::<TransformKind>().map_err(|error| {
        let known: Vec<&str> = TransformKind::ALL.into_iter().map(TransformKind::name).collect();
        format!("{error} (expected one of: {})", known.join(", "))
    })
}

/// Build the localizer for a run.
///
/// `--no-transforms` wins over everything; an empty list keeps the default
/// pipeline.
pub fn build_localizer(transforms: &[TransformKind], no_transforms: bool) -> PseudoLocalizer {
    let localizer = if no_transforms {
        PseudoLocalizer::with_transforms([])
    } else if transforms.is_empty() {
        PseudoLocalizer::new()
    } else {
        PseudoLocalizer::with_transforms(transforms.iter().copied())
    };
    debug!(transforms = ?localizer.transforms(), "configured pipeline");
    localizer
}

/// Pseudo-localize `reader` line by line into `writer`.
///
/// Line endings are stripped before transforming and every output line ends
/// with `\n`. Returns the number of lines written.
pub fn pseudolocalize_lines<R: BufRead, W: Write>(
    localizer: &PseudoLocalizer,
    reader: R,
    mut writer: W,
) -> Result<usize> {
    let mut count = 0;
    for line in reader.lines() {
        let line = line.context("read input line")?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        writeln!(writer, "{}", localizer.pseudolocalize(line)).context("write output line")?;
        count += 1;
    }
    writer.flush().context("flush output")?;
    Ok(count)
}

/// Parse a JSON `strings` request and answer it.
pub fn answer_strings(localizer: &PseudoLocalizer, request: &str) -> Result<StringsResponse> {
    let request: StringsRequest =
        serde_json::from_str(request).context("parse strings request")?;
    let response = localizer.pseudolocalize_strings(&request)?;
    Ok(response)
}
