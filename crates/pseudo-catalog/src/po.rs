//! Gettext catalog adapter.
//!
//! Streams a `.pot` template line by line. Every line is copied to the
//! output; after each `msgid` line a `msgstr` line carrying the
//! pseudo-localized message is written, and the template's own (empty)
//! `msgstr` line that follows is dropped.
//!
//! Output is written incrementally and is not transactional: a failure part
//! way through leaves a partially written file.
//!
//! # Usage
//!
//! ```ignore
//! use pseudo_catalog::{CatalogOptions, pseudolocalize_file};
//! use pseudo_core::PseudoLocalizer;
//!
//! let stats = pseudolocalize_file(
//!     &PseudoLocalizer::new(),
//!     "locales/messages.pot",
//!     "locales/eo/LC_MESSAGES/messages.po",
//!     &CatalogOptions::default(),
//! )?;
//! println!("{} messages", stats.messages);
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use pseudo_core::PseudoLocalizer;
use serde::Serialize;
use tracing::{debug, info, info_span};

use crate::encoding::TextEncoding;
use crate::error::{CatalogError, Result};

/// Marker that starts a translatable entry.
pub const MSGID_MARKER: &str = "msgid";

/// Options for catalog pseudo-localization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogOptions {
    /// Encoding of the template being read.
    pub input_encoding: TextEncoding,
    /// Encoding of the catalog being written.
    pub output_encoding: TextEncoding,
    /// Replace an existing output file instead of failing.
    pub overwrite_existing: bool,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            input_encoding: TextEncoding::Utf8,
            output_encoding: TextEncoding::Utf8,
            overwrite_existing: true,
        }
    }
}

impl CatalogOptions {
    #[must_use]
    pub fn with_input_encoding(mut self, encoding: TextEncoding) -> Self {
        self.input_encoding = encoding;
        self
    }

    #[must_use]
    pub fn with_output_encoding(mut self, encoding: TextEncoding) -> Self {
        self.output_encoding = encoding;
        self
    }

    #[must_use]
    pub fn with_overwrite_existing(mut self, overwrite: bool) -> Self {
        self.overwrite_existing = overwrite;
        self
    }
}

/// Counts reported after a catalog run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    /// Input lines consumed, including the dropped `msgstr` lines.
    pub lines_read: usize,
    /// `msgid` entries that received a generated `msgstr`.
    pub messages: usize,
}

/// Pseudo-localize the catalog at `input` into `output`.
///
/// # Errors
///
/// - [`CatalogError::FileNotFound`] if `input` is not a file
/// - [`CatalogError::FileAlreadyExists`] if `output` exists and
///   `options.overwrite_existing` is false
/// - encoding and I/O errors while streaming
pub fn pseudolocalize_file(
    localizer: &PseudoLocalizer,
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &CatalogOptions,
) -> Result<CatalogStats> {
    let input = input.as_ref();
    let output = output.as_ref();
    if !input.is_file() {
        return Err(CatalogError::FileNotFound {
            path: absolute_path(input),
        });
    }
    if output.exists() && !options.overwrite_existing {
        return Err(CatalogError::FileAlreadyExists {
            path: absolute_path(output),
        });
    }

    let span = info_span!(
        "catalog",
        input = %input.display(),
        output = %output.display()
    );
    let _guard = span.enter();

    let reader = BufReader::new(File::open(input)?);
    let writer = BufWriter::new(File::create(output)?);
    let stats = pseudolocalize_reader(localizer, reader, writer, options)?;
    info!(
        lines = stats.lines_read,
        messages = stats.messages,
        "pseudo-localized message catalog"
    );
    Ok(stats)
}

/// Pseudo-localize a catalog from any buffered reader into any writer.
pub fn pseudolocalize_reader<R: BufRead, W: Write>(
    localizer: &PseudoLocalizer,
    reader: R,
    mut writer: W,
    options: &CatalogOptions,
) -> Result<CatalogStats> {
    let mut lines = CatalogLines::new(reader, options.input_encoding);
    let mut stats = CatalogStats::default();
    let encoding = options.output_encoding;

    while let Some(line) = lines.next_line()? {
        write_encoded(&mut writer, &line, encoding, lines.line_number)?;
        if !line.starts_with(MSGID_MARKER) {
            continue;
        }
        let msgid = msgid_text(&line);
        let msgstr = localizer.pseudolocalize(msgid);
        debug!(line = lines.line_number, "generated msgstr");
        write_encoded(
            &mut writer,
            &format!("msgstr \"{msgstr}\"\n"),
            encoding,
            lines.line_number,
        )?;
        stats.messages += 1;
        // The template's empty msgstr line.
        lines.next_line()?;
    }
    writer.flush()?;
    stats.lines_read = lines.line_number;
    Ok(stats)
}

/// Extract the message text from a `msgid` line.
///
/// Takes everything after the first whitespace run, trims it, and removes
/// one leading and one trailing double quote.
///
/// ```
/// use pseudo_catalog::po::msgid_text;
///
/// assert_eq!(msgid_text("msgid \"Hello {0}!\"\n"), "Hello {0}!");
/// assert_eq!(msgid_text("msgid \"\""), "");
/// ```
pub fn msgid_text(line: &str) -> &str {
    let Some((_, rest)) = line.split_once(char::is_whitespace) else {
        return "";
    };
    let rest = rest.trim();
    let rest = rest.strip_prefix('"').unwrap_or(rest);
    rest.strip_suffix('"').unwrap_or(rest)
}

fn write_encoded<W: Write>(
    writer: &mut W,
    text: &str,
    encoding: TextEncoding,
    line: usize,
) -> Result<()> {
    let bytes = encoding
        .encode(text)
        .map_err(|ch| CatalogError::Unencodable {
            ch,
            line,
            encoding: encoding.label(),
        })?;
    writer.write_all(&bytes)?;
    Ok(())
}

fn absolute_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Line reader that keeps line endings and decodes with a fixed encoding.
struct CatalogLines<R> {
    reader: R,
    encoding: TextEncoding,
    line_number: usize,
}

impl<R: BufRead> CatalogLines<R> {
    fn new(reader: R, encoding: TextEncoding) -> Self {
        Self {
            reader,
            encoding,
            line_number: 0,
        }
    }

    fn next_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;
        self.encoding
            .decode(bytes)
            .map(Some)
            .ok_or(CatalogError::InvalidInput {
                line: self.line_number,
                encoding: self.encoding.label(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pseudo_core::TransformKind;

    fn run(localizer: &PseudoLocalizer, input: &str) -> (String, CatalogStats) {
        let mut output = Vec::new();
        let stats = pseudolocalize_reader(
            localizer,
            input.as_bytes(),
            &mut output,
            &CatalogOptions::default(),
        )
        .unwrap();
        (String::from_utf8(output).unwrap(), stats)
    }

    #[test]
    fn msgid_text_strips_one_quote_layer() {
        assert_eq!(msgid_text("msgid \"\\\"quoted\\\"\""), "\\\"quoted\\\"");
        assert_eq!(msgid_text("msgid   \"spaced\"  \r\n"), "spaced");
        assert_eq!(msgid_text("msgid \"\"\n"), "");
        assert_eq!(msgid_text("msgid"), "");
    }

    #[test]
    fn replaces_template_msgstr() {
        let localizer = PseudoLocalizer::with_transforms([TransformKind::SquareBrackets]);
        let (output, stats) = run(&localizer, "#: a.py:1\nmsgid \"Hi\"\nmsgstr \"\"\n\n");
        assert_eq!(output, "#: a.py:1\nmsgid \"Hi\"\nmsgstr \"⟦Hi⟧\"\n\n");
        assert_eq!(stats, CatalogStats {
            lines_read: 4,
            messages: 1
        });
    }

    #[test]
    fn header_entry_gets_empty_msgstr() {
        let localizer = PseudoLocalizer::new();
        let (output, _) = run(
            &localizer,
            "msgid \"\"\nmsgstr \"\"\n\"Content-Type: text/plain; charset=UTF-8\\n\"\n",
        );
        assert_eq!(
            output,
            "msgid \"\"\nmsgstr \"\"\n\"Content-Type: text/plain; charset=UTF-8\\n\"\n"
        );
    }

    #[test]
    fn msgid_on_last_line_is_handled() {
        let localizer = PseudoLocalizer::with_transforms([TransformKind::SimpleSquareBrackets]);
        let (output, stats) = run(&localizer, "msgid \"End\"");
        assert_eq!(output, "msgid \"End\"msgstr \"[End]\"\n");
        assert_eq!(stats.messages, 1);
    }

    #[test]
    fn crlf_lines_are_copied_verbatim() {
        let localizer = PseudoLocalizer::with_transforms([TransformKind::SimpleSquareBrackets]);
        let (output, _) = run(&localizer, "# c\r\nmsgid \"A\"\r\nmsgstr \"\"\r\n");
        assert_eq!(output, "# c\r\nmsgid \"A\"\r\nmsgstr \"[A]\"\n");
    }

    #[test]
    fn latin1_output_rejects_wide_characters() {
        let localizer = PseudoLocalizer::new();
        let options = CatalogOptions::default().with_output_encoding(TextEncoding::Latin1);
        let mut output = Vec::new();
        let err = pseudolocalize_reader(
            &localizer,
            "msgid \"Hi\"\nmsgstr \"\"\n".as_bytes(),
            &mut output,
            &options,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::Unencodable { line: 1, .. }));
        assert_eq!(output, b"msgid \"Hi\"\n");
    }

    #[test]
    fn invalid_utf8_input_is_reported() {
        let localizer = PseudoLocalizer::new();
        let mut output = Vec::new();
        let err = pseudolocalize_reader(
            &localizer,
            &b"# ok\n\xFF\xFE\n"[..],
            &mut output,
            &CatalogOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidInput { line: 2, .. }));
    }
}
