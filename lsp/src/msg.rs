//! Header/body framing for messages read from and written to stdio, matching
//! the wire format LSP clients speak: a block of `Key: Value` header lines
//! separated by `\r\n`, a blank line, then a body of exactly `Content-Length`
//! UTF-8 JSON bytes. Header keys are matched case-insensitively.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

const HEADER_SEP: &str = "\r\n";
const CONTENT_LENGTH: &str = "content-length";

fn normalize_key(key: &str) -> String {
    key.trim().to_ascii_lowercase()
}

/// Reads one framed message from `reader` and returns its body bytes.
/// Returns `Ok(None)` on a clean EOF before any header line is read.
pub fn read_message(reader: &mut impl BufRead) -> Result<Option<Vec<u8>>> {
    let mut content_length: Option<usize> = None;
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line).context("reading header line")?;
        if bytes_read == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']);
        if trimmed.is_empty() {
            break;
        }
        let (key, value) = trimmed.split_once(':').context("header line missing ':'")?;
        if normalize_key(key) == CONTENT_LENGTH {
            content_length = Some(value.trim().parse().context("content-length is not an integer")?);
        }
    }

    let content_length = content_length.context("message had no Content-Length header")?;
    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).context("reading message body")?;
    Ok(Some(body))
}

/// Frames `body` with a `Content-Length` header and writes it to `writer`.
pub fn write_message(writer: &mut impl Write, body: &[u8]) -> Result<()> {
    write!(writer, "{CONTENT_LENGTH}: {}{HEADER_SEP}{HEADER_SEP}", body.len())?;
    writer.write_all(body)?;
    writer.flush()?;
    Ok(())
}

pub fn parse_body<T: serde::de::DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).context("malformed JSON-RPC body")
}
