//! Record parser: text lines → name records

use crate::error::TextoResult;
use crate::types::NameRecord;
use std::path::Path;

const FIELD_SEPARATOR: char = ' ';
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parse lines into name records, dropping lines with fewer than two fields.
///
/// Each line is split on single spaces with no trimming, so `"Ana  Lopez"`
/// yields an empty last name. Fields past the second are ignored.
pub fn parse_lines<I, S>(lines: I) -> Vec<NameRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| parse_line(line.as_ref()))
        .collect()
}

/// Parse a single line, or `None` when it has fewer than two fields
pub fn parse_line(line: &str) -> Option<NameRecord> {
    let mut fields = line.split(FIELD_SEPARATOR);
    let first_name = fields.next()?;
    let last_name = fields.next()?;
    Some(NameRecord::new(first_name, last_name))
}

/// Parse in-memory text.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. Splitting on either
/// character is enough: the extra empty piece between `\r` and `\n` has a
/// single field and never produces a record.
pub fn parse_str(text: &str) -> Vec<NameRecord> {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    parse_lines(text.split(['\n', '\r']))
}

/// Read a whole text file and parse it
pub fn parse_file(path: &Path) -> TextoResult<Vec<NameRecord>> {
    let bytes = std::fs::read(path)?;
    Ok(parse_str(&decode_text(&bytes)))
}

/// Decode file bytes, honoring a UTF-32 or UTF-16 byte-order mark.
///
/// Without one the bytes are read as UTF-8. Undecodable sequences become
/// U+FFFD in every encoding.
pub fn decode_text(bytes: &[u8]) -> String {
    // UTF-32 LE must be checked before UTF-16 LE: both start with FF FE
    if let Some(rest) = bytes.strip_prefix(&[0xFF, 0xFE, 0x00, 0x00]) {
        decode_utf32(rest, u32::from_le_bytes)
    } else if let Some(rest) = bytes.strip_prefix(&[0x00, 0x00, 0xFE, 0xFF]) {
        decode_utf32(rest, u32::from_be_bytes)
    } else if let Some(rest) = bytes.strip_prefix(&[0xFF, 0xFE]) {
        decode_utf16(rest, u16::from_le_bytes)
    } else if let Some(rest) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        decode_utf16(rest, u16::from_be_bytes)
    } else {
        String::from_utf8_lossy(bytes).into_owned()
    }
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> String {
    let chunks = bytes.chunks_exact(2);
    let trailing = !chunks.remainder().is_empty();
    let units = chunks.map(|pair| unit([pair[0], pair[1]]));
    let mut text: String = char::decode_utf16(units)
        .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect();
    if trailing {
        text.push(char::REPLACEMENT_CHARACTER);
    }
    text
}

fn decode_utf32(bytes: &[u8], unit: fn([u8; 4]) -> u32) -> String {
    let chunks = bytes.chunks_exact(4);
    let trailing = !chunks.remainder().is_empty();
    let mut text: String = chunks
        .map(|quad| {
            char::from_u32(unit([quad[0], quad[1], quad[2], quad[3]]))
                .unwrap_or(char::REPLACEMENT_CHARACTER)
        })
        .collect();
    if trailing {
        text.push(char::REPLACEMENT_CHARACTER);
    }
    text
}
