//! Input normalization ahead of any pattern matching
//!
//! Cleans encoding artifacts without destroying the column-like structure
//! later stages depend on: tabs become fixed-width space runs (so the
//! multi-space delimiter still sees a boundary), Khmer digit glyphs become
//! ASCII digits, and BOM/control characters are stripped. Runs of two or
//! more spaces are deliberately left alone; they are a meaningful delimiter
//! for the fuel-line splitter.

use crate::constants::{KHMER_DIGITS, MAX_LINE_CHARS, TAB_SPACE_WIDTH};

/// Normalize raw report text
///
/// Total: always returns a string, possibly empty. Each line is truncated
/// at the per-line cap before any regex runs against it.
pub fn preprocess(text: &str) -> String {
    let without_bom = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut lines: Vec<String> = Vec::new();
    for raw_line in without_bom.split('\n') {
        let mut line = String::with_capacity(raw_line.len());
        let mut char_count = 0usize;

        for ch in raw_line.chars() {
            if char_count >= MAX_LINE_CHARS {
                break;
            }

            match ch {
                '\t' => {
                    for _ in 0..TAB_SPACE_WIDTH {
                        line.push(' ');
                    }
                    char_count += TAB_SPACE_WIDTH;
                }
                c if c.is_control() => {} // \r and other control chars dropped
                c => {
                    line.push(normalize_digit(c));
                    char_count += 1;
                }
            }
        }

        lines.push(line);
    }

    lines.join("\n")
}

/// Map a Khmer digit glyph to its ASCII counterpart, pass everything else through
fn normalize_digit(c: char) -> char {
    match KHMER_DIGITS.iter().position(|&d| d == c) {
        Some(index) => (b'0' + index as u8) as char,
        None => c,
    }
}
