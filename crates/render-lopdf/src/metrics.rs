//! Helvetica metrics and WinAnsi text encoding.
//!
//! Widths come from the Adobe core font AFM data, expressed in 1/1000 em.
//! They drive the word wrapper; the encoder maps `char`s onto the WinAnsi
//! code page the page font declares.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Helvetica advance widths for the printable ASCII range 0x20..=0x7E.
#[rustfmt::skip]
const ASCII_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// WinAnsi code points for the 0x80..=0x9F block, which differs from Latin-1.
static WINANSI_EXTRAS: Lazy<HashMap<char, u8>> = Lazy::new(|| {
    HashMap::from([
        ('\u{20AC}', 0x80), // euro sign
        ('\u{201A}', 0x82), // single low quote
        ('\u{0192}', 0x83), // florin
        ('\u{201E}', 0x84), // double low quote
        ('\u{2026}', 0x85), // ellipsis
        ('\u{2020}', 0x86), // dagger
        ('\u{2021}', 0x87), // double dagger
        ('\u{02C6}', 0x88), // circumflex accent
        ('\u{2030}', 0x89), // per mille
        ('\u{0160}', 0x8A), // S caron
        ('\u{2039}', 0x8B), // single left guillemet
        ('\u{0152}', 0x8C), // OE ligature
        ('\u{017D}', 0x8E), // Z caron
        ('\u{2018}', 0x91), // left single quote
        ('\u{2019}', 0x92), // right single quote
        ('\u{201C}', 0x93), // left double quote
        ('\u{201D}', 0x94), // right double quote
        ('\u{2022}', 0x95), // bullet
        ('\u{2013}', 0x96), // en dash
        ('\u{2014}', 0x97), // em dash
        ('\u{02DC}', 0x98), // small tilde
        ('\u{2122}', 0x99), // trademark
        ('\u{0161}', 0x9A), // s caron
        ('\u{203A}', 0x9B), // single right guillemet
        ('\u{0153}', 0x9C), // oe ligature
        ('\u{017E}', 0x9E), // z caron
        ('\u{0178}', 0x9F), // Y diaeresis
    ])
});

/// Encodes `text` into WinAnsi bytes. Characters outside the code page are
/// replaced with `?` rather than silently dropped.
pub(crate) fn encode_winansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            0x20..=0x7E => c as u8,
            // WinAnsi agrees with Latin-1 above 0x9F.
            0xA0..=0xFF => c as u8,
            _ => WINANSI_EXTRAS.get(&c).copied().unwrap_or(b'?'),
        })
        .collect()
}

fn char_width_milli(c: char) -> u16 {
    match c as u32 {
        0x20..=0x7E => ASCII_WIDTHS[c as usize - 0x20],
        _ => match c {
            '\u{2018}' | '\u{2019}' | '\u{201A}' => 222,
            '\u{201C}' | '\u{201D}' | '\u{201E}' => 333,
            '\u{2013}' => 556,
            '\u{2014}' | '\u{2026}' | '\u{2122}' => 1000,
            '\u{2022}' => 350,
            // Accented Latin-1 letters all sit near the lowercase advance.
            _ => 556,
        },
    }
}

/// Measured advance of `text` at `font_size`, in points.
pub(crate) fn text_width(text: &str, font_size: f32) -> f32 {
    let milli: u32 = text.chars().map(|c| u32::from(char_width_milli(c))).sum();
    milli as f32 * font_size / 1000.0
}

/// Greedy word wrap of a single hard line into lines at most `max_width`
/// points wide. A word that alone exceeds the line width is split at
/// character granularity so no input is ever lost.
pub(crate) fn wrap_line(line: &str, font_size: f32, max_width: f32) -> Vec<String> {
    let space_width = text_width(" ", font_size);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0f32;

    let mut flush = |current: &mut String, current_width: &mut f32, lines: &mut Vec<String>| {
        if !current.is_empty() {
            lines.push(std::mem::take(current));
        }
        *current_width = 0.0;
    };

    for word in line.split(' ') {
        if word.is_empty() {
            // A run of spaces in the source text.
            if !current.is_empty() {
                current.push(' ');
                current_width += space_width;
            }
            continue;
        }
        let word_width = text_width(word, font_size);
        if word_width > max_width {
            flush(&mut current, &mut current_width, &mut lines);
            for c in word.chars() {
                let w = text_width(c.encode_utf8(&mut [0u8; 4]), font_size);
                if !current.is_empty() && current_width + w > max_width {
                    flush(&mut current, &mut current_width, &mut lines);
                }
                current.push(c);
                current_width += w;
            }
            continue;
        }
        let needed = if current.is_empty() {
            word_width
        } else {
            space_width + word_width
        };
        if current_width + needed > max_width {
            flush(&mut current, &mut current_width, &mut lines);
            current.push_str(word);
            current_width = word_width;
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_width += needed;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
