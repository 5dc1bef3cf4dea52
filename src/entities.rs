//! HTML character reference decoding, following the HTML5 rules browsers
//! apply to text content.

use std::borrow::Cow;

use encoding_rs::WINDOWS_1252;
use phf::phf_set;
use quick_xml::escape::resolve_html5_entity;

const REPLACEMENT: &str = "\u{FFFD}";

// Longest name in the HTML5 table is `CounterClockwiseContourIntegral`.
const MAX_NAME_CHARS: usize = 32;

/// Names the HTML5 table also accepts without a trailing `;`.
static LEGACY_NAMES: phf::Set<&'static str> = phf_set! {
    "AElig", "AMP", "Aacute", "Acirc", "Agrave", "Aring", "Atilde", "Auml",
    "COPY", "Ccedil", "ETH", "Eacute", "Ecirc", "Egrave", "Euml", "GT",
    "Iacute", "Icirc", "Igrave", "Iuml", "LT", "Ntilde", "Oacute", "Ocirc",
    "Ograve", "Oslash", "Otilde", "Ouml", "QUOT", "REG", "THORN", "Uacute",
    "Ucirc", "Ugrave", "Uuml", "Yacute", "aacute", "acirc", "acute", "aelig",
    "agrave", "amp", "aring", "atilde", "auml", "brvbar", "ccedil", "cedil",
    "cent", "copy", "curren", "deg", "divide", "eacute", "ecirc", "egrave",
    "eth", "euml", "frac12", "frac14", "frac34", "gt", "iacute", "icirc",
    "iexcl", "igrave", "iquest", "iuml", "laquo", "lt", "macr", "micro",
    "middot", "nbsp", "not", "ntilde", "oacute", "ocirc", "ograve", "ordf",
    "ordm", "oslash", "otilde", "ouml", "para", "plusmn", "pound", "quot",
    "raquo", "reg", "sect", "shy", "sup1", "sup2", "sup3", "szlig", "thorn",
    "times", "uacute", "ucirc", "ugrave", "uml", "uuml", "yacute", "yen",
    "yuml",
};

/// One decoding pass. A `&` that does not start a reference is kept as is.
pub fn decode_html_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp + 1..];
        match decode_reference(tail) {
            Some((len, value)) => {
                out.push_str(&value);
                rest = &tail[len..];
            }
            None => {
                out.push('&');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Decodes the reference at the start of `tail` (the text after `&`).
/// Returns how many bytes of `tail` it used.
fn decode_reference(tail: &str) -> Option<(usize, Cow<'static, str>)> {
    match tail.strip_prefix('#') {
        Some(number) => decode_numeric(number).map(|(len, value)| (len + 1, value)),
        None => decode_named(tail).map(|(len, value)| (len, Cow::Borrowed(value))),
    }
}

fn decode_numeric(number: &str) -> Option<(usize, Cow<'static, str>)> {
    let (radix, start) = match number.as_bytes().first() {
        Some(b'x' | b'X') => (16, 1),
        _ => (10, 0),
    };
    let digits = number[start..]
        .bytes()
        .take_while(|b| b.is_ascii_digit() || (radix == 16 && b.is_ascii_hexdigit()))
        .count();
    if digits == 0 {
        return None;
    }

    let mut len = start + digits;
    // Overflow is simply out of range.
    let code = u32::from_str_radix(&number[start..len], radix).ok();
    if number[len..].starts_with(';') {
        len += 1;
    }
    Some((len, numeric_char(code)))
}

fn numeric_char(code: Option<u32>) -> Cow<'static, str> {
    match code {
        Some(0) => Cow::Borrowed(REPLACEMENT),
        Some(0x0d) => Cow::Borrowed("\r"),
        // C1 range is read as windows-1252.
        Some(byte @ 0x80..=0x9f) => Cow::Owned(
            WINDOWS_1252
                .decode_without_bom_handling(&[byte as u8])
                .0
                .into_owned(),
        ),
        None | Some(0xd800..=0xdfff) | Some(0x110000..=u32::MAX) => Cow::Borrowed(REPLACEMENT),
        Some(code) if is_invalid_code_point(code) => Cow::Borrowed(""),
        Some(code) => char::from_u32(code)
            .map_or(Cow::Borrowed(REPLACEMENT), |c| Cow::Owned(c.to_string())),
    }
}

fn is_invalid_code_point(code: u32) -> bool {
    matches!(code, 0x1..=0x8 | 0xb | 0xe..=0x1f | 0x7f..=0x9f | 0xfdd0..=0xfdef)
        || code & 0xfffe == 0xfffe
}

fn decode_named(tail: &str) -> Option<(usize, &'static str)> {
    let mut end = 0;
    for (count, (i, c)) in tail.char_indices().enumerate() {
        if count == MAX_NAME_CHARS
            || matches!(c, '\t' | '\n' | '\x0c' | ' ' | '<' | '&' | '#' | ';')
        {
            break;
        }
        end = i + c.len_utf8();
    }
    if end == 0 {
        return None;
    }

    let name = &tail[..end];
    let terminated = tail[end..].starts_with(';');
    if terminated {
        if let Some(value) = resolve_html5_entity(name) {
            return Some((end + 1, value));
        }
    } else if LEGACY_NAMES.contains(name) {
        return resolve_html5_entity(name).map(|value| (end, value));
    }

    // Longest legacy name the text starts with; the rest stays literal.
    let longest = if terminated {
        end
    } else {
        name.char_indices().last().map_or(0, |(i, _)| i)
    };
    (2..=longest).rev().find_map(|len| {
        let prefix = name.get(..len)?;
        if LEGACY_NAMES.contains(prefix) {
            resolve_html5_entity(prefix).map(|value| (len, value))
        } else {
            None
        }
    })
}
