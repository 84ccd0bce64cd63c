//! Text decoding helpers

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8};
use log::{debug, warn};

/// Resolve an encoding label (e.g. `"utf-8"`, `"latin1"`, `"utf-16le"`).
///
/// Unknown labels fall back to UTF-8.
pub fn parse_encoding(label: &str) -> &'static Encoding {
    match Encoding::for_label(label.trim().as_bytes()) {
        Some(encoding) => encoding,
        None => {
            warn!("Unknown encoding label '{}', falling back to UTF-8", label);
            UTF_8
        }
    }
}

/// Decode a raw buffer into text.
///
/// A byte order mark, if present, wins over `encoding` and is removed.
/// Malformed sequences are replaced with U+FFFD.
pub fn decode_text<'a>(data: &'a [u8], encoding: &'static Encoding) -> Cow<'a, str> {
    let (text, used, had_errors) = encoding.decode(data);
    if used != encoding {
        debug!("Byte order mark overrides encoding: {} -> {}", encoding.name(), used.name());
    }
    if had_errors {
        warn!("Input is not valid {}; malformed sequences were replaced", used.name());
    }
    text
}
