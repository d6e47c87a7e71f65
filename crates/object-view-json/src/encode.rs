//! JSON encoding.

use serde_json::Value;

use crate::error::EncodeError;
use crate::options::EncodeOptions;
use crate::pretty::space_structural;

/// Encodes `value` as JSON text according to `options`.
pub fn encode(value: &Value, options: EncodeOptions) -> Result<String, EncodeError> {
    let mut out = if options.pretty {
        serde_json::to_string_pretty(value)?
    } else if options.one_line {
        space_structural(&serde_json::to_string(value)?)
    } else {
        serde_json::to_string(value)?
    };
    // Both rewrites only touch characters that can appear inside string
    // literals, where the escaped forms are equivalent.
    if options.escape_unicode {
        out = escape_non_ascii(&out);
    }
    if options.escape_slashes {
        out = out.replace('/', "\\/");
    }
    Ok(out)
}

fn escape_non_ascii(json: &str) -> String {
    if json.is_ascii() {
        return json.to_string();
    }
    let mut out = String::with_capacity(json.len() + 16);
    let mut units = [0u16; 2];
    for ch in json.chars() {
        if ch.is_ascii() {
            out.push(ch);
            continue;
        }
        for unit in ch.encode_utf16(&mut units) {
            out.push_str(&format!("\\u{:04x}", unit));
        }
    }
    out
}
