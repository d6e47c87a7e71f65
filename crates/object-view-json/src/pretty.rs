//! Single-line pretty printer.

use serde_json::Value;

use crate::error::EncodeError;

/// Serialize `value` to a JSON string with a single space after every
/// `{`, `[`, `,`, `:` and before every `}`, `]`.
///
/// Punctuation inside string literals is left untouched.
pub fn pretty_one_line(value: &Value) -> Result<String, EncodeError> {
    let json = serde_json::to_string(value)?;
    Ok(space_structural(&json))
}

/// Applies one-line spacing to already-encoded compact JSON text.
pub(crate) fn space_structural(json: &str) -> String {
    let mut out = String::with_capacity(json.len() + json.len() / 4);
    let mut in_string = false;
    let mut escaped = false;
    for ch in json.chars() {
        if in_string {
            out.push(ch);
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => {
                in_string = true;
                out.push(ch);
            }
            '{' | '[' | ':' | ',' => {
                out.push(ch);
                out.push(' ');
            }
            '}' | ']' => {
                out.push(' ');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}
