//! Plain rendering of the device list.
//!
//! The listing line uses the conventional string representation of a
//! sequence of strings: `['CPU', 'GPU.0']`.

use std::fmt::Write as _;

/// `Available devices: ['CPU', 'GPU']`
pub fn format_available_devices(devices: &[String]) -> String {
    format!("Available devices: {}", sequence_repr(devices))
}

/// Render a sequence of strings as `[item, item]` with quoted items.
pub fn sequence_repr<S: AsRef<str>>(items: &[S]) -> String {
    let body: Vec<String> = items.iter().map(|item| string_repr(item.as_ref())).collect();
    format!("[{}]", body.join(", "))
}

/// Quote a single string.
///
/// Single quotes are used unless the text contains a single quote and no
/// double quote. Backslashes, the active quote and control characters are
/// escaped.
pub fn string_repr(text: &str) -> String {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_line() {
        let devices = vec!["CPU".to_string(), "GPU.0".to_string(), "GPU.1".to_string()];
        assert_eq!(
            format_available_devices(&devices),
            "Available devices: ['CPU', 'GPU.0', 'GPU.1']"
        );
    }

    #[test]
    fn test_empty_listing() {
        assert_eq!(format_available_devices(&[]), "Available devices: []");
    }

    #[test]
    fn test_quote_selection() {
        assert_eq!(string_repr("it's"), "\"it's\"");
        assert_eq!(string_repr("both ' and \""), "'both \\' and \"'");
        assert_eq!(string_repr("say \"hi\""), "'say \"hi\"'");
    }

    #[test]
    fn test_escapes() {
        assert_eq!(string_repr("a\\b"), "'a\\\\b'");
        assert_eq!(string_repr("line\nbreak"), "'line\\nbreak'");
        assert_eq!(string_repr("\u{1}"), "'\\x01'");
        assert_eq!(string_repr("Grafik ü"), "'Grafik ü'");
    }
}
