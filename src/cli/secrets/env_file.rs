//! Minimal dotenv parsing for `secrets set --env-file`

/// Parse `.env` contents into ordered `(name, value)` pairs.
///
/// Blank lines, `#` comments and lines without `=` are skipped. Later
/// duplicates are kept; the caller decides which one wins.
pub fn parse(contents: &str) -> Vec<(String, String)> {
    contents.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let line = line.strip_prefix("export ").unwrap_or(line);
    let (name, value) = line.split_once('=')?;
    let name = name.trim();

    if !is_valid_name(name) {
        return None;
    }

    Some((name.to_string(), parse_value(value.trim())?))
}

/// Secret names are non-empty and made of ASCII letters, digits and `_`.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Returns `None` for a quoted value that is never closed or is followed by
/// anything other than a comment.
fn parse_value(value: &str) -> Option<String> {
    let mut chars = value.chars();
    match chars.next() {
        Some('"') => {
            let mut decoded = String::new();
            loop {
                match chars.next()? {
                    '"' => break,
                    '\\' => match chars.next()? {
                        'n' => decoded.push('\n'),
                        other @ ('"' | '\\') => decoded.push(other),
                        other => {
                            decoded.push('\\');
                            decoded.push(other);
                        }
                    },
                    c => decoded.push(c),
                }
            }
            only_comment(chars.as_str()).then_some(decoded)
        }
        Some('\'') => {
            // Single quotes are literal
            let rest = chars.as_str();
            let end = rest.find('\'')?;
            only_comment(&rest[end + 1..]).then(|| rest[..end].to_string())
        }
        _ => {
            // Unquoted values may carry a trailing comment
            Some(match value.find(" #") {
                Some(idx) => value[..idx].trim_end().to_string(),
                None => value.to_string(),
            })
        }
    }
}

fn only_comment(rest: &str) -> bool {
    let rest = rest.trim_start();
    rest.is_empty() || rest.starts_with('#')
}
