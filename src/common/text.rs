//! Text manipulation utilities

/// Capitalizes the first character of a string
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Converts a CamelCase identifier to snake_case. Consecutive uppercase
/// letters are treated as one run, so `HTTPServer` becomes `httpserver`.
pub fn snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;
    for c in s.chars() {
        if c.is_uppercase() {
            if prev_lower {
                out.push('_');
            }
            for lc in c.to_lowercase() {
                out.push(lc);
            }
            prev_lower = false;
        } else {
            prev_lower = c.is_lowercase() || c.is_ascii_digit();
            out.push(c);
        }
    }
    out
}

/// Splits a module-qualified identifier into (namespace, short name).
/// The namespace is empty when the identifier carries no `::` separator.
pub fn split_identifier(identifier: &str) -> (String, String) {
    match identifier.rsplit_once("::") {
        Some((namespace, short)) => (namespace.to_string(), short.to_string()),
        None => (String::new(), identifier.to_string()),
    }
}
