//! Display helpers for principals.

/// Principals longer than this are shortened for display.
pub const MAX_DISPLAY_LENGTH: usize = 20;

const SHORTENED_EDGE: usize = 10;

pub const NOT_AUTHENTICATED: &str = "Not authenticated";

/// Formats a principal for display.
///
/// Principals of up to 20 characters are returned as-is. Longer ones keep their first and
/// last 10 characters, joined by `...`.
pub fn format_principal(principal: Option<&str>) -> String {
    let Some(principal) = principal.filter(|p| !p.is_empty()) else {
        return NOT_AUTHENTICATED.to_string();
    };

    let chars: Vec<char> = principal.chars().collect();
    if chars.len() <= MAX_DISPLAY_LENGTH {
        return principal.to_string();
    }

    let head: String = chars[..SHORTENED_EDGE].iter().collect();
    let tail: String = chars[chars.len() - SHORTENED_EDGE..].iter().collect();
    format!("{head}...{tail}")
}

/// The payload handed to a waiting application: `<prefix>:<principal>`.
pub fn handoff_token(app_prefix: &str, principal: &str) -> String {
    format!("{app_prefix}:{principal}")
}
