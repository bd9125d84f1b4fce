//! Truthy/falsy token parsing.

const TRUE_TOKENS: [&str; 3] = ["true", "1", "yes"];
const FALSE_TOKENS: [&str; 3] = ["false", "0", "no"];

/// Lenient boolean parse: recognized truthy tokens are `true`, everything
/// else (falsy tokens, unknown tokens, blanks, absent) is `false`.
pub fn normalize_bool(raw: Option<&str>) -> bool {
    parse_bool_strict(raw).unwrap_or(false)
}

/// Recognize a boolean token, or `None` when the token is not one of
/// `true/1/yes` or `false/0/no` (ignoring case and surrounding whitespace).
pub fn parse_bool_strict(raw: Option<&str>) -> Option<bool> {
    let token = raw?.trim().to_ascii_lowercase();
    if TRUE_TOKENS.contains(&token.as_str()) {
        Some(true)
    } else if FALSE_TOKENS.contains(&token.as_str()) {
        Some(false)
    } else {
        None
    }
}
