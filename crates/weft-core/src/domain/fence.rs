//! Code-fence stripping.
//!
//! Model responses frequently wrap their payload in a single fenced code
//! block (```` ```html ... ``` ````). This transform removes exactly one
//! enclosing fence pair - optional language tag included - and trims
//! whitespace. It is not, and must not grow into, a markup parser: partial
//! fences, nested fences, and everything else pass through untouched.

/// Strip one enclosing triple-backtick fence pair, if present, then trim.
///
/// Both the opening and the closing fence must be present for anything to be
/// removed; a lone fence leaves the input as-is (modulo trimming).
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Opening fence line may carry a language tag; the body starts after the
    // first newline.
    let Some(newline) = rest.find('\n') else {
        return trimmed;
    };
    let body = &rest[newline + 1..];
    let Some(body) = body.strip_suffix("```") else {
        return trimmed;
    };

    body.trim()
}

// ── tests ─────────────────────────────────────────────────────────────────────
