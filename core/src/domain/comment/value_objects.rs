pub const DEFAULT_COMMENT_LIMIT: u64 = 50;
pub const MAX_COMMENT_LIMIT: u64 = 200;

#[derive(Debug, Clone, Default)]
pub struct GetCommentsFilter {
    pub food_id: Option<String>,
    /// Raw `limit` query value.
    pub limit: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateCommentInput {
    pub food_id: Option<String>,
    pub text: Option<String>,
    pub reply_to: Option<String>,
}

/// Parses a page size from its leading integer, so `"20abc"` is 20.
/// Missing, unparsable or non-positive values fall back to the default;
/// anything above the maximum is clamped.
pub fn resolve_comment_limit(raw: Option<&str>) -> u64 {
    raw.and_then(leading_integer)
        .filter(|limit| *limit > 0)
        .map(|limit| (limit as u64).min(MAX_COMMENT_LIMIT))
        .unwrap_or(DEFAULT_COMMENT_LIMIT)
}

fn leading_integer(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let (negative, rest) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }

    let magnitude = rest[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
