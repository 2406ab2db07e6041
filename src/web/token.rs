//! Bearer / DPoP 令牌提取

/// 从 `Authorization` 头的值中提取 Bearer 令牌 (RFC 6750 Section 2.1)
///
/// 方案名不区分大小写；令牌必须符合 `b64token` 语法。
pub fn extract_bearer_token(header_value: &str) -> Option<&str> {
    extract_token(header_value, "Bearer")
}

/// 从 `Authorization` 头的值中提取 DPoP 令牌 (RFC 9449 Section 7.1)
pub fn extract_dpop_token(header_value: &str) -> Option<&str> {
    extract_token(header_value, "DPoP")
}

fn extract_token<'a>(header_value: &'a str, scheme: &str) -> Option<&'a str> {
    let (name, rest) = header_value.trim().split_once(' ')?;
    if !name.eq_ignore_ascii_case(scheme) {
        return None;
    }

    let token = rest.trim_start();
    is_b64token(token).then_some(token)
}

/// `b64token = 1*( ALPHA / DIGIT / "-" / "." / "_" / "~" / "+" / "/" ) *"="`
fn is_b64token(token: &str) -> bool {
    let body = token.trim_end_matches('=');
    !body.is_empty()
        && body
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~' | b'+' | b'/'))
}
