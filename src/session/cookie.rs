use axum::http::HeaderMap;

/// Name of the single cookie the console sets. Its presence is what
/// separates the public from the guarded screens.
pub const TOKEN_COOKIE: &str = "token";

//the sign in promises seven days
const TOKEN_TTL: time::Duration = time::Duration::days(7);

pub fn create_token_cookie(token: &str) -> String {
    format!(
        "{}={}; Secure; HttpOnly; SameSite=Strict; Path=/; Max-Age={}",
        TOKEN_COOKIE,
        token,
        TOKEN_TTL.whole_seconds()
    )
}

pub fn clear_token_cookie() -> String {
    format!("{}=; Secure; HttpOnly; SameSite=Strict; Path=/; Max-Age=0", TOKEN_COOKIE)
}

pub fn extract_token_from_cookies(headers: &HeaderMap) -> Option<String> {
    headers
        .get("cookie")?
        .to_str()
        .ok()?
        .split(';')
        .find_map(|cookie| {
            let parts: Vec<&str> = cookie.trim().splitn(2, '=').collect();
            if parts.len() == 2 && parts[0] == TOKEN_COOKIE {
                Some(parts[1].to_string())
            } else {
                None
            }
        })
}
