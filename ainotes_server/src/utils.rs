use axum::extract::FromRequest;
use diesel_async::{AsyncPgConnection, pooled_connection::AsyncDieselConnectionManager};

use crate::error::ApiError;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub type Pool = bb8::Pool<AsyncDieselConnectionManager<AsyncPgConnection>>;

pub type Conn<'a> = bb8::PooledConnection<'a, AsyncDieselConnectionManager<AsyncPgConnection>>;

/// JSON body extractor whose rejections use the `{error}` response shape.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

pub fn default_port() -> u16 {
    5000
}

pub fn default_store() -> bool {
    true
}

/// Map Diesel errors into an API error.
pub fn diesel_error(err: diesel::result::Error) -> ApiError {
    match err {
        diesel::result::Error::NotFound => ApiError::note_not_found(),
        _ => internal_error(err),
    }
}

/// Map any error into an internal API error.
pub fn internal_error<E>(err: E) -> ApiError
where
    E: std::error::Error,
{
    ApiError::Internal(err.to_string())
}

/// Take at most `max_chars` characters from the start of `s`.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("hello", 3), "hel");
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("📚📚📚", 2), "📚📚");
        assert_eq!(truncate_chars("", 2), "");
    }

    #[test]
    fn diesel_not_found_is_note_not_found() {
        let err = diesel_error(diesel::result::Error::NotFound);
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
