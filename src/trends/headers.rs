use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, ORIGIN, USER_AGENT};

use crate::utils::error::FetchError;

/// Header carrying the trends API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Build request headers for the trends API
///
/// Always asks for JSON. The API key and origin headers are only added when
/// configured.
///
/// # Examples
///
/// ```
/// use trendscope::trends::headers::build_api_headers;
///
/// let headers = build_api_headers("trendscope/0.1", Some("key"), None).unwrap();
/// assert_eq!(headers.get("x-api-key").unwrap(), "key");
/// ```
pub fn build_api_headers(
    user_agent: &str,
    api_key: Option<&str>,
    origin: Option<&str>,
) -> Result<HeaderMap, FetchError> {
    let mut headers = HeaderMap::new();

    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(user_agent).map_err(|_| FetchError::InvalidHeader("user-agent"))?,
    );

    if let Some(key) = api_key {
        let mut value =
            HeaderValue::from_str(key).map_err(|_| FetchError::InvalidHeader(API_KEY_HEADER))?;
        value.set_sensitive(true);
        headers.insert(HeaderName::from_static(API_KEY_HEADER), value);
    }

    if let Some(origin) = origin {
        headers.insert(
            ORIGIN,
            HeaderValue::from_str(origin).map_err(|_| FetchError::InvalidHeader("origin"))?,
        );
    }

    Ok(headers)
}
