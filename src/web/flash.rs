//! One-shot notices carried in a cookie.
//!
//! A handler replaces the single `notice` slot on its redirect; the next
//! page render shows it and answers with an expired cookie, so the message
//! appears exactly once per client.

use axum::http::{header, HeaderMap};
use axum::response::{IntoResponse, Redirect, Response};

use crate::input::truncate_chars;

pub const COOKIE_NAME: &str = "notice";

/// Longest message kept in a notice. Every char encodes to at most 12
/// cookie bytes, so the cookie stays well under the 4096-byte browser limit.
pub const MAX_NOTICE_CHARS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Info => "info",
            NoticeKind::Error => "error",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "success" => Some(NoticeKind::Success),
            "info" => Some(NoticeKind::Info),
            "error" => Some(NoticeKind::Error),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl AsRef<str>) -> Self {
        Notice {
            kind,
            message: truncate_chars(message.as_ref(), MAX_NOTICE_CHARS),
        }
    }

    pub fn success(message: impl AsRef<str>) -> Self {
        Self::new(NoticeKind::Success, message)
    }

    pub fn info(message: impl AsRef<str>) -> Self {
        Self::new(NoticeKind::Info, message)
    }

    pub fn error(message: impl AsRef<str>) -> Self {
        Self::new(NoticeKind::Error, message)
    }

    /// `Set-Cookie` value that queues this notice
    pub fn to_cookie(&self) -> String {
        let payload = format!("{}|{}", self.kind.as_str(), self.message);
        format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            COOKIE_NAME,
            urlencoding::encode(&payload)
        )
    }

    /// Pending notice from the request's `Cookie` headers, if any
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        cookie_value(headers).and_then(Self::decode)
    }

    fn decode(value: &str) -> Option<Self> {
        let payload = urlencoding::decode(value).ok()?;
        let (kind, message) = payload.split_once('|')?;

        Some(Notice {
            kind: NoticeKind::parse(kind)?,
            message: message.to_string(),
        })
    }
}

/// Raw `notice` cookie value, decodable or not
fn cookie_value(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == COOKIE_NAME)
        .map(|(_, value)| value)
}

/// Whether the request carries a `notice` cookie that must be expired
pub fn has_cookie(headers: &HeaderMap) -> bool {
    cookie_value(headers).is_some()
}

/// `Set-Cookie` value that discards the pending notice
pub fn expired_cookie() -> String {
    format!("{}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax", COOKIE_NAME)
}

/// 303 back to the index page with `notice` queued
pub fn redirect_with(notice: Notice) -> Response {
    ([(header::SET_COOKIE, notice.to_cookie())], Redirect::to("/")).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, StatusCode};

    fn request_headers(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    fn cookie_pair(set_cookie: &str) -> &str {
        set_cookie.split(';').next().unwrap()
    }

    #[test]
    fn test_cookie_round_trip_keeps_punctuation() {
        let notice = Notice::error("Could not add appliance: power_watts must be a number, got \"a|b; c\"");
        let set_cookie = notice.to_cookie();

        let parsed = Notice::from_headers(&request_headers(cookie_pair(&set_cookie)));
        assert_eq!(parsed, Some(notice));
    }

    #[test]
    fn test_finds_notice_among_other_cookies() {
        let set_cookie = Notice::success("Fridge added.").to_cookie();
        let header = format!("theme=dark; {}; lang=es", cookie_pair(&set_cookie));

        let parsed = Notice::from_headers(&request_headers(&header)).unwrap();
        assert_eq!(parsed.kind, NoticeKind::Success);
        assert_eq!(parsed.message, "Fridge added.");
    }

    #[test]
    fn test_missing_or_garbage_cookie() {
        assert_eq!(Notice::from_headers(&HeaderMap::new()), None);
        assert_eq!(Notice::from_headers(&request_headers("notice=")), None);
        assert_eq!(Notice::from_headers(&request_headers("notice=bogus%7Chi")), None);
        assert_eq!(Notice::from_headers(&request_headers("other=1")), None);
    }

    #[test]
    fn test_garbage_cookie_is_still_detected() {
        assert!(has_cookie(&request_headers("notice=garbage")));
        assert!(has_cookie(&request_headers("theme=dark; notice=")));
        assert!(!has_cookie(&request_headers("theme=dark")));
        assert!(!has_cookie(&HeaderMap::new()));
    }

    #[test]
    fn test_long_message_is_capped() {
        let notice = Notice::success(format!("{} added.", "ñ".repeat(5000)));

        assert_eq!(notice.message.chars().count(), MAX_NOTICE_CHARS + 1);
        assert!(notice.message.ends_with('…'));
        assert!(notice.to_cookie().len() < 4096);
    }

    #[test]
    fn test_expired_cookie_clears_slot() {
        let cookie = expired_cookie();
        assert!(cookie.starts_with("notice=;"));
        assert!(cookie.contains("Max-Age=0"));
    }

    #[test]
    fn test_redirect_sets_cookie() {
        let response = redirect_with(Notice::info("Data cleared."));

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
        let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        assert!(set_cookie.starts_with("notice=info%7CData%20cleared."));
    }
}
