//! HTTP request handlers

pub mod classify;
pub mod classify_file;
pub mod health;
pub mod upload;

use application::LanguageHeaders;
use axum::http::{HeaderMap, header::ACCEPT_LANGUAGE};

/// Header carrying the user's preferred language
pub const USER_LANG_HEADER: &str = "x-user-lang";

/// Collect the language-related headers of a request
pub(crate) fn language_headers(headers: &HeaderMap) -> LanguageHeaders {
    let read = |name| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    LanguageHeaders::new(read(USER_LANG_HEADER), read(ACCEPT_LANGUAGE.as_str()))
}
