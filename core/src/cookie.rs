use core::fmt;
use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use regex::Regex;

use crate::*;

/// Everything except what `encodeURIComponent` leaves alone.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

/// Inverse of [`encode_component`].
///
/// Stray `%` sequences that are not valid escapes are kept verbatim; only a
/// result that is not UTF-8 is rejected.
pub fn decode_component(input: &str) -> Result<String> {
    percent_decode_str(input)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|_| UiError::InvalidEncoding(input.to_string()))
}

/// Finds the raw (still encoded) value of cookie `name` in a `document.cookie`
/// string.
pub fn find_cookie<'a>(jar: &'a str, name: &str) -> Result<Option<&'a str>> {
    let pattern = format!("(?:^|; ){}=([^;]*)", regex::escape(name));
    let re =
        Regex::new(&pattern).map_err(|_| UiError::InvalidCookieName(name.to_string()))?;
    Ok(re
        .captures(jar)
        .and_then(|captures| captures.get(1))
        .map(|value| value.as_str()))
}

/// Finds and decodes the value of cookie `name`.
pub fn read_cookie(jar: &str, name: &str) -> Result<Option<String>> {
    find_cookie(jar, name)?.map(decode_component).transpose()
}

/// A session cookie scoped to the whole site, rendered as the string assigned
/// to `document.cookie`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteCookie<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

impl<'a> SiteCookie<'a> {
    pub const fn new(name: &'a str, value: &'a str) -> Self {
        Self { name, value }
    }
}

impl fmt::Display for SiteCookie<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={}; path=/",
            encode_component(self.name),
            encode_component(self.value)
        )
    }
}
