use thiserror::Error;

use crate::Attr;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    #[error("DOM call failed: {0}")]
    Dom(String),
    #[error("Cookie value is not valid percent-encoded UTF-8: {0:?}")]
    InvalidEncoding(String),
    #[error("Cookie name cannot be searched for: {0:?}")]
    InvalidCookieName(String),
    #[error("Unknown theme: {0:?}")]
    UnknownTheme(String),
    #[error("Element has no {} attribute", .0.name())]
    MissingAttribute(Attr),
}

pub type Result<T> = core::result::Result<T, UiError>;
