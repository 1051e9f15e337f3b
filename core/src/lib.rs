//! Page behavior for the recipes front end: the persisted light/dark theme
//! switch and the evasive delete button.
//!
//! Everything here is host-agnostic. The browser side lives in the web crate,
//! which implements [`Environment`] over `web-sys` and calls [`install`] once
//! per page load.

pub use cookie::*;
pub use dom::*;
pub use env::*;
pub use error::*;
pub use guard::*;
pub use page::*;
pub use theme::*;

mod cookie;
mod dom;
mod env;
mod error;
mod guard;
mod page;
mod theme;

#[cfg(test)]
mod testing;
