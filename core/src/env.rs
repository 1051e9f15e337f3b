use crate::*;

/// A DOM element as seen by the page behavior.
///
/// Methods take `&self`: hosts hand out cheap handles to shared nodes, the way
/// `web_sys::Element` does.
pub trait Element: Clone + 'static {
    fn attribute(&self, attr: Attr) -> Option<String>;

    fn set_attribute(&self, attr: Attr, value: &str) -> Result<()>;

    /// Replaces the element's inline style.
    fn set_style(&self, css: &str) -> Result<()>;
}

/// Everything the page behavior needs from the browser.
pub trait Environment: Clone + 'static {
    type Element: Element;

    /// The raw `document.cookie` string, `name=value` pairs joined by `"; "`.
    fn cookies(&self) -> Result<String>;

    /// Writes one `Set-Cookie`-style assignment into the cookie store.
    fn set_cookie(&self, cookie: &str) -> Result<()>;

    /// The document root (`<html>`).
    fn root(&self) -> Result<Self::Element>;

    fn element_by_id(&self, id: ElementId) -> Option<Self::Element>;

    /// Current inner dimensions of the window.
    fn viewport(&self) -> Result<Viewport>;

    /// Uniform sample from `[0, 1)`.
    fn random(&self) -> f64;

    /// Runs `handler` on every click on `target` for the rest of the page's life.
    fn on_click(&self, target: &Self::Element, handler: Box<dyn FnMut()>);
}
