use gloo::events::EventListener;
use gloo::utils::{document, window};
use recipes_ui_core::{Attr, Element, ElementId, Environment, Result, UiError, Viewport};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlDocument, HtmlElement};

fn dom_error(err: JsValue) -> UiError {
    UiError::Dom(format!("{:?}", err))
}

fn html_document() -> Result<HtmlDocument> {
    document()
        .dyn_into::<HtmlDocument>()
        .map_err(|_| UiError::Dom("not an HTML document".to_string()))
}

fn dimension(value: core::result::Result<JsValue, JsValue>) -> Result<f64> {
    value
        .map_err(dom_error)?
        .as_f64()
        .ok_or_else(|| UiError::Dom("window dimension is not a number".to_string()))
}

/// Handle to a live DOM element.
#[derive(Clone, Debug, PartialEq)]
pub struct BrowserElement(web_sys::Element);

impl BrowserElement {
    pub fn inner(&self) -> &web_sys::Element {
        &self.0
    }
}

impl Element for BrowserElement {
    fn attribute(&self, attr: Attr) -> Option<String> {
        self.0.get_attribute(attr.name())
    }

    fn set_attribute(&self, attr: Attr, value: &str) -> Result<()> {
        self.0.set_attribute(attr.name(), value).map_err(dom_error)
    }

    fn set_style(&self, css: &str) -> Result<()> {
        let html = self
            .0
            .dyn_ref::<HtmlElement>()
            .ok_or_else(|| UiError::Dom(format!("<{}> has no inline style", self.0.tag_name())))?;
        html.style().set_css_text(css);
        Ok(())
    }
}

/// The current page, reached through the `window` and `document` globals.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BrowserEnv;

impl Environment for BrowserEnv {
    type Element = BrowserElement;

    fn cookies(&self) -> Result<String> {
        html_document()?.cookie().map_err(dom_error)
    }

    fn set_cookie(&self, cookie: &str) -> Result<()> {
        html_document()?.set_cookie(cookie).map_err(dom_error)
    }

    fn root(&self) -> Result<BrowserElement> {
        document()
            .document_element()
            .map(BrowserElement)
            .ok_or_else(|| UiError::Dom("document has no root element".to_string()))
    }

    fn element_by_id(&self, id: ElementId) -> Option<BrowserElement> {
        document().get_element_by_id(id.id()).map(BrowserElement)
    }

    fn viewport(&self) -> Result<Viewport> {
        let window = window();
        Ok(Viewport {
            width: dimension(window.inner_width())?,
            height: dimension(window.inner_height())?,
        })
    }

    fn random(&self) -> f64 {
        js_sys::Math::random()
    }

    fn on_click(&self, target: &BrowserElement, mut handler: Box<dyn FnMut()>) {
        // lives as long as the page
        EventListener::new(&target.0, "click", move |_| handler()).forget();
    }
}
