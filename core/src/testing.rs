//! In-memory page used by the unit tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum Node {
    Root,
    Id(ElementId),
}

#[derive(Default)]
struct NodeState {
    attributes: HashMap<Attr, String>,
    attribute_writes: usize,
    styles: Vec<String>,
}

struct Dom {
    cookie_jar: Vec<(String, String)>,
    written_cookies: Vec<String>,
    nodes: HashMap<Node, NodeState>,
    viewport: Viewport,
    randoms: VecDeque<f64>,
}

impl Default for Dom {
    fn default() -> Self {
        Self {
            cookie_jar: Vec::new(),
            written_cookies: Vec::new(),
            nodes: HashMap::from([(Node::Root, NodeState::default())]),
            viewport: Viewport {
                width: 1024.0,
                height: 768.0,
            },
            randoms: VecDeque::new(),
        }
    }
}

impl Dom {
    fn store_cookie(&mut self, pair: &str) {
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        match self.cookie_jar.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.cookie_jar.push((name.to_string(), value.to_string())),
        }
    }
}

type Handler = Rc<RefCell<Box<dyn FnMut()>>>;

/// Fake browser: a root element, optional elements by id, a cookie jar that
/// behaves like `document.cookie`, and scripted randomness.
#[derive(Clone, Default)]
pub(crate) struct FakeEnv {
    dom: Rc<RefCell<Dom>>,
    listeners: Rc<RefCell<Vec<(Node, Handler)>>>,
}

#[derive(Clone)]
pub(crate) struct FakeElement {
    dom: Rc<RefCell<Dom>>,
    node: Node,
}

impl FakeEnv {
    pub(crate) fn with_cookies(jar: &str) -> Self {
        let env = Self::default();
        {
            let mut dom = env.dom.borrow_mut();
            for pair in jar.split("; ").filter(|pair| !pair.is_empty()) {
                dom.store_cookie(pair);
            }
        }
        env
    }

    /// A fresh page that only keeps the cookie jar, like a reload.
    pub(crate) fn reload(&self) -> Self {
        let env = Self::default();
        env.dom.borrow_mut().cookie_jar = self.dom.borrow().cookie_jar.clone();
        env
    }

    pub(crate) fn add_element(&self, id: ElementId) -> FakeElement {
        self.dom
            .borrow_mut()
            .nodes
            .entry(Node::Id(id))
            .or_default();
        self.element(Node::Id(id))
    }

    pub(crate) fn set_viewport(&self, viewport: Viewport) {
        self.dom.borrow_mut().viewport = viewport;
    }

    /// Queues values for [`Environment::random`]; once drained it returns 0.5.
    pub(crate) fn push_randoms(&self, values: &[f64]) {
        self.dom.borrow_mut().randoms.extend(values);
    }

    pub(crate) fn root_attribute(&self, attr: Attr) -> Option<String> {
        self.element(Node::Root).attribute(attr)
    }

    pub(crate) fn set_root_attribute(&self, attr: Attr, value: &str) {
        self.dom
            .borrow_mut()
            .nodes
            .entry(Node::Root)
            .or_default()
            .attributes
            .insert(attr, value.to_string());
    }

    pub(crate) fn root_writes(&self) -> usize {
        self.dom.borrow().nodes[&Node::Root].attribute_writes
    }

    pub(crate) fn attribute(&self, id: ElementId, attr: Attr) -> Option<String> {
        self.element(Node::Id(id)).attribute(attr)
    }

    pub(crate) fn styles(&self, id: ElementId) -> Vec<String> {
        self.dom
            .borrow()
            .nodes
            .get(&Node::Id(id))
            .map(|node| node.styles.clone())
            .unwrap_or_default()
    }

    pub(crate) fn written_cookies(&self) -> Vec<String> {
        self.dom.borrow().written_cookies.clone()
    }

    pub(crate) fn listener_count(&self, id: ElementId) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|(node, _)| *node == Node::Id(id))
            .count()
    }

    /// Dispatches a click to every handler registered on `id`.
    pub(crate) fn click(&self, id: ElementId) {
        let handlers: Vec<Handler> = self
            .listeners
            .borrow()
            .iter()
            .filter(|(node, _)| *node == Node::Id(id))
            .map(|(_, handler)| handler.clone())
            .collect();
        for handler in handlers {
            let mut handler = handler.borrow_mut();
            (&mut **handler)();
        }
    }

    fn element(&self, node: Node) -> FakeElement {
        FakeElement {
            dom: self.dom.clone(),
            node,
        }
    }
}

impl Element for FakeElement {
    fn attribute(&self, attr: Attr) -> Option<String> {
        self.dom
            .borrow()
            .nodes
            .get(&self.node)
            .and_then(|node| node.attributes.get(&attr).cloned())
    }

    fn set_attribute(&self, attr: Attr, value: &str) -> Result<()> {
        let mut dom = self.dom.borrow_mut();
        let node = dom.nodes.entry(self.node).or_default();
        node.attributes.insert(attr, value.to_string());
        node.attribute_writes += 1;
        Ok(())
    }

    fn set_style(&self, css: &str) -> Result<()> {
        self.dom
            .borrow_mut()
            .nodes
            .entry(self.node)
            .or_default()
            .styles
            .push(css.to_string());
        Ok(())
    }
}

impl Environment for FakeEnv {
    type Element = FakeElement;

    fn cookies(&self) -> Result<String> {
        let dom = self.dom.borrow();
        let pairs: Vec<String> = dom
            .cookie_jar
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect();
        Ok(pairs.join("; "))
    }

    fn set_cookie(&self, cookie: &str) -> Result<()> {
        let mut dom = self.dom.borrow_mut();
        dom.written_cookies.push(cookie.to_string());
        let pair = cookie.split(';').next().unwrap_or_default();
        dom.store_cookie(pair);
        Ok(())
    }

    fn root(&self) -> Result<FakeElement> {
        Ok(self.element(Node::Root))
    }

    fn element_by_id(&self, id: ElementId) -> Option<FakeElement> {
        self.dom
            .borrow()
            .nodes
            .contains_key(&Node::Id(id))
            .then(|| self.element(Node::Id(id)))
    }

    fn viewport(&self) -> Result<Viewport> {
        Ok(self.dom.borrow().viewport)
    }

    fn random(&self) -> f64 {
        self.dom.borrow_mut().randoms.pop_front().unwrap_or(0.5)
    }

    fn on_click(&self, target: &FakeElement, handler: Box<dyn FnMut()>) {
        self.listeners
            .borrow_mut()
            .push((target.node, Rc::new(RefCell::new(handler))));
    }
}
