use core::fmt;

/// Attributes the page behavior reads or writes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Attr {
    /// Styling hook on the document root, consumed by the stylesheet.
    Theme,
    /// The effective navigation target of a link.
    Href,
    /// Where a guarded link should go once it gives up evading.
    DataHref,
}

impl Attr {
    pub const fn name(self) -> &'static str {
        use Attr::*;
        match self {
            Theme => "data-bs-theme",
            Href => "href",
            DataHref => "data-href",
        }
    }
}

/// Elements the page behavior binds to. Both are optional on any given page.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementId {
    ThemeToggle,
    DeleteButton,
}

impl ElementId {
    pub const fn id(self) -> &'static str {
        use ElementId::*;
        match self {
            ThemeToggle => "theme",
            DeleteButton => "offcanvasDeleteButton",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Absolute placement measured from the top and right edges, in pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Offset {
    pub top: f64,
    pub right: f64,
}

impl Offset {
    /// Scales two unit samples from `[0, 1)` onto the viewport, height first.
    pub fn sample(viewport: Viewport, top_unit: f64, right_unit: f64) -> Self {
        Self {
            top: top_unit * viewport.height,
            right: right_unit * viewport.width,
        }
    }

    pub fn is_within(&self, viewport: Viewport) -> bool {
        (0.0..viewport.height).contains(&self.top) && (0.0..viewport.width).contains(&self.right)
    }

    /// Inline style that pins an element at this offset.
    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "position: absolute; top: {}px; right: {}px;",
            self.top, self.right
        )
    }
}
