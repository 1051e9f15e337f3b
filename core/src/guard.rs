use crate::*;

/// Where a guarded control stands after some number of relocations.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GuardState {
    /// Still dodging; holds how many times it has moved so far.
    Evading(u32),
    /// Done dodging, clicks go through.
    Armed,
}

impl GuardState {
    pub const fn new(relocations: u32, threshold: u32) -> Self {
        if relocations < threshold {
            Self::Evading(relocations)
        } else {
            Self::Armed
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum GuardAction {
    Relocated(Offset),
    /// The stored target was copied into `href`.
    Released(String),
}

/// Keeps a dangerous control out of reach for its first few clicks.
///
/// Each click while evading pins the control somewhere random in the viewport.
/// Once `threshold` relocations have happened every further click copies
/// `data-href` into `href` so the browser's default action can follow it.
pub struct EvasiveGuard<E: Environment> {
    env: E,
    control: E::Element,
    threshold: u32,
    relocations: u32,
}

impl<E: Environment> EvasiveGuard<E> {
    pub fn new(env: E, control: E::Element, threshold: u32) -> Self {
        Self {
            env,
            control,
            threshold,
            relocations: 0,
        }
    }

    pub const fn state(&self) -> GuardState {
        GuardState::new(self.relocations, self.threshold)
    }

    pub fn click(&mut self) -> Result<GuardAction> {
        match self.state() {
            GuardState::Evading(_) => {
                // viewport is re-read on every click, the window may have been resized
                let viewport = self.env.viewport()?;
                let top = self.env.random();
                let right = self.env.random();
                let offset = Offset::sample(viewport, top, right);
                self.control.set_style(&offset.css())?;
                self.relocations += 1;
                log::debug!(
                    "guard relocated ({}/{}): {:?}",
                    self.relocations,
                    self.threshold,
                    offset
                );
                Ok(GuardAction::Relocated(offset))
            }
            GuardState::Armed => {
                let href = self
                    .control
                    .attribute(Attr::DataHref)
                    .ok_or(UiError::MissingAttribute(Attr::DataHref))?;
                self.control.set_attribute(Attr::Href, &href)?;
                Ok(GuardAction::Released(href))
            }
        }
    }
}
