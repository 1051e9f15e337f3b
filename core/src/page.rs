use crate::*;

/// Names and limits the page behavior runs with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageConfig {
    /// Cookie holding the theme preference.
    pub theme_cookie: String,
    /// How many times the delete button moves before it lets a click through.
    pub evasion_threshold: u32,
}

impl PageConfig {
    pub const THEME_COOKIE: &'static str = "recipes_theme";
    pub const EVASION_THRESHOLD: u32 = 3;
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            theme_cookie: Self::THEME_COOKIE.to_string(),
            evasion_threshold: Self::EVASION_THRESHOLD,
        }
    }
}

/// What [`install`] found and bound on the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Installed {
    pub restored_theme: Option<Theme>,
    pub theme_toggle: bool,
    pub delete_guard: bool,
}

/// Restores the saved theme and wires both click handlers.
///
/// Either element may be missing from the page, in which case its handler is
/// simply not registered. Failures inside handlers are logged, never raised.
pub fn install<E: Environment>(env: E, config: &PageConfig) -> Result<Installed> {
    let switcher = ThemeSwitcher::new(env.clone(), config.theme_cookie.as_str())?;
    let restored_theme = switcher.restore()?;

    let theme_toggle = match env.element_by_id(ElementId::ThemeToggle) {
        Some(toggle) => {
            env.on_click(
                &toggle,
                Box::new(move || {
                    if let Err(err) = switcher.toggle() {
                        log::error!("failed to toggle theme: {}", err);
                    }
                }),
            );
            true
        }
        None => {
            log::debug!("no #{} on page", ElementId::ThemeToggle.id());
            false
        }
    };

    let delete_guard = match env.element_by_id(ElementId::DeleteButton) {
        Some(control) => {
            let mut guard =
                EvasiveGuard::new(env.clone(), control.clone(), config.evasion_threshold);
            env.on_click(
                &control,
                Box::new(move || {
                    if let Err(err) = guard.click() {
                        log::error!("delete button: {}", err);
                    }
                }),
            );
            true
        }
        None => {
            log::debug!("no #{} on page", ElementId::DeleteButton.id());
            false
        }
    };

    Ok(Installed {
        restored_theme,
        theme_toggle,
        delete_guard,
    })
}
