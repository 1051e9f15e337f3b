use core::fmt;
use core::str::FromStr;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const fn scheme(self) -> &'static str {
        use Theme::*;
        match self {
            Light => "light",
            Dark => "dark",
        }
    }

    pub const fn toggled(self) -> Self {
        use Theme::*;
        match self {
            Light => Dark,
            Dark => Light,
        }
    }

    /// Theme to switch to given what the root attribute currently holds.
    ///
    /// Only an exact `dark` goes back to light; unset or anything else goes dark.
    pub fn after(current: Option<&str>) -> Self {
        match current.map(str::parse::<Self>) {
            Some(Ok(theme)) => theme.toggled(),
            _ => Self::Dark,
        }
    }
}

impl FromStr for Theme {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(UiError::UnknownTheme(s.to_string())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scheme())
    }
}

/// Applies the saved theme to the document root and flips it on demand.
///
/// After [`restore`](Self::restore) the root attribute is what counts; the
/// cookie is only written to.
pub struct ThemeSwitcher<E: Environment> {
    env: E,
    root: E::Element,
    cookie_name: String,
}

impl<E: Environment> ThemeSwitcher<E> {
    pub fn new(env: E, cookie_name: impl Into<String>) -> Result<Self> {
        let root = env.root()?;
        Ok(Self {
            env,
            root,
            cookie_name: cookie_name.into(),
        })
    }

    /// Theme currently applied on the root, if it is one we know.
    pub fn current(&self) -> Option<Theme> {
        self.root.attribute(Attr::Theme)?.parse().ok()
    }

    /// Reads the saved preference and applies it. Leaves the page default alone
    /// when nothing usable is saved.
    pub fn restore(&self) -> Result<Option<Theme>> {
        let jar = self.env.cookies()?;
        let saved = match self.saved_value(&jar) {
            Ok(Some(value)) => value,
            Ok(None) => {
                log::debug!("no theme preference");
                return Ok(None);
            }
            Err(err) => {
                log::warn!("ignoring saved theme: {}", err);
                return Ok(None);
            }
        };
        let theme = match saved.parse::<Theme>() {
            Ok(theme) => theme,
            Err(err) => {
                log::warn!("ignoring saved theme: {}", err);
                return Ok(None);
            }
        };
        log::debug!("theme-scheme: {}", theme);
        self.root.set_attribute(Attr::Theme, theme.scheme())?;
        Ok(Some(theme))
    }

    /// Looks the cookie up by its plain name, then by the encoded name `toggle` writes.
    fn saved_value(&self, jar: &str) -> Result<Option<String>> {
        if let Some(value) = read_cookie(jar, &self.cookie_name)? {
            return Ok(Some(value));
        }
        let encoded = encode_component(&self.cookie_name);
        if encoded == self.cookie_name {
            return Ok(None);
        }
        read_cookie(jar, &encoded)
    }

    /// Flips the root between light and dark and saves the result.
    pub fn toggle(&self) -> Result<Theme> {
        let current = self.root.attribute(Attr::Theme);
        let theme = Theme::after(current.as_deref());
        self.root.set_attribute(Attr::Theme, theme.scheme())?;
        let cookie = SiteCookie::new(&self.cookie_name, theme.scheme());
        self.env.set_cookie(&cookie.to_string())?;
        log::debug!("theme-scheme: {}", theme);
        Ok(theme)
    }
}
