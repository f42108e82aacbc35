//! # Styled Template Rendering
//!
//! Templates (minijinja) describe structure; styles (`console::Style`) are
//! registered separately under semantic names and applied with the `style`
//! filter:
//!
//! ```jinja
//! {{ entry.title | style("card-title") }}
//! ```
//!
//! When colour is off the filter passes text through unchanged, so the same
//! template serves styled terminals, pipes and tests. An unknown style name
//! prefixes the text with [`MISSING_STYLE_INDICATOR`] in both modes, which
//! makes template typos visible without breaking output.

use console::Style;
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

#[derive(Clone)]
pub struct Styles {
    styles: HashMap<String, Style>,
    missing_indicator: String,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            styles: HashMap::new(),
            missing_indicator: MISSING_STYLE_INDICATOR.to_string(),
        }
    }
}

impl Styles {
    /// Adds a named style, replacing any existing one.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.styles.get(name) {
            Some(style) => style.apply_to(text).to_string(),
            None => self.mark_missing(text),
        }
    }

    /// Like [`Styles::apply`] without ANSI codes.
    pub fn apply_plain(&self, name: &str, text: &str) -> String {
        if self.styles.contains_key(name) {
            text.to_string()
        } else {
            self.mark_missing(text)
        }
    }

    fn mark_missing(&self, text: &str) -> String {
        if self.missing_indicator.is_empty() {
            text.to_string()
        } else {
            format!("{} {}", self.missing_indicator, text)
        }
    }
}

#[derive(Clone, Default)]
pub struct Theme {
    styles: Styles,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles = self.styles.add(name, style);
        self
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    /// Asks the desktop for its light/dark preference; light when unknown.
    pub fn detect() -> Self {
        match dark_light::detect() {
            dark_light::Mode::Dark => ColorMode::Dark,
            _ => ColorMode::Light,
        }
    }
}

/// A light and a dark variant of the same semantic styles.
#[derive(Clone)]
pub struct AdaptiveTheme {
    light: Theme,
    dark: Theme,
}

impl AdaptiveTheme {
    pub fn new(light: Theme, dark: Theme) -> Self {
        Self { light, dark }
    }

    pub fn resolve(&self, mode: ColorMode) -> &Theme {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }
}

/// A minijinja environment with pre-registered templates and the `style`
/// filter bound to one theme.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn with_color(theme: &Theme, use_color: bool) -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        register_style_filter(&mut env, theme.styles().clone(), use_color);
        Self { env }
    }

    /// Compiles and registers a template; syntax errors surface here.
    pub fn add_template(&mut self, name: &'static str, source: &'static str) -> Result<(), Error> {
        self.env.add_template(name, source)
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        self.env.get_template(name)?.render(data)
    }
}

fn register_style_filter(env: &mut Environment<'static>, styles: Styles, use_color: bool) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        if use_color {
            styles.apply(&name, &text)
        } else {
            styles.apply_plain(&name, &text)
        }
    });
}

/// Nearest ANSI 256-colour palette index for an RGB triplet.
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}
