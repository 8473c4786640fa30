//! In-memory registries built during collection and consumed by the
//! formatters.
//!
//! Both registries are keyed by color name in entry order. Re-using a name
//! replaces the earlier color in place.

use indexmap::IndexMap;

use crate::hex::{HexError, Rgb, hex_to_rgb};
use crate::shades::ShadeMap;

/// Config key that aliases a color's base shade.
pub const DEFAULT_KEY: &str = "DEFAULT";

/// Shade that `DEFAULT` always points at.
pub const BASE_SHADE: &str = "500";

/// Config key to `rgb(var(...) / <alpha-value>)` expression.
pub type ConfigVariableSet = IndexMap<String, String>;

/// Shade label to `--color-<name>-<shade>: r g b;` declaration.
pub type CssVariableSet = IndexMap<String, String>;

/// `--color-<name>-<shade>`
pub fn variable_name(color: &str, shade: &str) -> String {
    format!("--color-{}-{}", color, shade)
}

/// Config value referencing a custom property, with an alpha placeholder
/// filled in by the consuming framework.
pub fn reference_expression(color: &str, shade: &str) -> String {
    format!(
        "rgb(var({}) / <alpha-value>)",
        variable_name(color, shade)
    )
}

/// Custom-property declaration holding a space separated RGB triple.
pub fn declaration(color: &str, shade: &str, rgb: Rgb) -> String {
    format!("{}: {};", variable_name(color, shade), rgb)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeRegistry {
    colors: IndexMap<String, ConfigVariableSet>,
}

impl ThemeRegistry {
    pub fn insert(&mut self, name: String, set: ConfigVariableSet) {
        self.colors.insert(name, set);
    }

    pub fn get(&self, name: &str) -> Option<&ConfigVariableSet> {
        self.colors.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ConfigVariableSet)> {
        self.colors.iter()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleRegistry {
    colors: IndexMap<String, CssVariableSet>,
}

impl StyleRegistry {
    pub fn insert(&mut self, name: String, set: CssVariableSet) {
        self.colors.insert(name, set);
    }

    pub fn get(&self, name: &str) -> Option<&CssVariableSet> {
        self.colors.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &CssVariableSet)> {
        self.colors.iter()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Both registries, always updated together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    pub theme: ThemeRegistry,
    pub styles: StyleRegistry,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one color's shades in both registries.
    ///
    /// Shades are converted before either registry is touched, so a bad hex
    /// value leaves the palette unchanged.
    pub fn add_color(&mut self, name: &str, shades: &ShadeMap) -> Result<(), HexError> {
        let mut config_set = ConfigVariableSet::new();
        let mut css_set = CssVariableSet::new();

        for (shade, hex) in shades {
            let rgb = hex_to_rgb(hex)?;
            config_set.insert(shade.clone(), reference_expression(name, shade));
            css_set.insert(shade.clone(), declaration(name, shade, rgb));
        }

        if !shades.is_empty() {
            config_set.insert(
                DEFAULT_KEY.to_string(),
                reference_expression(name, BASE_SHADE),
            );
        }

        self.theme.insert(name.to_string(), config_set);
        self.styles.insert(name.to_string(), css_set);
        Ok(())
    }

    /// Number of distinct color names recorded.
    pub fn len(&self) -> usize {
        self.theme.len()
    }

    pub fn is_empty(&self) -> bool {
        self.theme.is_empty()
    }
}
