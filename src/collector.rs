//! Interactive color collection.
//!
//! Each round asks for a color name, a hex value and whether to continue,
//! derives the shade scale and records it in both registries. At most
//! [`MAX_COLORS`] rounds run.

use std::sync::Arc;

use thiserror::Error;

use crate::{
    hex::{HexError, hex_to_rgb, is_valid_hex, normalize_hex},
    prompt::{Field, FieldKind, prompt_sequence},
    registry::Palette,
    traits::{PromptError, Prompter, ShadeDeriver},
};

/// Hard cap on collection rounds.
pub const MAX_COLORS: usize = 5;

pub const COLOR_NAME_FIELD: &str = "colorName";
pub const COLOR_HEX_FIELD: &str = "colorHex";
pub const ADD_ANOTHER_FIELD: &str = "addAnother";

/// The three questions asked each round, in order.
pub const COLOR_QUESTIONS: [Field; 3] = [
    Field {
        name: COLOR_NAME_FIELD,
        message: "Enter the name for the color:",
        kind: FieldKind::Text {
            validate: validate_color_name,
        },
    },
    Field {
        name: COLOR_HEX_FIELD,
        message: "Enter the color in HEX format without #:",
        kind: FieldKind::Text {
            validate: validate_color_hex,
        },
    },
    Field {
        name: ADD_ANOTHER_FIELD,
        message: "Do you want to add another color?",
        kind: FieldKind::Confirm { default: false },
    },
];

pub fn validate_color_name(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        Err("Color name cannot be empty.")
    } else {
        Ok(())
    }
}

pub fn validate_color_hex(value: &str) -> Result<(), &'static str> {
    if is_valid_hex(value) {
        Ok(())
    } else {
        Err("Please enter a valid HEX color.")
    }
}

#[derive(Debug, Error)]
pub enum CollectError {
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error("color {name:?} has an unusable hex value: {source}")]
    Hex {
        name: String,
        #[source]
        source: HexError,
    },
}

/// One validated answer pair. `hex` is normalized to lowercase `rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorEntry {
    pub name: String,
    pub hex: String,
}

/// Everything gathered by one collection run.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    /// Accepted entries in the order they were given, duplicates included.
    pub entries: Vec<ColorEntry>,
    pub palette: Palette,
}

/// Drives the question loop and builds the palette.
pub struct ColorCollector {
    deriver: Arc<dyn ShadeDeriver>,
}

impl ColorCollector {
    pub fn new(deriver: Arc<dyn ShadeDeriver>) -> Self {
        Self { deriver }
    }

    /// Run rounds until the user declines to continue or [`MAX_COLORS`]
    /// rounds have completed.
    pub fn collect(&self, prompter: &mut dyn Prompter) -> Result<Collection, CollectError> {
        let mut collection = Collection::default();

        while collection.entries.len() < MAX_COLORS {
            let answers = prompt_sequence(&mut *prompter, &COLOR_QUESTIONS)?;
            let name = answers.text(COLOR_NAME_FIELD)?.to_string();
            let add_another = answers.confirm(ADD_ANOTHER_FIELD)?;

            let hex = normalize_hex(answers.text(COLOR_HEX_FIELD)?).map_err(|source| {
                CollectError::Hex {
                    name: name.clone(),
                    source,
                }
            })?;

            self.record(&mut collection, ColorEntry { name, hex })?;

            if !add_another {
                break;
            }
        }

        if collection.entries.len() == MAX_COLORS {
            tracing::info!("Reached the limit of {} colors", MAX_COLORS);
        }

        Ok(collection)
    }

    fn record(&self, collection: &mut Collection, entry: ColorEntry) -> Result<(), CollectError> {
        let hex_error = |source| CollectError::Hex {
            name: entry.name.clone(),
            source,
        };

        let base = hex_to_rgb(&entry.hex).map_err(hex_error)?;
        let shades = self.deriver.derive(base);
        collection
            .palette
            .add_color(&entry.name, &shades)
            .map_err(hex_error)?;

        tracing::debug!(
            "Recorded color {:?} (#{}) with {} shades",
            entry.name,
            entry.hex,
            shades.len()
        );
        collection.entries.push(entry);
        Ok(())
    }
}
