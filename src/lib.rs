//! Shadegen Library
//!
//! This module exposes the core components of the shade generator
//! for testing and potential reuse.

pub mod collector;
pub mod config;
pub mod emit;
pub mod format;
pub mod hex;
pub mod prompt;
pub mod registry;
pub mod shades;
pub mod traits;

// Re-export commonly used types
pub use collector::{CollectError, Collection, ColorCollector, ColorEntry, MAX_COLORS};
pub use crate::config::AppConfig;
pub use emit::{Artifact, EmitError, EmitReport, FileEmitter, OutputConflict};
pub use format::{render_stylesheet, render_tailwind_config};
pub use hex::{HexError, Rgb, hex_to_rgb, is_valid_hex};
pub use registry::{Palette, StyleRegistry, ThemeRegistry};
pub use shades::{ShadeMap, TintShadeDeriver};
pub use traits::{LinePrompter, MockPrompter, MockShadeDeriver, PromptError, Prompter, ShadeDeriver};
