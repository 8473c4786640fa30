//! Renderers for the generated artifacts.
//!
//! - `tailwind`: `module.exports = {...}` theme fragment
//! - `css`: `:root { ... }` custom-property block

pub mod css;
pub mod tailwind;

pub use css::render_stylesheet;
pub use tailwind::{ObjectLiteral, Value, render_tailwind_config};
