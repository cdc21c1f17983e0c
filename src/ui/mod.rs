//! UI module - handles all TUI rendering
//!
//! Structure:
//! - `draw/` - Draw functions (shell chrome, section content)
//! - `theme.rs` - Color themes and presets
//! - `layout.rs` - Region split and card grid

mod draw;
pub mod layout;
pub mod theme;

// Re-export main draw function
pub use draw::draw;
