//! Application layer.
//!
//! # Structure
//!
//! - `document.rs` - The open file: backing path, display name, dirty flag
//! - `debounce.rs` / `preview.rs` / `styles.rs` - The render pipeline:
//!   edit burst -> quiet period -> Markdown to HTML -> themed document
//! - `ai.rs` - Gemini assistant bridge (key state machine + blocking calls)
//! - `export.rs` - Self-contained HTML export
//! - `text_ops.rs` - Search primitives for the find bar
//! - `state.rs` - Main application coordinator

pub mod ai;
pub mod debounce;
pub mod document;
pub mod error;
pub mod export;
pub mod messages;
pub mod preview;
pub mod state;
pub mod styles;
pub mod text_ops;

// Re-exports for convenient external access
pub use ai::AiBridge;
pub use debounce::Debouncer;
pub use document::Document;
pub use error::{AppError, Result};
pub use messages::Message;
pub use styles::{StyleSheets, Theme};
