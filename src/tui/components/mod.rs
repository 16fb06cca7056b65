//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top status bar showing pending count and status
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that own their state and emit one high-level event when the
//! interaction is finished:
//! - `SelectPrompt`: Letter-driven single-choice list (emits `Answer`)
//! - `TextInput`: Single-line question (emits `TextInputEvent`)
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props" (struct fields or
//! constructor arguments), not by reaching into global state. The select
//! prompt's letter gating is a prop too: a resolver closure built from the
//! current `MenuPolicy`.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── text_input.rs    (Single-line question)
//! └── select/          (List prompt: choices, selection, keys, pager, render)
//! ```

pub mod select;
pub mod text_input;
mod title_bar;

pub use select::{Answer, PromptError, SelectConfig, SelectPrompt};
pub use text_input::{TextInput, TextInputEvent};
pub use title_bar::TitleBar;
