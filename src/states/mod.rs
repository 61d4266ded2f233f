//! State Management Layer
//!
//! Centralized application state using GPUI's Entity system.
//! Follows a unidirectional data flow pattern:
//!
//! ```text
//! Input Change → ComposerState::update_field → Draft
//! Send Action → ComposerState::submit → spawn Send → finish_submit → emit → UI Refresh
//! ```

mod app;
mod composer;
mod i18n;

pub use app::*;
pub use composer::*;
pub use i18n::*;
