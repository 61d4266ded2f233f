//! View Components
//!
//! UI components for the Mail Composer window.
//!
//! ## Layout Structure
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                  TitleBar                   │
//! ├─────────────────────────────────────────────┤
//! │                                             │
//! │            ┌───────────────────┐            │
//! │            │   ComposerView    │            │
//! │            │  recipient        │            │
//! │            │  subject          │            │
//! │            │  message          │            │
//! │            │  [ Send Email ]   │            │
//! │            └───────────────────┘            │
//! │                                             │
//! └─────────────────────────────────────────────┘
//! ```

mod composer_view;
mod title_bar;

pub use composer_view::*;
pub use title_bar::*;
