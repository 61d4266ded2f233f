//! Service Layer
//!
//! Abstraction over the remote send endpoint and the async plumbing needed
//! to call it from the UI.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │               ComposerState                   │
//! └──────────────────────────────────────────────┘
//!                      │ SendEmailRequest
//!                      ▼
//! ┌──────────────────────────────────────────────┐
//! │  run_in_tokio ──► EmailClient (reqwest POST)  │
//! └──────────────────────────────────────────────┘
//!                      │ Result<()>
//!                      ▼
//!              Notice + state update
//! ```

mod email_client;
mod runtime;

pub use email_client::*;
pub use runtime::*;
