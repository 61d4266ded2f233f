//! Mail Composer Library
//!
//! A single-window client that composes a plain-text email and hands it to an
//! HTTP send endpoint.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod constants;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod logging;
pub mod services;
pub mod states;
pub mod views;
