//! Domain - Pure Data Structures and Form Logic
//!
//! These types don't depend on GPUI and represent the composer itself.

pub mod composer;
pub mod draft;
pub mod notice;
pub mod validation;
