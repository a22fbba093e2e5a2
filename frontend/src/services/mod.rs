//! Browser-facing services.
//!
//! # Services
//!
//! - [`contact`] - WhatsApp deep links and the external-link policy
//! - [`reveal`] - Scroll-triggered reveal built on `IntersectionObserver`

pub mod contact;
pub mod reveal;

pub use contact::*;
pub use reveal::*;
