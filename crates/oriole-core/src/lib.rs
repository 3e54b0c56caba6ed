//! # oriole-core
//!
//! Shared building blocks for the oriole host providers:
//! - [`Color`] - RGB tab colors as emitted by the notebook host
//! - [`RetryPolicy`] - bounded retry-with-backoff for fragile host calls
//!
//! ## Example
//!
//! ```rust
//! use oriole_core::Color;
//!
//! assert_eq!(Color::from_html("#ADE792"), Some(Color::rgb(0xAD, 0xE7, 0x92)));
//! assert_eq!(Color::from_html("none"), None);
//! ```

pub mod color;
pub mod retry;

pub use color::Color;
pub use retry::RetryPolicy;
