//! Shared types for the greeting service.

pub mod greeting;

pub use greeting::{Greeting, HELLO_WORLD};
