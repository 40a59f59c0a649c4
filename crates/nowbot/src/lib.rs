//! # nowbot
//!
//! Discord bot that tells the current time in any timezone.
//!
//! This is the main binary crate: it loads the configuration, initializes
//! logging and runs the Poise framework with the time commands.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bot;
pub mod error;

pub use bot::*;
pub use error::*;
