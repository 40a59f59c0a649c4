//! # nowbot I18n
//!
//! Localized user-visible messages for nowbot using Fluent.
//!
//! Translations are embedded at compile time. Each language provides the
//! command names and descriptions shown in Discord plus the bot's replies.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod loader;
pub mod messages;

pub use loader::*;
pub use messages::*;
