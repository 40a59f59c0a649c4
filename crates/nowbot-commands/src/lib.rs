//! # nowbot Commands
//!
//! Discord slash commands for nowbot using the Poise framework.
//!
//! `/now` and `/longnow` tell the current time in a timezone picked with
//! fuzzy autocomplete. Command metadata is localized from the Fluent
//! translations at registration time.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod framework;
pub mod localize;
pub mod time;

pub use framework::*;
pub use localize::*;
pub use time::*;
