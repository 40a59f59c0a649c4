//! # nowbot Config
//!
//! Type-safe configuration loading and validation for nowbot.
//!
//! Configuration comes from an optional YAML file, environment variable
//! overrides and, for the bot token, an optional token file.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
