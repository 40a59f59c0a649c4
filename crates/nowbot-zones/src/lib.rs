//! # nowbot Zones
//!
//! Timezone catalog, fuzzy autocomplete ranking and time formatting.
//!
//! The catalog maps short, human-readable labels ("New York") to IANA zone
//! identifiers ("America/New_York"). The ranker turns a partially typed
//! query into at most [`MAX_SUGGESTIONS`] labels, prefix matches first and
//! similarity matches after them.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod format;
pub mod matcher;
pub mod ranker;

pub use catalog::*;
pub use format::*;
pub use matcher::*;
pub use ranker::*;
