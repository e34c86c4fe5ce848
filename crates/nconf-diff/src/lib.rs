//! Structural diff engine for configuration trees.
//!
//! Compares a reference [`Config`](nconf_tree::Config) against a compared one
//! and classifies every line as unchanged, deleted, added or modified.
//! Modified child lines are grouped under the matched parent pair they
//! belong to.
//!
//! # Key Types
//!
//! - [`ConfigDiff`] -- The four result sets of a comparison
//! - [`LinePair`] / [`ChildGroup`] -- Matched lines and grouped modifications
//! - [`CompareOptions`] -- Ignore pattern and other comparison settings
//! - [`Correlation`] -- Identity rule between two token sequences

pub mod compare;
pub mod config;
pub mod correlate;
pub mod error;
pub mod filter;
mod matcher;

pub use compare::{compare, compare_with, ChildGroup, ConfigDiff, LinePair};
pub use config::CompareOptions;
pub use correlate::{correlate, Correlation};
pub use error::{DiffError, DiffResult};
pub use filter::IgnoreFilter;
