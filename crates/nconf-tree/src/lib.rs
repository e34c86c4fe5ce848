//! Hierarchical configuration trees for network-device dumps.
//!
//! Parses line-oriented, space-indented text into an immutable forest of
//! [`LineNode`]s held by a [`Config`] container. Nodes live in an arena and
//! refer to each other by [`NodeId`], so parent, child and sibling
//! navigation never forms ownership cycles.
//!
//! # Key Types
//!
//! - [`Config`] -- The container: every parsed line plus the root subset
//! - [`LineNode`] -- One non-blank line with its structural links
//! - [`NodeId`] -- Stable arena index of a node within its container
//! - [`TreeBuilder`] -- One-pass indentation-stack builder
//! - [`Anomaly`] -- Indentation irregularity tolerated during the build
//! - [`search_line_start_with`] -- Prefix/level/parent filtered lookup

pub mod anomaly;
pub mod builder;
pub mod config;
pub mod error;
pub mod node;
pub mod search;
pub mod token;

pub use anomaly::{Anomaly, AnomalyKind};
pub use builder::TreeBuilder;
pub use config::Config;
pub use error::{TreeError, TreeResult};
pub use node::{LineNode, NodeId};
pub use search::search_line_start_with;
pub use token::{tokenize, tokenize_line, TokenizedLine};
