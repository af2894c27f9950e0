// SPDX-License-Identifier: AGPL-3.0-or-later
//! Zeebe-Contacts: initial contact points for dual-region Zeebe clusters
//!
//! Every broker in a dual-region Camunda 8 deployment needs the same
//! `ZEEBE_BROKER_CLUSTER_INITIALCONTACTPOINTS` value, listing the brokers of
//! both regions interleaved. This crate validates the cluster layout and
//! renders that value.
//!
//! # Features
//!
//! * **Validation:** Rejects odd, undersized, or single-namespace layouts up front
//! * **Generation:** Deterministic interleaving of region 0 and region 1 brokers
//! * **Rendering:** Helm env block, raw value, JSON, or values-file substitution

pub mod cluster;
pub mod config;
pub mod error;
pub mod prompt;
pub mod render;

pub use cluster::{generate, ClusterSpec, ContactList, ContactPoint, ZEEBE_COMMAND_PORT};
pub use config::Config;
pub use error::{ContactError, Result, ValidationError};
