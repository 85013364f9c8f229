//! # Domain Models
//!
//! Pure data for the capability support engine: identities, maturity tiers, platform
//! and image enums, the tri-state [`field::Field`] used by update deltas, cluster
//! snapshots, and configuration structs.
//! Keep it lean: no I/O and no decision logic, just data and small accessors.

pub mod cluster;
pub mod config;
pub mod field;
pub mod ids;
pub mod platform;
pub mod support;
