//! # pharos-reconcile
//!
//! Periodic reconciliation of deployed fixes against live ground truth:
//! a fix entity transitions DEPLOYED → PUBLISHED once every suggestion it
//! was deployed for stops reproducing in production.

pub mod engine;

pub use engine::publish_deployed_fix_entities;
