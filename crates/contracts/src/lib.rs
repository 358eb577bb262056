//! Wire types shared by the console backend and frontend.
//!
//! Resources follow the Kubernetes object shape (`apiVersion`, `kind`,
//! `metadata`, `spec`, `status`) and serialize in camelCase.

pub mod domain;
pub mod projections;
pub mod system;
