//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` exposes one async function per backend operation, `endpoints` builds
//! resource paths, `error` classifies failures, and `types` defines the wire
//! schema.

pub mod api;
pub mod endpoints;
pub mod error;
pub mod types;
