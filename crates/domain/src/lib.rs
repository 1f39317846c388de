//! # espanel-domain
//!
//! Pure domain model for the espanel device control panel.
//!
//! ## Responsibilities
//! - Define the **status snapshot** polled from the device (`wifi`, `ip`, `uptime`)
//! - Define the **render targets** a snapshot is written into
//! - Define the **control values** sent to the device (light state, brightness)
//! - Define the error conventions shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod brightness;
pub mod light;
pub mod status;
