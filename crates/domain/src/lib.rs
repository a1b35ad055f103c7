//! # homewatch-domain
//!
//! Pure domain model for the homewatch monitoring front end.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps, unit conversions
//! - Aggregate the **sensor log** written by the radio bridge and build its **charts**
//! - Format the **weather** snapshot and the **video** listing
//! - Guard **image** names and pick the output size
//! - Define the pv **dashboard**: feeds, display rules, element patches, the panel
//! - Validate **relay** toggle commands
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;
pub mod units;

pub mod chart;
pub mod dashboard;
pub mod image;
pub mod relay;
pub mod sensor_log;
pub mod video;
pub mod weather;
