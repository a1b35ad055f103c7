//! Dashboard — the pv panel fed by the energy controller.
//!
//! The controller publishes five JSON [`Feed`]s. Each value is looked up
//! in the [`RuleTable`], turned into an [`ElementPatch`] and applied to the
//! [`Panel`]. The devices feed replaces the [`DeviceBar`]s wholesale.

mod color;
mod device;
mod feed;
mod format;
mod panel;
mod patch;
mod rules;
mod sign;

pub use color::ColorBand;
pub use device::{BarClass, DeviceBar, DeviceState, DeviceStatus, parse_device_id};
pub use feed::Feed;
pub use format::format_de;
pub use panel::{ApplyOutcome, Element, Panel};
pub use patch::ElementPatch;
pub use rules::{
    DSTATE_KEYS, EFFICIENCY_KEYS, FieldRule, GSTATE_KEYS, PERMILLE_KEYS, PSTATE_KEYS,
    RuleTable, SENSOR_KEYS, Scale, UpdateMode,
};
pub use sign::{NOISE, NOISE_CLASS, SignClass};
