//! Form state shared by every console screen.
//!
//! Records are flat JSON objects. Typed entities go through [`to_record`]
//! and [`from_record`] when a screen needs the generic helpers. Every
//! function here is pure: it takes the current state and returns the next
//! one.

mod duration;
mod field;
mod reconcile;
mod record;
mod reducer;
mod trim;

pub use duration::{DurationPart, DurationParts, decode, duration_update, encode};
pub use field::{Field, FieldConfig, FieldKind, RenderedField, field};
pub use reconcile::{Identified, Outcome, reconcile};
pub use record::{
    Error, ErrorMap, Messages, Record, from_record, messages, to_record,
};
pub use reducer::{
    NumberUpdate, Update, alias_update, bind_update, is_valid_alias,
    number_update, parse_count,
};
pub use trim::{trim, trim_entity};
