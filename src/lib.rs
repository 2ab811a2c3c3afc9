//! Drone Scenario - Document Core
//!
//! Typed in-memory model and JSON codec for drone-network simulation
//! scenarios consumed by an external ns-3 based engine. The crate is the
//! persistence core behind a graphical scenario editor: the editor mutates
//! the [`Scenario`] tree freely and calls the codec (or the file wrappers
//! in [`io`]) to load and save documents.
//!
//! The wire format is quirky on purpose - camelCase keys with literal
//! exceptions, PascalCase attribute names, and a polymorphic attribute-bag
//! encoding for engine modules resolved by substring rules over the
//! discriminant - and this crate reproduces it exactly. Unrecognized
//! module attributes are never dropped: they round-trip through each
//! record's open mapping.

pub mod codec;
pub mod error;
pub mod io;
pub mod model;

pub use codec::{
    decode_slice, decode_str, decode_value, encode_pretty, encode_string, encode_value,
};
pub use error::ScenarioError;
pub use model::{Attribute, ModelKind, ModelRecord, ModelSlot, Scenario};
