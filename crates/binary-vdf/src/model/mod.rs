//! Data model types for binary VDF.
//!
//! - [`VdfValue`]: a string, a 32-bit number, or a nested map
//! - [`VdfMap`]: an insertion-ordered map with unique keys
//! - [`Tag`]: the wire tag preceding each entry

pub mod map;
pub mod value;

pub use map::VdfMap;
pub use value::{Tag, VdfValue};
