//! Card system: definitions, battle stats, and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for catalog cards
//! - `Attribute`: One of the six comparable stats
//! - `Card`: Immutable card record
//! - `Catalog`: Ordered card lookup, loaded once

pub mod attributes;
pub mod definition;
pub mod registry;

pub use attributes::{Attribute, UnknownAttribute};
pub use definition::{Card, CardId};
pub use registry::{Catalog, CatalogError};
