//! Battle rules: turn resolution and automated attribute choice.

pub mod policy;
pub mod turn;

pub use policy::{AttributePolicy, FixedAttribute, UniformAttribute};
pub use turn::{compare, resolve_timeout, resolve_turn, validate_turn};
