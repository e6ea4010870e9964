//! Stratus Core
//!
//! Building blocks shared by generated CloudFormation property types:
//! the string-or-JSON value, the property type contract, and the model of
//! the resource specification document the types are generated from.

pub mod error;
pub mod property;
pub mod specification;
pub mod value;

pub use error::{Error, Result};
pub use property::{PropertyType, ResourceType, TypeName};
pub use specification::Specification;
pub use value::{Resolved, StringOrJson};
