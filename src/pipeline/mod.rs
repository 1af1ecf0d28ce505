//! Pipeline module - association analysis of categorical features

pub mod association;
pub mod contingency;
pub mod entropy;
pub mod error;
pub mod loader;
pub mod matrix;
pub mod method;

pub use association::*;
pub use contingency::ContingencyTable;
pub use entropy::{theils_u, theils_u_labels};
pub use error::AssociationError;
pub use loader::*;
pub use matrix::AssociationMatrix;
pub use method::AssociationMethod;
