//! Data models

pub mod disease;
pub mod form;
pub mod prediction;

pub use disease::*;
pub use form::*;
pub use prediction::*;
