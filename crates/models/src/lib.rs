//! Record types for the marketplace and the validation that turns raw request
//! payloads into them.
//!
//! Input structs keep every field optional so that a missing field surfaces as a
//! per-field violation from [`validation`] instead of an opaque decode failure.

pub mod errors;
pub mod validation;
pub mod artisan;
pub mod product;

pub use artisan::{Artisan, ArtisanInput, NewArtisan};
pub use errors::{FieldViolation, ModelError};
pub use product::{NewProduct, Product, ProductInput};
