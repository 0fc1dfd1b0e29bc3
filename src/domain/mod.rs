pub mod form;
pub mod lead;

pub use form::{FieldErrors, LeadForm};
pub use lead::Lead;
