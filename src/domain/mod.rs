//! Domain layer: strong types with validation and invariants (no I/O).

mod registration;
mod status;
mod validation;
mod value;
mod vehicle;

pub use registration::is_valid_registration;
pub use status::{MotStatus, TaxStatus};
pub use validation::ValidationError;
pub use value::{ApiKey, CorrelationId, RegistrationNumber};
pub use vehicle::Vehicle;
