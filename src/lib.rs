//! Typed Rust client for the DVLA Vehicle Enquiry Service API.
//!
//! The crate is split into a domain layer of strong types (plate validation,
//! the [`Vehicle`] record and its status enums), a transport layer for the
//! wire format, and a small client layer orchestrating the single
//! `POST v1/vehicles` call.
//!
//! ```rust,no_run
//! use dvla_vehicle_enquiry::{ApiKey, VehicleEnquiryClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), dvla_vehicle_enquiry::VehicleEnquiryError> {
//!     let mut client = VehicleEnquiryClient::new(ApiKey::new("...")?);
//!     client.use_live();
//!     let vehicle = client.lookup_by_registration_number("AB12CDE").await?;
//!     println!("{:?} {:?}", vehicle.make(), vehicle.tax_status());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    Environment, VehicleEnquiryClient, VehicleEnquiryClientBuilder, VehicleEnquiryError,
};
pub use domain::{
    ApiKey, CorrelationId, MotStatus, RegistrationNumber, TaxStatus, ValidationError, Vehicle,
    is_valid_registration,
};
