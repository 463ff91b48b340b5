use std::io;

use dvla_vehicle_enquiry::{ApiKey, CorrelationId, VehicleEnquiryClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let api_key = std::env::var("DVLA_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "DVLA_API_KEY environment variable is required",
        )
    })?;
    let registration = std::env::var("DVLA_REGISTRATION").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "DVLA_REGISTRATION environment variable is required",
        )
    })?;

    let mut builder = VehicleEnquiryClient::builder(ApiKey::new(api_key)?);
    if let Ok(correlation_id) = std::env::var("DVLA_CORRELATION_ID") {
        builder = builder.correlation_id(CorrelationId::new(correlation_id)?);
    }
    if std::env::var("DVLA_LIVE").is_ok_and(|value| value == "1") {
        builder = builder.live();
    }
    let client = builder.build()?;

    let vehicle = client.lookup_by_registration_number(registration).await?;
    println!("{}", serde_json::to_string_pretty(&vehicle)?);

    Ok(())
}
