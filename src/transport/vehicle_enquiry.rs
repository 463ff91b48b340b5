use serde::{Deserialize, Serialize};
use url::Url;

use super::text::TransportText;
use crate::domain::{
    ApiKey, CorrelationId, MotStatus, RegistrationNumber, TaxStatus, ValidationError, Vehicle,
};

const VEHICLES_PATH: &str = "v1/vehicles";
const CONTENT_TYPE_JSON: &str = "application/json";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid vehicle field: {0}")]
    InvalidField(#[from] ValidationError),

    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Fully described outbound HTTP request, ready for an `HttpTransport`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: &'static str,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

#[cfg(test)]
impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VehicleEnquiryJsonRequest<'a> {
    registration_number: &'a RegistrationNumber,
}

/// Build the `POST v1/vehicles` request for `registration` against the
/// `base` URL of one environment.
///
/// `registration` is expected to be validated by the caller. The correlation
/// header is only present when `correlation_id` is `Some`.
pub fn encode_vehicle_enquiry_request(
    base: &str,
    api_key: &ApiKey,
    correlation_id: Option<&CorrelationId>,
    registration: &RegistrationNumber,
) -> Result<HttpRequest, TransportError> {
    let url = vehicles_url(base)?;

    let mut headers = vec![
        (ApiKey::HEADER.to_owned(), api_key.as_str().to_owned()),
        ("content-type".to_owned(), CONTENT_TYPE_JSON.to_owned()),
    ];
    if let Some(correlation_id) = correlation_id {
        headers.push((
            CorrelationId::HEADER.to_owned(),
            correlation_id.as_str().to_owned(),
        ));
    }

    let body = serde_json::to_string(&VehicleEnquiryJsonRequest {
        registration_number: registration,
    })?;

    Ok(HttpRequest {
        method: "POST",
        url,
        headers,
        body,
    })
}

fn vehicles_url(base: &str) -> Result<Url, url::ParseError> {
    // `Url::join` replaces the last segment unless the base ends with '/'.
    if base.ends_with('/') {
        Url::parse(base)?.join(VEHICLES_PATH)
    } else {
        Url::parse(&format!("{base}/"))?.join(VEHICLES_PATH)
    }
}

/// Success payload. Every field is optional: DVLA omits keys that do not
/// apply to a vehicle, and an omitted key must not clear a record field.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VehicleJsonResponse {
    tax_status: Option<String>,
    tax_due_date: Option<String>,
    art_end_date: Option<String>,
    mot_status: Option<String>,
    mot_expiry_date: Option<String>,
    make: Option<String>,
    month_of_first_dvla_registration: Option<String>,
    month_of_first_registration: Option<String>,
    year_of_manufacture: Option<u32>,
    engine_capacity: Option<u32>,
    co2_emissions: Option<u32>,
    fuel_type: Option<String>,
    marked_for_export: Option<bool>,
    colour: Option<String>,
    type_approval: Option<String>,
    wheelplan: Option<String>,
    revenue_weight: Option<u32>,
    real_driving_emissions: Option<String>,
    #[serde(rename = "dateOfLastV5CIssued")]
    date_of_last_v5c_issued: Option<String>,
    euro_status: Option<String>,
}

impl VehicleJsonResponse {
    /// Copy every present field onto `vehicle` through its setter.
    ///
    /// Status values are checked before anything is written, so an
    /// out-of-range status leaves `vehicle` untouched.
    fn apply_to(self, vehicle: &mut Vehicle) -> Result<(), ValidationError> {
        if let Some(value) = self.tax_status.as_deref() {
            value.parse::<TaxStatus>()?;
        }
        if let Some(value) = self.mot_status.as_deref() {
            value.parse::<MotStatus>()?;
        }

        if let Some(value) = self.tax_status.as_deref() {
            vehicle.set_tax_status(value)?;
        }
        if let Some(value) = self.tax_due_date {
            vehicle.set_tax_due_date(value);
        }
        if let Some(value) = self.art_end_date {
            vehicle.set_art_end_date(value);
        }
        if let Some(value) = self.mot_status.as_deref() {
            vehicle.set_mot_status(value)?;
        }
        if let Some(value) = self.mot_expiry_date {
            vehicle.set_mot_expiry_date(value);
        }
        if let Some(value) = self.make {
            vehicle.set_make(value);
        }
        if let Some(value) = self.month_of_first_dvla_registration {
            vehicle.set_month_of_first_dvla_registration(value);
        }
        if let Some(value) = self.month_of_first_registration {
            vehicle.set_month_of_first_registration(value);
        }
        if let Some(value) = self.year_of_manufacture {
            vehicle.set_year_of_manufacture(value);
        }
        if let Some(value) = self.engine_capacity {
            vehicle.set_engine_capacity(value);
        }
        if let Some(value) = self.co2_emissions {
            vehicle.set_co2_emissions(value);
        }
        if let Some(value) = self.fuel_type {
            vehicle.set_fuel_type(value);
        }
        if let Some(value) = self.marked_for_export {
            vehicle.set_marked_for_export(value);
        }
        if let Some(value) = self.colour {
            vehicle.set_colour(value);
        }
        if let Some(value) = self.type_approval {
            vehicle.set_type_approval(value);
        }
        if let Some(value) = self.wheelplan {
            vehicle.set_wheelplan(value);
        }
        if let Some(value) = self.revenue_weight {
            vehicle.set_revenue_weight(value);
        }
        if let Some(value) = self.real_driving_emissions {
            vehicle.set_real_driving_emissions(value);
        }
        if let Some(value) = self.date_of_last_v5c_issued {
            vehicle.set_date_of_last_v5c_issued(value);
        }
        if let Some(value) = self.euro_status {
            vehicle.set_euro_status(value);
        }
        Ok(())
    }
}

/// Decode a 200 body and map it onto `vehicle`.
pub fn decode_vehicle_json_response(
    vehicle: &mut Vehicle,
    json: &str,
) -> Result<(), TransportError> {
    let parsed: VehicleJsonResponse = serde_json::from_str(json)?;
    parsed.apply_to(vehicle)?;
    Ok(())
}

#[derive(Debug, Clone, Deserialize)]
struct ErrorJsonResponse {
    #[serde(default)]
    errors: Vec<ErrorJson>,
}

#[derive(Debug, Clone, Deserialize)]
struct ErrorJson {
    #[serde(default)]
    status: Option<TransportText>,
    #[serde(default)]
    code: Option<TransportText>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    detail: Option<String>,
}

/// First structured error reported by DVLA for a non-200 response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamFailure {
    pub status: Option<u16>,
    pub code: String,
    pub title: String,
    pub detail: String,
}

/// Decode a non-200 body. Returns `Ok(None)` when the body is JSON but
/// carries no `errors` element.
pub fn decode_error_json_response(json: &str) -> Result<Option<UpstreamFailure>, TransportError> {
    let parsed: ErrorJsonResponse = serde_json::from_str(json)?;
    Ok(parsed.errors.into_iter().next().map(|error| UpstreamFailure {
        status: error.status.as_ref().and_then(TransportText::as_status),
        code: error
            .code
            .map(TransportText::into_string)
            .unwrap_or_default(),
        title: error.title.unwrap_or_default(),
        detail: error.detail.unwrap_or_default(),
    }))
}
