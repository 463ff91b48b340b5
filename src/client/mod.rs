//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::{ApiKey, CorrelationId, RegistrationNumber, ValidationError, Vehicle};
use crate::transport::{
    HttpRequest, TransportError, decode_error_json_response, decode_vehicle_json_response,
    encode_vehicle_enquiry_request,
};

const LIVE_BASE_URL: &str = "https://driver-vehicle-licensing.api.gov.uk/vehicle-enquiry";
const SANDBOX_BASE_URL: &str = "https://uat.driver-vehicle-licensing.api.gov.uk/vehicle-enquiry";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let method = reqwest::Method::from_bytes(request.method.as_bytes())?;
            let mut builder = self.client.request(method, request.url);
            for (name, value) in request.headers {
                builder = builder.header(name, value);
            }
            let response = builder.body(request.body).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Which DVLA deployment requests are sent to.
pub enum Environment {
    /// Production service.
    Live,
    /// User-acceptance-testing service. This is the default.
    #[default]
    Sandbox,
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`VehicleEnquiryClient`].
///
/// Every lookup yields either a populated [`Vehicle`] or exactly one of these;
/// nothing is retried.
pub enum VehicleEnquiryError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// DVLA answered with a non-200 status and a structured error body.
    ///
    /// Only the first element of the body's `errors` list is kept.
    #[error("({code}) {title}: {detail}")]
    Upstream {
        status: u16,
        code: String,
        title: String,
        detail: String,
    },

    /// Non-200 status whose body was empty (`body: None`) or JSON without an
    /// `errors` element.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// A configured base endpoint is not a valid URL.
    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(#[source] url::ParseError),

    /// Invalid registration format, or a status value outside its enumeration.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl VehicleEnquiryError {
    /// HTTP status carried by the failure, if it came from a DVLA response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } | Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<TransportError> for VehicleEnquiryError {
    fn from(value: TransportError) -> Self {
        match value {
            TransportError::InvalidField(err) => Self::Validation(err),
            TransportError::Url(err) => Self::InvalidEndpoint(err),
            TransportError::Json(err) => Self::Parse(Box::new(err)),
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`VehicleEnquiryClient`].
///
/// Use this when you need a correlation id, a non-default environment or
/// endpoint, or transport settings such as a timeout.
pub struct VehicleEnquiryClientBuilder {
    api_key: ApiKey,
    correlation_id: Option<CorrelationId>,
    environment: Environment,
    live_endpoint: String,
    sandbox_endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl VehicleEnquiryClientBuilder {
    /// Create a builder targeting the sandbox with default endpoints.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            correlation_id: None,
            environment: Environment::default(),
            live_endpoint: LIVE_BASE_URL.to_owned(),
            sandbox_endpoint: SANDBOX_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Forward `correlation_id` as `X-Correlation-Id` on every request.
    pub fn correlation_id(mut self, correlation_id: CorrelationId) -> Self {
        self.correlation_id = Some(correlation_id);
        self
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Shorthand for `environment(Environment::Live)`.
    pub fn live(self) -> Self {
        self.environment(Environment::Live)
    }

    /// Shorthand for `environment(Environment::Sandbox)`.
    pub fn sandbox(self) -> Self {
        self.environment(Environment::Sandbox)
    }

    /// Override the base URL used for [`Environment::Live`].
    pub fn live_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.live_endpoint = endpoint.into();
        self
    }

    /// Override the base URL used for [`Environment::Sandbox`].
    pub fn sandbox_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.sandbox_endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`VehicleEnquiryClient`].
    ///
    /// Fails with [`VehicleEnquiryError::InvalidEndpoint`] if either base URL
    /// does not parse.
    pub fn build(self) -> Result<VehicleEnquiryClient, VehicleEnquiryError> {
        for endpoint in [&self.live_endpoint, &self.sandbox_endpoint] {
            url::Url::parse(endpoint).map_err(VehicleEnquiryError::InvalidEndpoint)?;
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| VehicleEnquiryError::Transport(Box::new(err)))?;

        Ok(VehicleEnquiryClient {
            api_key: self.api_key,
            correlation_id: self.correlation_id,
            environment: self.environment,
            live_endpoint: self.live_endpoint,
            sandbox_endpoint: self.sandbox_endpoint,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level DVLA Vehicle Enquiry Service client.
///
/// Each lookup validates the registration format, sends exactly one
/// `POST v1/vehicles` request and maps the reply onto a [`Vehicle`].
/// By default it targets the sandbox (UAT) deployment:
/// - `https://uat.driver-vehicle-licensing.api.gov.uk/vehicle-enquiry` (sandbox)
/// - `https://driver-vehicle-licensing.api.gov.uk/vehicle-enquiry` (live)
pub struct VehicleEnquiryClient {
    api_key: ApiKey,
    correlation_id: Option<CorrelationId>,
    environment: Environment,
    live_endpoint: String,
    sandbox_endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl VehicleEnquiryClient {
    /// Create a sandbox client with default endpoints and no correlation id.
    ///
    /// For more customization, use [`VehicleEnquiryClient::builder`].
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            correlation_id: None,
            environment: Environment::default(),
            live_endpoint: LIVE_BASE_URL.to_owned(),
            sandbox_endpoint: SANDBOX_BASE_URL.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: ApiKey) -> VehicleEnquiryClientBuilder {
        VehicleEnquiryClientBuilder::new(api_key)
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Send subsequent lookups to the live service.
    pub fn use_live(&mut self) -> &mut Self {
        self.environment = Environment::Live;
        self
    }

    /// Send subsequent lookups to the sandbox service.
    pub fn use_sandbox(&mut self) -> &mut Self {
        self.environment = Environment::Sandbox;
        self
    }

    /// Base URL for the current environment.
    pub fn endpoint(&self) -> &str {
        match self.environment {
            Environment::Live => &self.live_endpoint,
            Environment::Sandbox => &self.sandbox_endpoint,
        }
    }

    pub fn correlation_id(&self) -> Option<&CorrelationId> {
        self.correlation_id.as_ref()
    }

    /// Look up a vehicle by its registration string.
    ///
    /// Equivalent to `lookup(Vehicle::new(registration_number))`.
    pub async fn lookup_by_registration_number(
        &self,
        registration_number: impl Into<RegistrationNumber>,
    ) -> Result<Vehicle, VehicleEnquiryError> {
        self.lookup(Vehicle::new(registration_number)).await
    }

    /// Fetch current DVLA facts for `vehicle` and write them onto it.
    ///
    /// Fields missing from the DVLA reply keep whatever value `vehicle` already
    /// had.
    ///
    /// Errors:
    /// - [`VehicleEnquiryError::Validation`] with [`ValidationError::InvalidFormat`]
    ///   when the registration matches no plate format (no request is sent),
    /// - [`VehicleEnquiryError::Upstream`] for non-200 responses with an error body,
    /// - [`VehicleEnquiryError::Validation`] with [`ValidationError::InvalidEnumValue`]
    ///   when DVLA returns an unknown tax or MOT status,
    /// - [`VehicleEnquiryError::Transport`] / [`VehicleEnquiryError::Parse`] for
    ///   network failures and malformed bodies.
    pub async fn lookup(&self, mut vehicle: Vehicle) -> Result<Vehicle, VehicleEnquiryError> {
        let registration = vehicle.registration_number().validated()?;

        let request = encode_vehicle_enquiry_request(
            self.endpoint(),
            &self.api_key,
            self.correlation_id.as_ref(),
            registration,
        )?;
        debug!(
            registration = registration.as_str(),
            environment = ?self.environment,
            url = %request.url,
            correlated = self.correlation_id.is_some(),
            "sending vehicle enquiry"
        );

        let response = self
            .http
            .send(request)
            .await
            .map_err(VehicleEnquiryError::Transport)?;

        if response.status != 200 {
            let err = error_from_response(response);
            warn!(
                registration = vehicle.registration_number().as_str(),
                status = ?err.status(),
                error = %err,
                "vehicle enquiry failed"
            );
            return Err(err);
        }

        decode_vehicle_json_response(&mut vehicle, &response.body)?;
        debug!(
            registration = vehicle.registration_number().as_str(),
            "vehicle enquiry succeeded"
        );
        Ok(vehicle)
    }
}

fn error_from_response(response: HttpResponse) -> VehicleEnquiryError {
    if response.body.trim().is_empty() {
        return VehicleEnquiryError::HttpStatus {
            status: response.status,
            body: None,
        };
    }

    match decode_error_json_response(&response.body) {
        Ok(Some(failure)) => VehicleEnquiryError::Upstream {
            status: failure.status.unwrap_or(response.status),
            code: failure.code,
            title: failure.title,
            detail: failure.detail,
        },
        Ok(None) => VehicleEnquiryError::HttpStatus {
            status: response.status,
            body: Some(response.body),
        },
        Err(err) => err.into(),
    }
}
