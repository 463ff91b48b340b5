//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod text;
mod vehicle_enquiry;

pub use vehicle_enquiry::{
    HttpRequest, TransportError, decode_error_json_response, decode_vehicle_json_response,
    encode_vehicle_enquiry_request,
};
