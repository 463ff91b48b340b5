use serde::Serialize;

use crate::domain::status::{MotStatus, TaxStatus};
use crate::domain::validation::ValidationError;
use crate::domain::value::RegistrationNumber;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Facts DVLA holds about one vehicle at lookup time.
///
/// A fresh record only carries its registration number; every other field is
/// `None` until a successful lookup (or the caller) sets it. Setters validate
/// before mutating, so a field is either unset or holds a valid value.
///
/// `colour` and `color` are the same field under two spellings.
pub struct Vehicle {
    registration_number: RegistrationNumber,
    #[serde(skip_serializing_if = "Option::is_none")]
    tax_status: Option<TaxStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tax_due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    art_end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mot_status: Option<MotStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mot_expiry_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    make: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    month_of_first_dvla_registration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    month_of_first_registration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    year_of_manufacture: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    engine_capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    co2_emissions: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fuel_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    marked_for_export: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    colour: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    type_approval: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    wheelplan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    revenue_weight: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    real_driving_emissions: Option<String>,
    #[serde(rename = "dateOfLastV5CIssued", skip_serializing_if = "Option::is_none")]
    date_of_last_v5c_issued: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    euro_status: Option<String>,
}

impl Vehicle {
    /// Create a record holding only `registration_number`.
    ///
    /// The registration is not validated here; lookups validate it before
    /// any request is sent.
    pub fn new(registration_number: impl Into<RegistrationNumber>) -> Self {
        Self {
            registration_number: registration_number.into(),
            tax_status: None,
            tax_due_date: None,
            art_end_date: None,
            mot_status: None,
            mot_expiry_date: None,
            make: None,
            month_of_first_dvla_registration: None,
            month_of_first_registration: None,
            year_of_manufacture: None,
            engine_capacity: None,
            co2_emissions: None,
            fuel_type: None,
            marked_for_export: None,
            colour: None,
            type_approval: None,
            wheelplan: None,
            revenue_weight: None,
            real_driving_emissions: None,
            date_of_last_v5c_issued: None,
            euro_status: None,
        }
    }

    pub fn registration_number(&self) -> &RegistrationNumber {
        &self.registration_number
    }

    pub fn tax_status(&self) -> Option<TaxStatus> {
        self.tax_status
    }

    /// Set the tax status from its DVLA wire string.
    ///
    /// Values outside [`TaxStatus`] are rejected with
    /// [`ValidationError::InvalidEnumValue`] and the record is left unchanged.
    pub fn set_tax_status(&mut self, value: &str) -> Result<&mut Self, ValidationError> {
        self.tax_status = Some(value.parse()?);
        Ok(self)
    }

    /// Date of tax liability.
    pub fn tax_due_date(&self) -> Option<&str> {
        self.tax_due_date.as_deref()
    }

    pub fn set_tax_due_date(&mut self, value: impl Into<String>) -> &mut Self {
        self.tax_due_date = Some(value.into());
        self
    }

    /// Additional Rate of Tax end date (`YYYY-MM-DD`).
    pub fn art_end_date(&self) -> Option<&str> {
        self.art_end_date.as_deref()
    }

    pub fn set_art_end_date(&mut self, value: impl Into<String>) -> &mut Self {
        self.art_end_date = Some(value.into());
        self
    }

    pub fn mot_status(&self) -> Option<MotStatus> {
        self.mot_status
    }

    /// Set the MOT status from its DVLA wire string.
    ///
    /// Values outside [`MotStatus`] are rejected with
    /// [`ValidationError::InvalidEnumValue`] and the record is left unchanged.
    pub fn set_mot_status(&mut self, value: &str) -> Result<&mut Self, ValidationError> {
        self.mot_status = Some(value.parse()?);
        Ok(self)
    }

    pub fn mot_expiry_date(&self) -> Option<&str> {
        self.mot_expiry_date.as_deref()
    }

    pub fn set_mot_expiry_date(&mut self, value: impl Into<String>) -> &mut Self {
        self.mot_expiry_date = Some(value.into());
        self
    }

    pub fn make(&self) -> Option<&str> {
        self.make.as_deref()
    }

    pub fn set_make(&mut self, value: impl Into<String>) -> &mut Self {
        self.make = Some(value.into());
        self
    }

    pub fn month_of_first_dvla_registration(&self) -> Option<&str> {
        self.month_of_first_dvla_registration.as_deref()
    }

    pub fn set_month_of_first_dvla_registration(&mut self, value: impl Into<String>) -> &mut Self {
        self.month_of_first_dvla_registration = Some(value.into());
        self
    }

    pub fn month_of_first_registration(&self) -> Option<&str> {
        self.month_of_first_registration.as_deref()
    }

    pub fn set_month_of_first_registration(&mut self, value: impl Into<String>) -> &mut Self {
        self.month_of_first_registration = Some(value.into());
        self
    }

    pub fn year_of_manufacture(&self) -> Option<u32> {
        self.year_of_manufacture
    }

    pub fn set_year_of_manufacture(&mut self, value: u32) -> &mut Self {
        self.year_of_manufacture = Some(value);
        self
    }

    /// Engine capacity in cubic centimetres.
    pub fn engine_capacity(&self) -> Option<u32> {
        self.engine_capacity
    }

    pub fn set_engine_capacity(&mut self, value: u32) -> &mut Self {
        self.engine_capacity = Some(value);
        self
    }

    /// Carbon dioxide emissions in grams per kilometre.
    pub fn co2_emissions(&self) -> Option<u32> {
        self.co2_emissions
    }

    pub fn set_co2_emissions(&mut self, value: u32) -> &mut Self {
        self.co2_emissions = Some(value);
        self
    }

    /// Fuel type (method of propulsion).
    pub fn fuel_type(&self) -> Option<&str> {
        self.fuel_type.as_deref()
    }

    pub fn set_fuel_type(&mut self, value: impl Into<String>) -> &mut Self {
        self.fuel_type = Some(value.into());
        self
    }

    /// `Some(true)` only if the vehicle has been export marked.
    pub fn marked_for_export(&self) -> Option<bool> {
        self.marked_for_export
    }

    pub fn set_marked_for_export(&mut self, value: bool) -> &mut Self {
        self.marked_for_export = Some(value);
        self
    }

    pub fn colour(&self) -> Option<&str> {
        self.colour.as_deref()
    }

    pub fn set_colour(&mut self, value: impl Into<String>) -> &mut Self {
        self.colour = Some(value.into());
        self
    }

    /// Alias of [`Vehicle::colour`].
    pub fn color(&self) -> Option<&str> {
        self.colour()
    }

    /// Alias of [`Vehicle::set_colour`].
    pub fn set_color(&mut self, value: impl Into<String>) -> &mut Self {
        self.set_colour(value)
    }

    /// Vehicle type approval category.
    pub fn type_approval(&self) -> Option<&str> {
        self.type_approval.as_deref()
    }

    pub fn set_type_approval(&mut self, value: impl Into<String>) -> &mut Self {
        self.type_approval = Some(value.into());
        self
    }

    pub fn wheelplan(&self) -> Option<&str> {
        self.wheelplan.as_deref()
    }

    pub fn set_wheelplan(&mut self, value: impl Into<String>) -> &mut Self {
        self.wheelplan = Some(value.into());
        self
    }

    /// Revenue weight in kilograms.
    pub fn revenue_weight(&self) -> Option<u32> {
        self.revenue_weight
    }

    pub fn set_revenue_weight(&mut self, value: u32) -> &mut Self {
        self.revenue_weight = Some(value);
        self
    }

    pub fn real_driving_emissions(&self) -> Option<&str> {
        self.real_driving_emissions.as_deref()
    }

    pub fn set_real_driving_emissions(&mut self, value: impl Into<String>) -> &mut Self {
        self.real_driving_emissions = Some(value.into());
        self
    }

    pub fn date_of_last_v5c_issued(&self) -> Option<&str> {
        self.date_of_last_v5c_issued.as_deref()
    }

    pub fn set_date_of_last_v5c_issued(&mut self, value: impl Into<String>) -> &mut Self {
        self.date_of_last_v5c_issued = Some(value.into());
        self
    }

    /// Euro status (dealer / customer provided, new vehicles only).
    pub fn euro_status(&self) -> Option<&str> {
        self.euro_status.as_deref()
    }

    pub fn set_euro_status(&mut self, value: impl Into<String>) -> &mut Self {
        self.euro_status = Some(value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_vehicle_only_carries_registration() {
        let vehicle = Vehicle::new("AB12CDE");
        assert_eq!(vehicle.registration_number().as_str(), "AB12CDE");
        assert_eq!(vehicle.tax_status(), None);
        assert_eq!(vehicle.mot_status(), None);
        assert_eq!(vehicle.make(), None);
        assert_eq!(vehicle.colour(), None);
        assert_eq!(vehicle.marked_for_export(), None);
    }

    #[test]
    fn colour_and_color_stay_in_sync() {
        let mut vehicle = Vehicle::new("AB12CDE");
        vehicle.set_colour("Red");
        assert_eq!(vehicle.colour(), Some("Red"));
        assert_eq!(vehicle.color(), Some("Red"));

        vehicle.set_color("Blue");
        assert_eq!(vehicle.colour(), Some("Blue"));
        assert_eq!(vehicle.color(), Some("Blue"));
    }

    #[test]
    fn invalid_tax_status_leaves_previous_value() {
        let mut vehicle = Vehicle::new("AB12CDE");
        assert!(matches!(
            vehicle.set_tax_status("Exempt"),
            Err(ValidationError::InvalidEnumValue {
                field: "taxStatus",
                ..
            })
        ));
        assert_eq!(vehicle.tax_status(), None);

        vehicle.set_tax_status("Taxed").unwrap();
        assert!(vehicle.set_tax_status("taxed").is_err());
        assert_eq!(vehicle.tax_status(), Some(TaxStatus::Taxed));
    }

    #[test]
    fn invalid_mot_status_leaves_previous_value() {
        let mut vehicle = Vehicle::new("AB12CDE");
        vehicle.set_mot_status("Not valid").unwrap();
        let err = vehicle.set_mot_status("Expired").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidEnumValue {
                field: "motStatus",
                value: "Expired".to_owned(),
            }
        );
        assert_eq!(vehicle.mot_status(), Some(MotStatus::NotValid));
    }

    #[test]
    fn setters_chain() {
        let mut vehicle = Vehicle::new("AB12CDE");
        vehicle
            .set_make("FORD")
            .set_year_of_manufacture(2012)
            .set_engine_capacity(1598)
            .set_marked_for_export(false)
            .set_tax_status("SORN")
            .unwrap()
            .set_fuel_type("PETROL");

        assert_eq!(vehicle.make(), Some("FORD"));
        assert_eq!(vehicle.year_of_manufacture(), Some(2012));
        assert_eq!(vehicle.engine_capacity(), Some(1598));
        assert_eq!(vehicle.marked_for_export(), Some(false));
        assert_eq!(vehicle.tax_status(), Some(TaxStatus::Sorn));
        assert_eq!(vehicle.fuel_type(), Some("PETROL"));
    }

    #[test]
    fn serializes_set_fields_with_wire_names() {
        let mut vehicle = Vehicle::new("AB12CDE");
        vehicle
            .set_tax_status("Untaxed")
            .unwrap()
            .set_colour("Red")
            .set_date_of_last_v5c_issued("2020-01-01")
            .set_co2_emissions(120);

        let json = serde_json::to_value(&vehicle).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "registrationNumber": "AB12CDE",
                "taxStatus": "Untaxed",
                "co2Emissions": 120,
                "colour": "Red",
                "dateOfLastV5CIssued": "2020-01-01",
            })
        );
    }
}
