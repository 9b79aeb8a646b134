//! Immutable value objects: names, addresses, vehicles.

use serde::{Deserialize, Serialize};

use taxi_core::ValueObject;

/// Writes the present parts separated by single spaces, skipping absent ones.
fn write_joined(f: &mut core::fmt::Formatter<'_>, parts: &[Option<&str>]) -> core::fmt::Result {
    let mut first = true;
    for part in parts.iter().flatten() {
        if !first {
            f.write_str(" ")?;
        }
        f.write_str(part)?;
        first = false;
    }
    Ok(())
}

/// A person's name. Either part may be unknown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PersonName {
    first_name: Option<String>,
    last_name: Option<String>,
}

impl PersonName {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
        }
    }

    pub fn from_parts(first_name: Option<String>, last_name: Option<String>) -> Self {
        Self {
            first_name,
            last_name,
        }
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }
}

impl ValueObject for PersonName {}

impl core::fmt::Display for PersonName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write_joined(f, &[self.first_name(), self.last_name()])
    }
}

/// A street address. Either part may be unknown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Address {
    street: Option<String>,
    building: Option<String>,
}

impl Address {
    pub fn new(street: impl Into<String>, building: impl Into<String>) -> Self {
        Self {
            street: Some(street.into()),
            building: Some(building.into()),
        }
    }

    pub fn from_parts(street: Option<String>, building: Option<String>) -> Self {
        Self { street, building }
    }

    pub fn street(&self) -> Option<&str> {
        self.street.as_deref()
    }

    pub fn building(&self) -> Option<&str> {
        self.building.as_deref()
    }
}

impl ValueObject for Address {}

impl core::fmt::Display for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write_joined(f, &[self.street(), self.building()])
    }
}

/// The car a driver operates for a given assignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vehicle {
    color: String,
    model: String,
    plate_number: String,
}

impl Vehicle {
    pub fn new(
        color: impl Into<String>,
        model: impl Into<String>,
        plate_number: impl Into<String>,
    ) -> Self {
        Self {
            color: color.into(),
            model: model.into(),
            plate_number: plate_number.into(),
        }
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn plate_number(&self) -> &str {
        &self.plate_number
    }
}

impl ValueObject for Vehicle {}
