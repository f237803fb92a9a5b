use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::catalog::errors::CategoryError;
use crate::catalog::errors::DurationError;
use crate::catalog::errors::PriceError;
use crate::catalog::errors::ServiceNameError;

/// A bookable home service offered by the business (motor servicing, well
/// drilling, civil works, permits).
#[derive(Debug, Clone, PartialEq)]
pub struct HomeService {
    pub id: HomeServiceId,
    pub name: ServiceName,
    pub category: ServiceCategory,
    pub description: String,
    pub price: Price,
    pub duration_days: DurationDays,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Catalog entry identifier, assigned by the resource store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HomeServiceId(pub i64);

impl fmt::Display for HomeServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Motor,
    Bor,
    Sipil,
    Izin,
}

impl ServiceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCategory::Motor => "motor",
            ServiceCategory::Bor => "bor",
            ServiceCategory::Sipil => "sipil",
            ServiceCategory::Izin => "izin",
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceCategory {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "motor" => Ok(ServiceCategory::Motor),
            "bor" => Ok(ServiceCategory::Bor),
            "sipil" => Ok(ServiceCategory::Sipil),
            "izin" => Ok(ServiceCategory::Izin),
            other => Err(CategoryError::Unknown(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceName(String);

impl ServiceName {
    const MAX_LENGTH: usize = 255;

    pub fn new(name: String) -> Result<Self, ServiceNameError> {
        let trimmed = name.trim();
        let length = trimmed.chars().count();

        if length == 0 {
            Err(ServiceNameError::Blank)
        } else if length > Self::MAX_LENGTH {
            Err(ServiceNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Price in rupiah.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    pub fn new(amount: f64) -> Result<Self, PriceError> {
        if amount.is_finite() && amount >= 0.0 {
            Ok(Self(amount))
        } else {
            Err(PriceError::OutOfRange(amount))
        }
    }

    pub fn amount(&self) -> f64 {
        self.0
    }
}

/// Expected job length in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DurationDays(i32);

impl DurationDays {
    const MAX_DAYS: i64 = 3650;

    pub fn new(days: i64) -> Result<Self, DurationError> {
        if days < 1 {
            Err(DurationError::TooShort(days))
        } else if days > Self::MAX_DAYS {
            Err(DurationError::TooLong {
                max: Self::MAX_DAYS,
                actual: days,
            })
        } else {
            Ok(Self(days as i32))
        }
    }

    pub fn days(&self) -> i32 {
        self.0
    }
}

impl Default for DurationDays {
    fn default() -> Self {
        Self(1)
    }
}

/// Catalog entry ready to be persisted; the store assigns id and timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct NewHomeService {
    pub name: ServiceName,
    pub category: ServiceCategory,
    pub description: String,
    pub price: Price,
    pub duration_days: DurationDays,
    pub is_available: bool,
}

/// Partial update; only provided fields change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateHomeServiceCommand {
    pub name: Option<ServiceName>,
    pub category: Option<ServiceCategory>,
    pub description: Option<String>,
    pub price: Option<Price>,
    pub duration_days: Option<DurationDays>,
    pub is_available: Option<bool>,
}

impl UpdateHomeServiceCommand {
    /// Apply the provided fields to `service`, refreshing `updated_at`.
    pub fn apply_to(&self, service: &mut HomeService, now: DateTime<Utc>) {
        if let Some(name) = &self.name {
            service.name = name.clone();
        }
        if let Some(category) = self.category {
            service.category = category;
        }
        if let Some(description) = &self.description {
            service.description = description.clone();
        }
        if let Some(price) = self.price {
            service.price = price;
        }
        if let Some(duration_days) = self.duration_days {
            service.duration_days = duration_days;
        }
        if let Some(is_available) = self.is_available {
            service.is_available = is_available;
        }
        service.updated_at = now;
    }
}

/// Aggregate figures shown on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CatalogStats {
    pub total_services: u64,
    pub available_services: u64,
    pub total_value: f64,
}
