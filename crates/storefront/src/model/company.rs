use super::{CompanyId, RepresentativeId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How product cards are laid out on the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Full,
    Compact,
}

/// Which control the storefront offers for picking a quantity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantitySelectionMode {
    #[default]
    Radio,
    Select,
}

impl DisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Full => "full",
            DisplayMode::Compact => "compact",
        }
    }
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(DisplayMode::Full),
            "compact" => Ok(DisplayMode::Compact),
            other => Err(format!("unknown display mode: {other}")),
        }
    }
}

impl QuantitySelectionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuantitySelectionMode::Radio => "radio",
            QuantitySelectionMode::Select => "select",
        }
    }
}

impl FromStr for QuantitySelectionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "radio" => Ok(QuantitySelectionMode::Radio),
            "select" => Ok(QuantitySelectionMode::Select),
            other => Err(format!("unknown quantity selection mode: {other}")),
        }
    }
}

/// A tenant: owns a catalog and a public storefront at `/{short_name}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub short_name: String,
    pub owner_id: UserId,
    pub active: bool,
    pub logo_url: Option<String>,
    pub display_mode: DisplayMode,
    pub quantity_selection_mode: QuantitySelectionMode,
    pub representative_id: Option<RepresentativeId>,
    pub created_at: DateTime<Utc>,
}

/// Registration payload. The short name is derived from `name`.
#[derive(Debug, Clone)]
pub struct NewCompany {
    pub name: String,
    pub owner_id: UserId,
    pub representative_id: Option<RepresentativeId>,
    pub logo_url: Option<String>,
}

/// Owner-editable settings. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct CompanySettings {
    pub name: Option<String>,
    pub active: Option<bool>,
    pub logo_url: Option<Option<String>>,
    pub display_mode: Option<DisplayMode>,
    pub quantity_selection_mode: Option<QuantitySelectionMode>,
}
