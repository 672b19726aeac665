//! Backend row shape for `companies` and its adapter to [`Company`].

use super::CompanyError;
use crate::model::{
    Company, CompanyId, CompanySettings, DisplayMode, QuantitySelectionMode, RepresentativeId,
    UserId,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyRow {
    pub id: CompanyId,
    pub name: String,
    pub short_name: String,
    pub owner_id: UserId,
    pub active: bool,
    pub logo_url: Option<String>,
    pub display_mode: String,
    pub quantity_selection_mode: String,
    pub representative_id: Option<RepresentativeId>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CompanyInsert {
    pub name: String,
    pub short_name: String,
    pub owner_id: UserId,
    pub representative_id: Option<RepresentativeId>,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CompanyPatch {
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub active: Option<bool>,
    pub logo_url: Option<Option<String>>,
    pub display_mode: Option<String>,
    pub quantity_selection_mode: Option<String>,
}

impl From<CompanySettings> for CompanyPatch {
    fn from(settings: CompanySettings) -> Self {
        Self {
            name: settings.name,
            short_name: None,
            active: settings.active,
            logo_url: settings.logo_url,
            display_mode: settings.display_mode.map(|m| m.as_str().to_string()),
            quantity_selection_mode: settings
                .quantity_selection_mode
                .map(|m| m.as_str().to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub enum CompanyFilter {
    All,
    ShortName(String),
    /// Storefront lookup: only active companies resolve.
    ActiveShortName(String),
    Owner(UserId),
    Representative(RepresentativeId),
}

impl TryFrom<CompanyRow> for Company {
    type Error = CompanyError;

    fn try_from(row: CompanyRow) -> Result<Self, Self::Error> {
        let display_mode: DisplayMode = row
            .display_mode
            .parse()
            .map_err(CompanyError::MalformedRow)?;
        let quantity_selection_mode: QuantitySelectionMode = row
            .quantity_selection_mode
            .parse()
            .map_err(CompanyError::MalformedRow)?;

        Ok(Company {
            id: row.id,
            name: row.name,
            short_name: row.short_name,
            owner_id: row.owner_id,
            active: row.active,
            logo_url: row.logo_url,
            display_mode,
            quantity_selection_mode,
            representative_id: row.representative_id,
            created_at: row.created_at,
        })
    }
}
