//! [`TableRow`] implementation for [`CompanyRow`].
//!
//! Short names are a unique key; the table rejects a duplicate on insert and on update.

use super::row::{CompanyFilter, CompanyInsert, CompanyPatch, CompanyRow};
use super::CompanyError;
use crate::model::{CompanyId, DisplayMode, QuantitySelectionMode};
use crate::slug::is_valid_slug;
use async_trait::async_trait;
use chrono::Utc;
use table_actor::TableRow;

#[async_trait]
impl TableRow for CompanyRow {
    const TABLE: &'static str = "companies";
    type Id = CompanyId;
    type Insert = CompanyInsert;
    type Patch = CompanyPatch;
    type Filter = CompanyFilter;
    type Context = ();
    type Error = CompanyError;

    fn id(&self) -> &CompanyId {
        &self.id
    }

    fn from_insert(id: CompanyId, params: CompanyInsert) -> Result<Self, CompanyError> {
        if params.name.trim().is_empty() {
            return Err(CompanyError::MissingName);
        }
        if !is_valid_slug(&params.short_name) {
            return Err(CompanyError::InvalidShortName(params.short_name));
        }
        Ok(Self {
            id,
            name: params.name.trim().to_string(),
            short_name: params.short_name,
            owner_id: params.owner_id,
            active: true,
            logo_url: params.logo_url,
            display_mode: DisplayMode::default().as_str().to_string(),
            quantity_selection_mode: QuantitySelectionMode::default().as_str().to_string(),
            representative_id: params.representative_id,
            created_at: Utc::now(),
        })
    }

    fn matches(&self, filter: &CompanyFilter) -> bool {
        match filter {
            CompanyFilter::All => true,
            CompanyFilter::ShortName(short) => &self.short_name == short,
            CompanyFilter::ActiveShortName(short) => self.active && &self.short_name == short,
            CompanyFilter::Owner(owner) => &self.owner_id == owner,
            CompanyFilter::Representative(rep) => self.representative_id.as_ref() == Some(rep),
        }
    }

    fn conflicts_with(&self, other: &Self) -> bool {
        self.short_name == other.short_name
    }

    async fn on_update(&mut self, patch: CompanyPatch, _ctx: &()) -> Result<(), CompanyError> {
        if let Some(name) = patch.name {
            if name.trim().is_empty() {
                return Err(CompanyError::MissingName);
            }
            self.name = name.trim().to_string();
        }
        if let Some(short_name) = patch.short_name {
            if !is_valid_slug(&short_name) {
                return Err(CompanyError::InvalidShortName(short_name));
            }
            self.short_name = short_name;
        }
        if let Some(mode) = patch.display_mode {
            mode.parse::<DisplayMode>()
                .map_err(CompanyError::MalformedRow)?;
            self.display_mode = mode;
        }
        if let Some(mode) = patch.quantity_selection_mode {
            mode.parse::<QuantitySelectionMode>()
                .map_err(CompanyError::MalformedRow)?;
            self.quantity_selection_mode = mode;
        }
        if let Some(active) = patch.active {
            self.active = active;
        }
        if let Some(logo_url) = patch.logo_url {
            self.logo_url = logo_url;
        }
        Ok(())
    }
}
