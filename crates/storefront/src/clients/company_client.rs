//! # Company Client
//!
//! Domain API over the companies table: registration with a generated short name,
//! storefront lookup and owner settings.
use crate::company_table::{CompanyError, CompanyFilter, CompanyInsert, CompanyPatch, CompanyRow};
use crate::model::{Company, CompanyId, CompanySettings, NewCompany, RepresentativeId, UserId};
use crate::slug::{is_valid_slug, slugify, unique_slug};
use async_trait::async_trait;
use std::collections::HashSet;
use table_actor::{StoreError, TableAccess, TableClient};
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct CompanyClient {
    inner: TableClient<CompanyRow>,
}

#[async_trait]
impl TableAccess<CompanyRow> for CompanyClient {
    type Error = CompanyError;

    fn inner(&self) -> &TableClient<CompanyRow> {
        &self.inner
    }

    fn map_error(e: StoreError) -> CompanyError {
        match e {
            StoreError::NotFound { id, .. } => CompanyError::NotFound(id),
            other => other
                .into_row_error()
                .unwrap_or_else(|e| CompanyError::Store(e.to_string())),
        }
    }
}

fn to_companies(rows: Vec<CompanyRow>) -> Result<Vec<Company>, CompanyError> {
    rows.into_iter().map(Company::try_from).collect()
}

impl CompanyClient {
    pub fn new(inner: TableClient<CompanyRow>) -> Self {
        Self { inner }
    }

    /// Registers a company under the first free short name derived from its name
    /// (`acme`, `acme-2`, …). New companies start active.
    #[instrument(skip(self))]
    pub async fn register(&self, company: NewCompany) -> Result<Company, CompanyError> {
        if company.name.trim().is_empty() {
            return Err(CompanyError::MissingName);
        }
        let taken: HashSet<String> = self
            .select(CompanyFilter::All)
            .await?
            .into_iter()
            .map(|row| row.short_name)
            .collect();
        let short_name = unique_slug(&slugify(&company.name), |s| taken.contains(s));
        debug!(%short_name, "Generated short name");

        let row = self
            .inner
            .insert(CompanyInsert {
                name: company.name,
                short_name: short_name.clone(),
                owner_id: company.owner_id,
                representative_id: company.representative_id,
                logo_url: company.logo_url,
            })
            .await
            .map_err(|e| Self::taken_or(e, &short_name))?;

        info!(company_id = %row.id, %short_name, "Company registered");
        Company::try_from(row)
    }

    pub async fn find(&self, id: CompanyId) -> Result<Option<Company>, CompanyError> {
        self.get(id).await?.map(Company::try_from).transpose()
    }

    /// Storefront lookup. Inactive companies do not resolve.
    #[instrument(skip(self))]
    pub async fn by_short_name(&self, short_name: &str) -> Result<Option<Company>, CompanyError> {
        let rows = self
            .select(CompanyFilter::ActiveShortName(short_name.to_string()))
            .await?;
        rows.into_iter().next().map(Company::try_from).transpose()
    }

    /// All companies, newest first.
    pub async fn list(&self) -> Result<Vec<Company>, CompanyError> {
        let mut companies = to_companies(self.select(CompanyFilter::All).await?)?;
        companies.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(companies)
    }

    pub async fn owned_by(&self, owner: UserId) -> Result<Vec<Company>, CompanyError> {
        to_companies(self.select(CompanyFilter::Owner(owner)).await?)
    }

    pub async fn referred_by(
        &self,
        representative: RepresentativeId,
    ) -> Result<Vec<Company>, CompanyError> {
        to_companies(
            self.select(CompanyFilter::Representative(representative))
                .await?,
        )
    }

    #[instrument(skip(self))]
    pub async fn update_settings(
        &self,
        id: CompanyId,
        settings: CompanySettings,
    ) -> Result<Company, CompanyError> {
        let row = self
            .inner
            .update(id, CompanyPatch::from(settings))
            .await
            .map_err(Self::map_error)?;
        Company::try_from(row)
    }

    /// Replaces the short name. It must already be a valid slug and unused.
    #[instrument(skip(self))]
    pub async fn set_short_name(
        &self,
        id: CompanyId,
        short_name: &str,
    ) -> Result<Company, CompanyError> {
        if !is_valid_slug(short_name) {
            return Err(CompanyError::InvalidShortName(short_name.to_string()));
        }
        let patch = CompanyPatch {
            short_name: Some(short_name.to_string()),
            ..CompanyPatch::default()
        };
        let row = self
            .inner
            .update(id, patch)
            .await
            .map_err(|e| Self::taken_or(e, short_name))?;
        info!(company_id = %id, %short_name, "Short name changed");
        Company::try_from(row)
    }

    fn taken_or(e: StoreError, short_name: &str) -> CompanyError {
        match e {
            StoreError::Conflict { .. } => CompanyError::ShortNameTaken(short_name.to_string()),
            other => Self::map_error(other),
        }
    }
}
