use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};
use url::Url;

use crate::entity::demo;

const MAX_URL_LEN: usize = 1024;

/// A single violated field constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub path: String,
    pub message: String,
    /// The rejected input value.
    pub value: String,
}

/// Typed failures of the persistence accessor. This layer never logs; the
/// HTTP boundary decides how each variant is rendered.
#[derive(Debug, thiserror::Error)]
pub enum DemoStoreError {
    #[error("demo with id: {0} not found")]
    NotFound(i32),
    #[error("validation failed")]
    Validation(Vec<FieldViolation>),
    #[error(transparent)]
    Db(#[from] DbErr),
}

/// Fields accepted when creating a demo. `url` is optional here so that a
/// missing field surfaces as a `url` violation rather than a body-parse error.
#[derive(Debug, Default)]
pub struct NewDemo {
    pub url: Option<String>,
    pub number: Option<i32>,
}

/// Partial update. `number` is tri-state: absent (keep), `Some(None)` (clear),
/// `Some(Some(n))` (replace).
#[derive(Debug, Default)]
pub struct DemoPatch {
    pub url: Option<String>,
    pub number: Option<Option<i32>>,
}

/// Explicit allow-list of equality filters for listing. Anything not named
/// here never reaches the query builder.
#[derive(Debug, Default)]
pub struct DemoFilter {
    pub url: Option<String>,
    pub number: Option<i32>,
}

pub struct DemoService<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> DemoService<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Validate and persist a new demo. Timestamps are assigned here.
    pub async fn create(&self, fields: NewDemo) -> Result<demo::Model, DemoStoreError> {
        let url = validate_url(fields.url.as_deref())?;

        let now = Utc::now();
        let new_demo = demo::ActiveModel {
            url: Set(url),
            number: Set(fields.number),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        Ok(new_demo.insert(self.conn).await?)
    }

    /// All demos matching the filter, newest first. `id DESC` breaks
    /// `created_at` ties so ordering stays deterministic under fast inserts.
    pub async fn list(&self, filter: DemoFilter) -> Result<Vec<demo::Model>, DemoStoreError> {
        let mut select = demo::Entity::find();

        if let Some(url) = filter.url {
            select = select.filter(demo::Column::Url.eq(url));
        }
        if let Some(number) = filter.number {
            select = select.filter(demo::Column::Number.eq(number));
        }

        Ok(select
            .order_by_desc(demo::Column::CreatedAt)
            .order_by_desc(demo::Column::Id)
            .all(self.conn)
            .await?)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<demo::Model, DemoStoreError> {
        demo::Entity::find_by_id(id)
            .one(self.conn)
            .await?
            .ok_or(DemoStoreError::NotFound(id))
    }

    /// Partial field replacement with re-validation. Refreshes `updated_at`;
    /// `created_at` and `id` are immutable.
    pub async fn update(&self, id: i32, patch: DemoPatch) -> Result<demo::Model, DemoStoreError> {
        let existing = self.find_by_id(id).await?;

        let merged_url = patch.url.as_deref().unwrap_or(&existing.url);
        let url = validate_url(Some(merged_url))?;

        let mut active: demo::ActiveModel = existing.into();
        active.url = Set(url);
        if let Some(number) = patch.number {
            active.number = Set(number);
        }
        active.updated_at = Set(Utc::now());

        Ok(active.update(self.conn).await?)
    }

    /// Hard delete. Returns the snapshot of the removed row.
    pub async fn delete(&self, id: i32) -> Result<demo::Model, DemoStoreError> {
        let existing = self.find_by_id(id).await?;
        let snapshot = existing.clone();
        existing.delete(self.conn).await?;
        Ok(snapshot)
    }
}

/// Enforce the entity invariant: `url` present, at most 1024 characters, and
/// parseable as an absolute URL. Returns the trimmed value that gets stored.
fn validate_url(url: Option<&str>) -> Result<String, DemoStoreError> {
    let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) else {
        return Err(violation("url is required", ""));
    };
    if url.chars().count() > MAX_URL_LEN {
        return Err(violation("url must be at most 1024 characters", url));
    }
    if Url::parse(url).is_err() {
        return Err(violation("url must be a valid absolute URL", url));
    }
    Ok(url.to_string())
}

fn violation(message: &str, value: &str) -> DemoStoreError {
    DemoStoreError::Validation(vec![FieldViolation {
        path: "url".into(),
        message: message.into(),
        value: value.into(),
    }])
}
