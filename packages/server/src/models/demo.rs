use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::shared::double_option;
use crate::demos::service::{DemoFilter, DemoPatch, NewDemo};
use crate::entity::demo;

#[derive(Deserialize, ToSchema)]
pub struct CreateDemoRequest {
    /// A valid absolute URL (required).
    #[schema(example = "http://www.foo.bar")]
    pub url: Option<String>,
    /// An optional number.
    #[schema(example = 1)]
    pub number: Option<i32>,
}

#[derive(Deserialize, Default, PartialEq, ToSchema)]
pub struct UpdateDemoRequest {
    #[schema(example = "http://hello.world")]
    pub url: Option<String>,
    /// Omit to keep the current value; send `null` to clear it.
    #[serde(default, deserialize_with = "double_option")]
    pub number: Option<Option<i32>>,
}

/// Equality filters accepted by the list endpoint. Unknown query parameters
/// are ignored rather than forwarded to the query builder.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DemoListQuery {
    /// Exact-match filter on `url`.
    pub url: Option<String>,
    /// Exact-match filter on `number`.
    pub number: Option<i32>,
}

#[derive(Serialize, ToSchema)]
pub struct DemoResponse {
    pub id: i32,
    pub url: String,
    pub number: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<demo::Model> for DemoResponse {
    fn from(model: demo::Model) -> Self {
        DemoResponse {
            id: model.id,
            url: model.url,
            number: model.number,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<CreateDemoRequest> for NewDemo {
    fn from(req: CreateDemoRequest) -> Self {
        NewDemo {
            url: req.url,
            number: req.number,
        }
    }
}

impl From<UpdateDemoRequest> for DemoPatch {
    fn from(req: UpdateDemoRequest) -> Self {
        DemoPatch {
            url: req.url,
            number: req.number,
        }
    }
}

impl From<DemoListQuery> for DemoFilter {
    fn from(query: DemoListQuery) -> Self {
        DemoFilter {
            url: query.url,
            number: query.number,
        }
    }
}
