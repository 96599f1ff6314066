use sea_orm::FromQueryResult;
use serde::Serialize;
use utoipa::ToSchema;

/// One row of the injection-pressure table published by the oil
/// conservation division, reduced to the columns the API exposes.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize, ToSchema)]
pub struct InjectionWell {
    pub well_type: Option<String>,
    pub well_name: Option<String>,
    pub well_status: Option<String>,
    pub well_county: Option<String>,
}
