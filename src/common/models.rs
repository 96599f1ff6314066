use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(ToSchema, Deserialize, Serialize)]
pub struct HealthCheck {
    pub status: String,
}

/// Map tile credential handed to the browser map
#[derive(ToSchema, Deserialize, Serialize, Default)]
pub struct MapboxToken {
    pub token: Option<String>,
}
