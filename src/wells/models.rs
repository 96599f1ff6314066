use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// Root well row. `object_id` is the public well identifier; `well_data_id`
/// links the header, spots and record-sets.
#[derive(Clone, Debug, Default, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "Well_Location")]
#[schema(as = WellLocation)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "OBJECTID")]
    pub object_id: i32,
    #[sea_orm(column_name = "WellDataID")]
    pub well_data_id: Option<Uuid>,
    #[sea_orm(column_name = "Lat_dd83")]
    pub latitude: Option<f64>,
    #[sea_orm(column_name = "Long_dd83")]
    pub longitude: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::headers::Entity")]
    Header,
    #[sea_orm(has_many = "super::spots::Entity")]
    Spots,
    #[sea_orm(has_many = "crate::records::models::Entity")]
    Records,
}

impl Related<super::headers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Header.def()
    }
}

impl Related<super::spots::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Spots.def()
    }
}

impl Related<crate::records::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Records.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Point geometry for mapping. Coordinates are passed through as stored,
    /// including nulls.
    pub fn geometry(&self) -> Geometry {
        Geometry::point(self.longitude, self.latitude)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct Geometry {
    pub coordinates: Vec<Option<f64>>,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Geometry {
    pub fn point(longitude: Option<f64>, latitude: Option<f64>) -> Self {
        Self {
            coordinates: vec![longitude, latitude],
            kind: "Point".to_string(),
        }
    }
}

/// Well as returned by `GET /api/v1/wells/{id}`
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct Well {
    pub object_id: i32,
    pub well_data_id: Option<Uuid>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub api: Option<String>,
    pub geometry: Geometry,
}

impl Well {
    pub fn new(model: &Model, header: Option<&super::headers::Model>) -> Self {
        Self {
            object_id: model.object_id,
            well_data_id: model.well_data_id,
            latitude: model.latitude,
            longitude: model.longitude,
            api: header.and_then(|h| h.api.clone()),
            geometry: model.geometry(),
        }
    }
}

/// One row of the plain well listing
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct WellListing {
    pub well: Model,
    pub header: super::headers::Model,
}

#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct FeatureProperties {
    pub name: i32,
    pub well_id: i32,
    pub api: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: String,
    pub properties: FeatureProperties,
    pub geometry: Geometry,
}

impl Feature {
    pub fn from_listing(well: &Model, header: &super::headers::Model) -> Self {
        Self {
            kind: "Feature".to_string(),
            properties: FeatureProperties {
                name: well.object_id,
                well_id: well.object_id,
                api: header.api.clone(),
            },
            geometry: well.geometry(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<Feature>,
}

impl FromIterator<Feature> for FeatureCollection {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        Self {
            kind: "FeatureCollection".to_string(),
            features: iter.into_iter().collect(),
        }
    }
}
