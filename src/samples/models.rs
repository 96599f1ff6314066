use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// A sample set collected under a record-set. Parent of the geothermal
/// intervals, temperature-depth rows and BHT headers.
#[derive(Clone, Debug, Default, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "Well_Samples")]
#[schema(as = Sample)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "SamplSetID")]
    pub sample_set_id: Uuid,
    #[sea_orm(column_name = "OBJECTID")]
    pub object_id: Option<i32>,
    #[sea_orm(column_name = "RecrdsetID")]
    pub record_set_id: Option<Uuid>,
    #[sea_orm(column_name = "SmpSetName")]
    pub name: Option<String>,
    #[sea_orm(column_name = "SamplClass")]
    pub sample_class: Option<String>,
    #[sea_orm(column_name = "SampleType")]
    pub sample_type: Option<String>,
    #[sea_orm(column_name = "SampleFm")]
    pub formation: Option<String>,
    #[sea_orm(column_name = "SampleLoc")]
    pub location: Option<String>,
    #[sea_orm(column_name = "SampleDate")]
    pub sample_date: Option<DateTime>,
    #[sea_orm(column_name = "From_Depth")]
    pub from_depth: Option<f64>,
    #[sea_orm(column_name = "To_Depth")]
    pub to_depth: Option<f64>,
    #[sea_orm(column_name = "SmpDpUnt")]
    pub depth_units: Option<String>,
    #[sea_orm(column_name = "From_TVD")]
    pub from_tvd: Option<f64>,
    #[sea_orm(column_name = "To_TVD")]
    pub to_tvd: Option<f64>,
    #[sea_orm(column_name = "From_Elev")]
    pub from_elevation: Option<f64>,
    #[sea_orm(column_name = "To_Elev")]
    pub to_elevation: Option<f64>,
    #[sea_orm(column_name = "Porosity")]
    pub porosity: Option<i32>,
    #[sea_orm(column_name = "Permeablty")]
    pub permeability: Option<i32>,
    #[sea_orm(column_name = "Density")]
    pub density: Option<i32>,
    #[sea_orm(column_name = "DST_Tests")]
    pub dst_tests: Option<i32>,
    #[sea_orm(column_name = "ThinSect")]
    pub thin_section: Option<i32>,
    #[sea_orm(column_name = "Geochron")]
    pub geochronology: Option<i32>,
    #[sea_orm(column_name = "Geochem")]
    pub geochemistry: Option<i32>,
    #[sea_orm(column_name = "Geothermal")]
    pub geothermal: Option<i32>,
    #[sea_orm(column_name = "WholeRock")]
    pub whole_rock: Option<i32>,
    #[sea_orm(column_name = "Paleontlgy")]
    pub paleontology: Option<i32>,
    #[sea_orm(column_name = "EnteredBy")]
    pub entered_by: Option<String>,
    #[sea_orm(column_name = "EntryDate")]
    pub entry_date: Option<DateTime>,
    #[sea_orm(column_name = "Notes")]
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::records::models::Entity",
        from = "Column::RecordSetId",
        to = "crate::records::models::Column::RecordSetId"
    )]
    Records,
}

impl Related<crate::records::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Records.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
