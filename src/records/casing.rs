use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// Casing strings set in the well.
#[derive(Clone, Debug, Default, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "Well_Casing")]
#[schema(as = Casing)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "GlobalID")]
    pub global_id: Uuid,
    #[sea_orm(column_name = "OBJECTID")]
    pub object_id: Option<i32>,
    #[sea_orm(column_name = "RecrdsetID")]
    pub record_set_id: Option<Uuid>,
    #[sea_orm(column_name = "Depth")]
    pub depth: Option<f64>,
    #[sea_orm(column_name = "CasingType")]
    pub casing_type: Option<String>,
    #[sea_orm(column_name = "CasDiaType")]
    pub diameter_type: Option<String>,
    #[sea_orm(column_name = "CasingMtrl")]
    pub material: Option<String>,
    #[sea_orm(column_name = "CasingDiam")]
    pub diameter: Option<f64>,
    #[sea_orm(column_name = "CasDiaUnit")]
    pub diameter_units: Option<String>,
    #[sea_orm(column_name = "CasDpthDrl")]
    pub depth_drilled: Option<f64>,
    #[sea_orm(column_name = "CasDpthLog")]
    pub depth_logged: Option<f64>,
    #[sea_orm(column_name = "CasingWgt")]
    pub weight: Option<f64>,
    #[sea_orm(column_name = "CasngWgtUn")]
    pub weight_units: Option<String>,
    #[sea_orm(column_name = "CasngThick")]
    pub thickness: Option<f64>,
    #[sea_orm(column_name = "CasngThkUn")]
    pub thickness_units: Option<String>,
    #[sea_orm(column_name = "CasingLen")]
    pub length: Option<f64>,
    #[sea_orm(column_name = "CasLenUnit")]
    pub length_units: Option<String>,
    #[sea_orm(column_name = "Sax")]
    pub sacks: Option<i32>,
    #[sea_orm(column_name = "CmntRcd")]
    pub cement_record: Option<String>,
    #[sea_orm(column_name = "Comments")]
    pub comments: Option<String>,
    #[sea_orm(column_name = "DepthType")]
    pub depth_type: Option<String>,
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
