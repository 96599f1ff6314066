use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// Perforated intervals.
#[derive(Clone, Debug, Default, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "Well_PerfIntv")]
#[schema(as = Perforation)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "GlobalID")]
    pub global_id: Uuid,
    #[sea_orm(column_name = "OBJECTID")]
    pub object_id: Option<i32>,
    #[sea_orm(column_name = "RecrdsetID")]
    pub record_set_id: Option<Uuid>,
    #[sea_orm(column_name = "PerfType")]
    pub perforation_type: Option<String>,
    #[sea_orm(column_name = "Comments")]
    pub comments: Option<String>,
    #[sea_orm(column_name = "DepthType")]
    pub depth_type: Option<String>,
    #[sea_orm(column_name = "PrfToDpth")]
    pub to_depth: Option<f64>,
    #[sea_orm(column_name = "PrfFrmDpth")]
    pub from_depth: Option<f64>,
    #[sea_orm(column_name = "PrdIntvlID")]
    pub production_interval_id: Option<Uuid>,
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
