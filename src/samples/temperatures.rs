use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// A single temperature reading at depth.
#[derive(Clone, Debug, Default, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "GT_TempDepth")]
#[schema(as = TempVsDepth)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "GlobalID")]
    pub global_id: Uuid,
    #[sea_orm(column_name = "OBJECTID")]
    pub object_id: Option<i32>,
    #[sea_orm(column_name = "Depth")]
    pub depth: Option<f64>,
    #[sea_orm(column_name = "Temp")]
    pub temperature: Option<f64>,
    #[sea_orm(column_name = "SamplSetID")]
    pub sample_set_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::samples::models::Entity",
        from = "Column::SampleSetId",
        to = "crate::samples::models::Column::SampleSetId"
    )]
    Samples,
}

impl Related<crate::samples::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Samples.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
