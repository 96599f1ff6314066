use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// Depth interval within a sample set carrying heat-flow and conductivity measurements.
#[derive(Clone, Debug, Default, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "WS_Interval")]
#[schema(as = Interval)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "IntrvlGUID")]
    pub interval_id: Uuid,
    #[sea_orm(column_name = "SamplSetID")]
    pub sample_set_id: Option<Uuid>,
    #[sea_orm(column_name = "From_Depth")]
    pub from_depth: Option<f64>,
    #[sea_orm(column_name = "To_Depth")]
    pub to_depth: Option<f64>,
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
