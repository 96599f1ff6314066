use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, Default, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "GT_Conductvty")]
#[schema(as = ThermalConductivity)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "GlobalID")]
    pub global_id: Uuid,
    #[sea_orm(column_name = "OBJECTID")]
    pub object_id: Option<i32>,
    #[sea_orm(column_name = "IntrvlGUID")]
    pub interval_id: Option<Uuid>,
    #[sea_orm(column_name = "Cnductvity")]
    pub conductivity: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::samples::intervals::Entity",
        from = "Column::IntervalId",
        to = "crate::samples::intervals::Column::IntervalId"
    )]
    Intervals,
}

impl Related<crate::samples::intervals::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Intervals.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
