use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, Default, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "GT_BHTdata")]
#[schema(as = BhtData)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "BHTGUID")]
    pub bht_id: Uuid,
    #[sea_orm(column_name = "BHT")]
    pub bht: Option<f64>,
    #[sea_orm(column_name = "Depth")]
    pub depth: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::samples::bht_headers::Entity",
        from = "Column::BhtId",
        to = "crate::samples::bht_headers::Column::BhtId"
    )]
    BhtHeaders,
}

impl Related<crate::samples::bht_headers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BhtHeaders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
