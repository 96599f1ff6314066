use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// Regulatory header of a well. Wells without an API number are not listed.
#[derive(Clone, Debug, Default, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "Well_Header")]
#[schema(as = Header)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "OBJECTID")]
    pub object_id: i32,
    #[sea_orm(column_name = "WellDataID")]
    pub well_data_id: Option<Uuid>,
    #[sea_orm(column_name = "API")]
    pub api: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::wells::models::Entity",
        from = "Column::WellDataId",
        to = "crate::wells::models::Column::WellDataId"
    )]
    Wells,
}

impl Related<crate::wells::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Wells.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
