use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, Default, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "Well_Liner")]
#[schema(as = Liner)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "GlobalID")]
    pub global_id: Uuid,
    #[sea_orm(column_name = "OBJECTID")]
    pub object_id: Option<i32>,
    #[sea_orm(column_name = "RecrdsetID")]
    pub record_set_id: Option<Uuid>,
    #[sea_orm(column_name = "Comments")]
    pub comments: Option<String>,
    #[sea_orm(column_name = "Sax")]
    pub sacks: Option<i32>,
    #[sea_orm(column_name = "ToDepth")]
    pub to_depth: Option<f64>,
    #[sea_orm(column_name = "FromDepth")]
    pub from_depth: Option<f64>,
    #[sea_orm(column_name = "LinerSize")]
    pub liner_size: Option<f64>,
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
