use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// Free-text driller's log entries.
#[derive(Clone, Debug, Default, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "Well_Drillers")]
#[schema(as = Drillers)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "GlobalID")]
    pub global_id: Uuid,
    #[sea_orm(column_name = "OBJECTID")]
    pub object_id: Option<i32>,
    #[sea_orm(column_name = "RecrdsetID")]
    pub record_set_id: Option<Uuid>,
    #[sea_orm(column_name = "Month_")]
    pub month: Option<i32>,
    #[sea_orm(column_name = "Day_")]
    pub day: Option<i32>,
    #[sea_orm(column_name = "Year_")]
    pub year: Option<i32>,
    #[sea_orm(column_name = "Information", column_type = "Text")]
    pub information: Option<String>,
    #[sea_orm(column_name = "WorkType")]
    pub work_type: Option<String>,
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
