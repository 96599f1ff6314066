use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// A record-set: one data collection episode for a well.
#[derive(Clone, Debug, Default, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "Well_Records")]
#[schema(as = Record)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "RecrdSetID")]
    pub record_set_id: Uuid,
    #[sea_orm(column_name = "OBJECTID")]
    pub object_id: Option<i32>,
    #[sea_orm(column_name = "WellDataID")]
    pub well_data_id: Option<Uuid>,
    #[sea_orm(column_name = "ActionDate")]
    pub action_date: Option<DateTime>,
    #[sea_orm(column_name = "WellName")]
    pub well_name: Option<String>,
    #[sea_orm(column_name = "WellNumber")]
    pub well_number: Option<String>,
    #[sea_orm(column_name = "API_suffix")]
    pub api_suffix: Option<String>,
    #[sea_orm(column_name = "EnteredBy")]
    pub entered_by: Option<String>,
    #[sea_orm(column_name = "EntryDate")]
    pub entry_date: Option<DateTime>,
    #[sea_orm(column_name = "Comments")]
    pub comments: Option<String>,
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
