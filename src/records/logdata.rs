use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// Geophysical log inventory entries.
#[derive(Clone, Debug, Default, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "Well_LogData")]
#[schema(as = LogData)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "GlobalID")]
    pub global_id: Uuid,
    #[sea_orm(column_name = "OBJECTID")]
    pub object_id: Option<i32>,
    #[sea_orm(column_name = "RecrdsetID")]
    pub record_set_id: Option<Uuid>,
    #[sea_orm(column_name = "LogClass")]
    pub log_class: Option<String>,
    #[sea_orm(column_name = "LogType")]
    pub log_type: Option<String>,
    #[sea_orm(column_name = "LogTitle")]
    pub log_title: Option<String>,
    #[sea_orm(column_name = "LogDate")]
    pub log_date: Option<DateTime>,
    #[sea_orm(column_name = "FromDepth")]
    pub from_depth: Option<f64>,
    #[sea_orm(column_name = "ToDepth")]
    pub to_depth: Option<f64>,
    #[sea_orm(column_name = "Hotlink")]
    pub hotlink: Option<String>,
    #[sea_orm(column_name = "FileNo")]
    pub file_number: Option<i32>,
    #[sea_orm(column_name = "FileLoc")]
    pub file_location: Option<String>,
    #[sea_orm(column_name = "Int_Notes")]
    pub internal_notes: Option<String>,
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
