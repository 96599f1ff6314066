use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// Well work history: spud, completion, plug-back and operator changes.
#[derive(Clone, Debug, Default, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "Well_History")]
#[schema(as = History)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "GlobalID")]
    pub global_id: Uuid,
    #[sea_orm(column_name = "OBJECTID")]
    pub object_id: Option<i32>,
    #[sea_orm(column_name = "RecrdsetID")]
    pub record_set_id: Option<Uuid>,
    #[sea_orm(column_name = "ActionClss")]
    pub action_class: Option<String>,
    #[sea_orm(column_name = "WorkType")]
    pub work_type: Option<String>,
    #[sea_orm(column_name = "ActionDate")]
    pub action_date: Option<DateTime>,
    #[sea_orm(column_name = "SpudDate")]
    pub spud_date: Option<DateTime>,
    #[sea_orm(column_name = "Commodity")]
    pub commodity: Option<String>,
    #[sea_orm(column_name = "PlugBack")]
    pub plug_back: Option<f64>,
    #[sea_orm(column_name = "BridgePlug")]
    pub bridge_plug: Option<String>,
    #[sea_orm(column_name = "TotalDepth")]
    pub total_depth: Option<f64>,
    #[sea_orm(column_name = "Results")]
    pub results: Option<String>,
    #[sea_orm(column_name = "LeaseID")]
    pub lease_id: Option<String>,
    #[sea_orm(column_name = "Operator")]
    pub operator: Option<String>,
    #[sea_orm(column_name = "Contractor")]
    pub contractor: Option<String>,
    #[sea_orm(column_name = "Driller")]
    pub driller: Option<String>,
    #[sea_orm(column_name = "Status")]
    pub status: Option<String>,
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
