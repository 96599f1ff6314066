use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// Lithostratigraphic unit picks (tops and bottoms).
#[derive(Clone, Debug, Default, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "Well_LthStrat")]
#[schema(as = LithStrat)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "GlobalID")]
    pub global_id: Uuid,
    #[sea_orm(column_name = "OBJECTID")]
    pub object_id: Option<i32>,
    #[sea_orm(column_name = "RecrdsetID")]
    pub record_set_id: Option<Uuid>,
    #[sea_orm(column_name = "LithClass")]
    pub lith_class: Option<String>,
    #[sea_orm(column_name = "UnitBasis")]
    pub unit_basis: Option<String>,
    #[sea_orm(column_name = "UnitName")]
    pub unit_name: Option<String>,
    #[sea_orm(column_name = "GeoID")]
    pub geo_id: Option<String>,
    #[sea_orm(column_name = "WithinUnit")]
    pub within_unit: Option<String>,
    #[sea_orm(column_name = "Top_Qual")]
    pub top_qualifier: Option<String>,
    #[sea_orm(column_name = "Depth2Top")]
    pub depth_to_top: Option<f64>,
    #[sea_orm(column_name = "Top_TVD")]
    pub top_tvd: Option<f64>,
    #[sea_orm(column_name = "Elev_Top")]
    pub elevation_top: Option<f64>,
    #[sea_orm(column_name = "Botm_Qual")]
    pub bottom_qualifier: Option<String>,
    #[sea_orm(column_name = "Depth2Botm")]
    pub depth_to_bottom: Option<f64>,
    #[sea_orm(column_name = "Bottom_TVD")]
    pub bottom_tvd: Option<f64>,
    #[sea_orm(column_name = "Elev_Bot")]
    pub elevation_bottom: Option<f64>,
    #[sea_orm(column_name = "DpthMethod")]
    pub depth_method: Option<String>,
    #[sea_orm(column_name = "PickConfid")]
    pub pick_confidence: Option<String>,
    #[sea_orm(column_name = "Absent")]
    pub absent: Option<i32>,
    #[sea_orm(column_name = "Overturned")]
    pub overturned: Option<i32>,
    #[sea_orm(column_name = "Duplicated")]
    pub duplicated: Option<i32>,
    #[sea_orm(column_name = "Exclude")]
    pub exclude: Option<i32>,
    #[sea_orm(column_name = "CheckPick")]
    pub check_pick: Option<i32>,
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
