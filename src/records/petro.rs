use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// Producing formation and pool per production interval. Keyed by the
/// production interval rather than a global id.
#[derive(Clone, Debug, Default, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "Well_PetroDat")]
#[schema(as = Petro)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "PrdIntvlID")]
    pub production_interval_id: Uuid,
    #[sea_orm(column_name = "RecrdsetID")]
    pub record_set_id: Option<Uuid>,
    #[sea_orm(column_name = "ProdFm")]
    pub producing_formation: Option<String>,
    #[sea_orm(column_name = "Field_Pool")]
    pub field_pool: Option<String>,
    #[sea_orm(column_name = "PrdFrmDpth")]
    pub from_depth: Option<f64>,
    #[sea_orm(column_name = "PrdToDepth")]
    pub to_depth: Option<f64>,
    #[sea_orm(column_name = "Int_Notes")]
    pub internal_notes: Option<String>,
    #[sea_orm(column_name = "OCD_PoolID")]
    pub ocd_pool_id: Option<String>,
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
