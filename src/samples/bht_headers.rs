use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// Bottom-hole temperature measurement header.
#[derive(Clone, Debug, Default, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "GT_BHTheader")]
#[schema(as = BhtHeader)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "BHTGUID")]
    pub bht_id: Uuid,
    #[sea_orm(column_name = "SamplSetID")]
    pub sample_set_id: Option<Uuid>,
    #[sea_orm(column_name = "BoreDia")]
    pub bore_diameter: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::samples::models::Entity",
        from = "Column::SampleSetId",
        to = "crate::samples::models::Column::SampleSetId"
    )]
    Samples,
}

impl Related<crate::samples::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Samples.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
