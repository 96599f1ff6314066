use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// Borehole intervals drilled during a record-set: diameter, drilling method and drilling fluid properties.
#[derive(Clone, Debug, Default, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "Well_Bore")]
#[schema(as = Bore)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "GlobalID")]
    pub global_id: Uuid,
    #[sea_orm(column_name = "OBJECTID")]
    pub object_id: Option<i32>,
    #[sea_orm(column_name = "RecrdsetID")]
    pub record_set_id: Option<Uuid>,
    #[sea_orm(column_name = "FromDepth")]
    pub from_depth: Option<f64>,
    #[sea_orm(column_name = "ToDepth")]
    pub to_depth: Option<f64>,
    #[sea_orm(column_name = "DrillMethd")]
    pub drill_method: Option<String>,
    #[sea_orm(column_name = "BoreDia")]
    pub bore_diameter: Option<f64>,
    #[sea_orm(column_name = "BoreUnits")]
    pub bore_units: Option<String>,
    #[sea_orm(column_name = "DrillFluid")]
    pub drill_fluid: Option<String>,
    #[sea_orm(column_name = "FldSalinity")]
    pub fluid_salinity: Option<f64>,
    #[sea_orm(column_name = "FldRstvity")]
    pub fluid_resistivity: Option<f64>,
    #[sea_orm(column_name = "Fluid_pH")]
    pub fluid_ph: Option<f64>,
    #[sea_orm(column_name = "FldDensity")]
    pub fluid_density: Option<f64>,
    #[sea_orm(column_name = "FldLevel")]
    pub fluid_level: Option<f64>,
    #[sea_orm(column_name = "FldViscsty")]
    pub fluid_viscosity: Option<f64>,
    #[sea_orm(column_name = "FluidLoss")]
    pub fluid_loss: Option<String>,
    #[sea_orm(column_name = "Comments")]
    pub comments: Option<String>,
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
