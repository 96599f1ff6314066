use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// Initial production tests.
#[derive(Clone, Debug, Default, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "Well_Productn")]
#[schema(as = Production)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "GlobalID")]
    pub global_id: Uuid,
    #[sea_orm(column_name = "OBJECTID")]
    pub object_id: Option<i32>,
    #[sea_orm(column_name = "RecrdsetID")]
    pub record_set_id: Option<Uuid>,
    #[sea_orm(column_name = "InitialProd")]
    pub initial_production: Option<DateTime>,
    #[sea_orm(column_name = "Method")]
    pub method: Option<String>,
    #[sea_orm(column_name = "ProdQual")]
    pub production_qualifier: Option<String>,
    #[sea_orm(column_name = "ChokeSize")]
    pub choke_size: Option<f64>,
    #[sea_orm(column_name = "ChokeQual")]
    pub choke_qualifier: Option<String>,
    #[sea_orm(column_name = "ProdZone")]
    pub production_zone: Option<String>,
    #[sea_orm(column_name = "GOR")]
    pub gas_oil_ratio: Option<f64>,
    #[sea_orm(column_name = "GORqual")]
    pub gas_oil_ratio_qualifier: Option<String>,
    #[sea_orm(column_name = "FTP")]
    pub flowing_tubing_pressure: Option<f64>,
    #[sea_orm(column_name = "FTPmin")]
    pub flowing_tubing_pressure_min: Option<f64>,
    #[sea_orm(column_name = "FTPmax")]
    pub flowing_tubing_pressure_max: Option<f64>,
    #[sea_orm(column_name = "FTPunits")]
    pub flowing_tubing_pressure_units: Option<String>,
    #[sea_orm(column_name = "SITP")]
    pub shut_in_tubing_pressure: Option<f64>,
    #[sea_orm(column_name = "SITPunits")]
    pub shut_in_tubing_pressure_units: Option<String>,
    #[sea_orm(column_name = "SICP")]
    pub shut_in_casing_pressure: Option<f64>,
    #[sea_orm(column_name = "SICPunits")]
    pub shut_in_casing_pressure_units: Option<String>,
    #[sea_orm(column_name = "CsgPress")]
    pub casing_pressure: Option<f64>,
    #[sea_orm(column_name = "CsgPressUn")]
    pub casing_pressure_units: Option<String>,
    #[sea_orm(column_name = "CsgPrsQual")]
    pub casing_pressure_qualifier: Option<String>,
    #[sea_orm(column_name = "BOPD")]
    pub oil_bopd: Option<f64>,
    #[sea_orm(column_name = "BOPDqual")]
    pub oil_bopd_qualifier: Option<String>,
    #[sea_orm(column_name = "TraceOil")]
    pub trace_oil: Option<i32>,
    #[sea_orm(column_name = "MCFGD")]
    pub gas_mcfgd: Option<f64>,
    #[sea_orm(column_name = "MillMCFGD")]
    pub gas_million_mcfgd: Option<f64>,
    #[sea_orm(column_name = "MCFGDqual")]
    pub gas_mcfgd_qualifier: Option<String>,
    #[sea_orm(column_name = "BWD")]
    pub water_bwd: Option<f64>,
    #[sea_orm(column_name = "BWDqual")]
    pub water_bwd_qualifier: Option<String>,
    #[sea_orm(column_name = "APIoilGrav")]
    pub api_oil_gravity: Option<f64>,
    #[sea_orm(column_name = "OilGravqu")]
    pub oil_gravity_qualifier: Option<String>,
    #[sea_orm(column_name = "GasGrav")]
    pub gas_gravity: Option<f64>,
    #[sea_orm(column_name = "GasGravqu")]
    pub gas_gravity_qualifier: Option<String>,
    #[sea_orm(column_name = "IP")]
    pub initial_potential: Option<String>,
    #[sea_orm(column_name = "GasBTU")]
    pub gas_btu: Option<f64>,
    #[sea_orm(column_name = "MiscInfo", column_type = "Text")]
    pub misc_info: Option<String>,
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
