use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, Default, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "Well_Spots")]
#[schema(as = Spot)]
pub struct Model {
    #[sea_orm(column_name = "DsplyScale")]
    pub display_scale: Option<i32>,
    #[sea_orm(column_name = "Import_ID")]
    pub import_id: Option<i32>,
    #[sea_orm(column_name = "FGDC_code")]
    pub fgdc_code: Option<String>,
    #[sea_orm(column_name = "Well_ID")]
    pub well_label: Option<String>,
    #[sea_orm(column_name = "WellDataID")]
    pub well_data_id: Option<Uuid>,
    #[sea_orm(primary_key, auto_increment = false, column_name = "WellSpotID")]
    pub spot_id: Uuid,
    #[sea_orm(column_name = "SHAPE")]
    #[serde(skip)]
    pub shape: Option<Vec<u8>>,
    #[sea_orm(column_name = "OBJECTID")]
    pub object_id: Option<i32>,
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
