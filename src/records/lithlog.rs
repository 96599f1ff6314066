use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// Lithologic log: rock description per depth interval.
#[derive(Clone, Debug, Default, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "Well_LithLog")]
#[schema(as = LithLog)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "GlobalID")]
    pub global_id: Uuid,
    #[sea_orm(column_name = "OBJECTID")]
    pub object_id: Option<i32>,
    #[sea_orm(column_name = "RecrdsetID")]
    pub record_set_id: Option<Uuid>,
    #[sea_orm(column_name = "GeoID")]
    pub geo_id: Option<String>,
    #[sea_orm(column_name = "FromDepth")]
    pub from_depth: Option<f64>,
    #[sea_orm(column_name = "Name")]
    pub name: Option<String>,
    #[sea_orm(column_name = "ToDepth")]
    pub to_depth: Option<f64>,
    #[sea_orm(column_name = "LithClass")]
    pub lith_class: Option<String>,
    #[sea_orm(column_name = "LithType")]
    pub lith_type: Option<String>,
    #[sea_orm(column_name = "IgneousCmp")]
    pub igneous_composition: Option<String>,
    #[sea_orm(column_name = "MMfacies")]
    pub metamorphic_facies: Option<String>,
    #[sea_orm(column_name = "Mineralogy")]
    pub mineralogy: Option<String>,
    #[sea_orm(column_name = "PrimLith")]
    pub primary_lithology: Option<String>,
    #[sea_orm(column_name = "SecondLith")]
    pub secondary_lithology: Option<String>,
    #[sea_orm(column_name = "ShortDesc")]
    pub short_description: Option<String>,
    #[sea_orm(column_name = "UnitDesc", column_type = "Text")]
    pub unit_description: Option<String>,
    #[sea_orm(column_name = "Texture")]
    pub texture: Option<String>,
    #[sea_orm(column_name = "Color")]
    pub color: Option<String>,
    #[sea_orm(column_name = "GrainSize")]
    pub grain_size: Option<String>,
    #[sea_orm(column_name = "Sorting")]
    pub sorting: Option<String>,
    #[sea_orm(column_name = "Cemntation")]
    pub cementation: Option<String>,
    #[sea_orm(column_name = "Induration")]
    pub induration: Option<String>,
    #[sea_orm(column_name = "Bedding")]
    pub bedding: Option<String>,
    #[sea_orm(column_name = "BedThkness")]
    pub bed_thickness: Option<f64>,
    #[sea_orm(column_name = "ThickUnits")]
    pub thickness_units: Option<String>,
    #[sea_orm(column_name = "Protolith")]
    pub protolith: Option<String>,
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
