pub mod bore;
pub mod casing;
pub mod drillers;
pub mod history;
pub mod liner;
pub mod lithlog;
pub mod lithstrat;
pub mod logdata;
pub mod models;
pub mod perforation;
pub mod petro;
pub mod production;
pub mod treatment;
pub mod tubing;

#[cfg(test)]
mod tests;

use sea_orm::EntityTrait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

/// Entities that hang off a record-set through the `RecrdsetID` column.
pub trait RecordSetChild: EntityTrait {
    fn record_set_column() -> Self::Column;
    fn record_set_id(model: &Self::Model) -> Option<Uuid>;
}

macro_rules! belongs_to_record_set {
    ($($($segment:ident)::+),+ $(,)?) => {
        $(
            impl RecordSetChild for $($segment)::+::Entity {
                fn record_set_column() -> Self::Column {
                    $($segment)::+::Column::RecordSetId
                }

                fn record_set_id(model: &Self::Model) -> Option<Uuid> {
                    model.record_set_id
                }
            }
        )+
    };
}

belongs_to_record_set!(
    bore,
    casing,
    drillers,
    history,
    liner,
    lithlog,
    lithstrat,
    logdata,
    perforation,
    petro,
    production,
    treatment,
    tubing,
    crate::samples::models,
);

/// Association kinds reachable through `GET /api/v1/wells/{id}/{kind}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RecordSetKind {
    Bore,
    Casing,
    Drillers,
    History,
    Liner,
    Lithlog,
    Lithstrat,
    Logdata,
    Perforation,
    Petro,
    Production,
    Samples,
    Treatment,
    Tubing,
}

impl RecordSetKind {
    pub const ALL: [RecordSetKind; 14] = [
        RecordSetKind::Bore,
        RecordSetKind::Casing,
        RecordSetKind::Drillers,
        RecordSetKind::History,
        RecordSetKind::Liner,
        RecordSetKind::Lithlog,
        RecordSetKind::Lithstrat,
        RecordSetKind::Logdata,
        RecordSetKind::Perforation,
        RecordSetKind::Petro,
        RecordSetKind::Production,
        RecordSetKind::Samples,
        RecordSetKind::Treatment,
        RecordSetKind::Tubing,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RecordSetKind::Bore => "bore",
            RecordSetKind::Casing => "casing",
            RecordSetKind::Drillers => "drillers",
            RecordSetKind::History => "history",
            RecordSetKind::Liner => "liner",
            RecordSetKind::Lithlog => "lithlog",
            RecordSetKind::Lithstrat => "lithstrat",
            RecordSetKind::Logdata => "logdata",
            RecordSetKind::Perforation => "perforation",
            RecordSetKind::Petro => "petro",
            RecordSetKind::Production => "production",
            RecordSetKind::Samples => "samples",
            RecordSetKind::Treatment => "treatment",
            RecordSetKind::Tubing => "tubing",
        }
    }
}

impl fmt::Display for RecordSetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordSetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown record-set association '{s}'"))
    }
}
