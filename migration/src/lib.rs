pub use sea_orm_migration::prelude::*;

mod m20230601_000001_create_well_schema;
mod m20230601_000002_create_injection_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20230601_000001_create_well_schema::Migration),
            Box::new(m20230601_000002_create_injection_table::Migration),
        ]
    }
}
