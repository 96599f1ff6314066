use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Injection pressures are published by the state oil conservation division
/// and loaded alongside the well tables. Only the columns the API reads are
/// declared here.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(
            r#"
            CREATE TABLE IF NOT EXISTS "tbl_OCD_WellInjections_InjPressuresByDatePeriod_Life" (
                "API_WellID_nodash" varchar(14),
                "wellType" varchar(50),
                "wellname" varchar(128),
                "wellstatus" varchar(50),
                "wellcounty" varchar(50)
            )
            "#,
        )
        .await?;

        db.execute_unprepared(
            r#"
            CREATE INDEX IF NOT EXISTS "ix_injection_api"
            ON "tbl_OCD_WellInjections_InjPressuresByDatePeriod_Life" ("API_WellID_nodash")
            "#,
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"DROP TABLE IF EXISTS "tbl_OCD_WellInjections_InjPressuresByDatePeriod_Life""#,
            )
            .await?;

        Ok(())
    }
}
