use super::models::InjectionWell;
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, FromQueryResult, Statement,
};

fn lookup_sql(backend: DatabaseBackend) -> String {
    let placeholder = match backend {
        DatabaseBackend::Postgres => "$1",
        _ => "?",
    };

    format!(
        r#"SELECT "wellType" AS well_type,
                  "wellname" AS well_name,
                  "wellstatus" AS well_status,
                  "wellcounty" AS well_county
           FROM "tbl_OCD_WellInjections_InjPressuresByDatePeriod_Life"
           WHERE "API_WellID_nodash" = {placeholder}"#
    )
}

/// Injection rows recorded for an API number (without dashes).
pub async fn injections_for_api(
    db: &DatabaseConnection,
    api_id: &str,
) -> Result<Vec<InjectionWell>, DbErr> {
    let backend = db.get_database_backend();
    let statement = Statement::from_sql_and_values(backend, lookup_sql(backend), [api_id.into()]);

    InjectionWell::find_by_statement(statement).all(db).await
}
