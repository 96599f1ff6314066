use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Well tables in dependency order. Column names follow the ingested
/// database so the service can be pointed at it directly.
const CREATE_TABLES: &[&str] = &[
    r#"
        CREATE TABLE IF NOT EXISTS "Well_Location" (
            "OBJECTID" integer PRIMARY KEY,
            "WellDataID" uuid,
            "Lat_dd83" double precision,
            "Long_dd83" double precision
        )
    "#,
    r#"
        CREATE TABLE IF NOT EXISTS "Well_Header" (
            "OBJECTID" integer PRIMARY KEY,
            "WellDataID" uuid,
            "API" varchar(14)
        )
    "#,
    r#"
        CREATE TABLE IF NOT EXISTS "Well_Spots" (
            "DsplyScale" integer,
            "Import_ID" integer,
            "FGDC_code" varchar(16),
            "Well_ID" varchar(50),
            "WellDataID" uuid,
            "WellSpotID" uuid PRIMARY KEY,
            "SHAPE" bytea,
            "OBJECTID" integer
        )
    "#,
    r#"
        CREATE TABLE IF NOT EXISTS "Well_Records" (
            "RecrdSetID" uuid PRIMARY KEY,
            "OBJECTID" integer,
            "WellDataID" uuid,
            "ActionDate" timestamp,
            "WellName" varchar(50),
            "WellNumber" varchar(50),
            "API_suffix" varchar(4),
            "EnteredBy" varchar(4),
            "EntryDate" timestamp,
            "Comments" varchar(255)
        )
    "#,
    r#"
        CREATE TABLE IF NOT EXISTS "Well_Bore" (
            "GlobalID" uuid PRIMARY KEY,
            "OBJECTID" integer,
            "RecrdsetID" uuid,
            "FromDepth" double precision,
            "ToDepth" double precision,
            "DrillMethd" varchar(50),
            "BoreDia" double precision,
            "BoreUnits" varchar(16),
            "DrillFluid" varchar(16),
            "FldSalinity" double precision,
            "FldRstvity" double precision,
            "Fluid_pH" double precision,
            "FldDensity" double precision,
            "FldLevel" double precision,
            "FldViscsty" double precision,
            "FluidLoss" varchar(50),
            "Comments" varchar(255)
        )
    "#,
    r#"
        CREATE TABLE IF NOT EXISTS "Well_Casing" (
            "GlobalID" uuid PRIMARY KEY,
            "OBJECTID" integer,
            "RecrdsetID" uuid,
            "Depth" double precision,
            "CasingType" varchar(50),
            "CasDiaType" varchar(2),
            "CasingMtrl" varchar(50),
            "CasingDiam" double precision,
            "CasDiaUnit" varchar(16),
            "CasDpthDrl" double precision,
            "CasDpthLog" double precision,
            "CasingWgt" double precision,
            "CasngWgtUn" varchar(8),
            "CasngThick" double precision,
            "CasngThkUn" varchar(16),
            "CasingLen" double precision,
            "CasLenUnit" varchar(16),
            "Sax" integer,
            "CmntRcd" varchar(25),
            "Comments" varchar(255),
            "DepthType" varchar(8)
        )
    "#,
    r#"
        CREATE TABLE IF NOT EXISTS "Well_Drillers" (
            "GlobalID" uuid PRIMARY KEY,
            "OBJECTID" integer,
            "RecrdsetID" uuid,
            "Month_" integer,
            "Day_" integer,
            "Year_" integer,
            "Information" text,
            "WorkType" varchar(24)
        )
    "#,
    r#"
        CREATE TABLE IF NOT EXISTS "Well_History" (
            "GlobalID" uuid PRIMARY KEY,
            "OBJECTID" integer,
            "RecrdsetID" uuid,
            "ActionClss" varchar(16),
            "WorkType" varchar(16),
            "ActionDate" timestamp,
            "SpudDate" timestamp,
            "Commodity" varchar(16),
            "PlugBack" double precision,
            "BridgePlug" varchar(50),
            "TotalDepth" double precision,
            "Results" varchar(16),
            "LeaseID" varchar(128),
            "Operator" varchar(50),
            "Contractor" varchar(50),
            "Driller" varchar(50),
            "Status" varchar(16)
        )
    "#,
    r#"
        CREATE TABLE IF NOT EXISTS "Well_Liner" (
            "GlobalID" uuid PRIMARY KEY,
            "OBJECTID" integer,
            "RecrdsetID" uuid,
            "Comments" varchar(255),
            "Sax" integer,
            "ToDepth" double precision,
            "FromDepth" double precision,
            "LinerSize" double precision
        )
    "#,
    r#"
        CREATE TABLE IF NOT EXISTS "Well_LithLog" (
            "GlobalID" uuid PRIMARY KEY,
            "OBJECTID" integer,
            "RecrdsetID" uuid,
            "GeoID" varchar(16),
            "FromDepth" double precision,
            "Name" varchar(128),
            "ToDepth" double precision,
            "LithClass" varchar(50),
            "LithType" varchar(50),
            "IgneousCmp" varchar(50),
            "MMfacies" varchar(50),
            "Mineralogy" varchar(255),
            "PrimLith" varchar(128),
            "SecondLith" varchar(128),
            "ShortDesc" varchar(255),
            "UnitDesc" text,
            "Texture" varchar(255),
            "Color" varchar(255),
            "GrainSize" varchar(255),
            "Sorting" varchar(255),
            "Cemntation" varchar(255),
            "Induration" varchar(255),
            "Bedding" varchar(255),
            "BedThkness" double precision,
            "ThickUnits" varchar(8),
            "Protolith" varchar(255),
            "Comments" varchar(255)
        )
    "#,
    r#"
        CREATE TABLE IF NOT EXISTS "Well_LogData" (
            "GlobalID" uuid PRIMARY KEY,
            "OBJECTID" integer,
            "RecrdsetID" uuid,
            "LogClass" varchar(24),
            "LogType" varchar(8),
            "LogTitle" varchar(255),
            "LogDate" timestamp,
            "FromDepth" double precision,
            "ToDepth" double precision,
            "Hotlink" varchar(255),
            "FileNo" integer,
            "FileLoc" varchar(255),
            "Int_Notes" varchar(255)
        )
    "#,
    r#"
        CREATE TABLE IF NOT EXISTS "Well_LthStrat" (
            "GlobalID" uuid PRIMARY KEY,
            "OBJECTID" integer,
            "RecrdsetID" uuid,
            "LithClass" varchar(50),
            "UnitBasis" varchar(16),
            "UnitName" varchar(128),
            "GeoID" varchar(16),
            "WithinUnit" varchar(16),
            "Top_Qual" varchar(3),
            "Depth2Top" double precision,
            "Top_TVD" double precision,
            "Elev_Top" double precision,
            "Botm_Qual" varchar(3),
            "Depth2Botm" double precision,
            "Bottom_TVD" double precision,
            "Elev_Bot" double precision,
            "DpthMethod" varchar(16),
            "PickConfid" varchar(16),
            "Absent" integer,
            "Overturned" integer,
            "Duplicated" integer,
            "Exclude" integer,
            "CheckPick" integer,
            "Int_Notes" varchar(255)
        )
    "#,
    r#"
        CREATE TABLE IF NOT EXISTS "Well_PerfIntv" (
            "GlobalID" uuid PRIMARY KEY,
            "OBJECTID" integer,
            "RecrdsetID" uuid,
            "PerfType" varchar(8),
            "Comments" varchar(255),
            "DepthType" varchar(5),
            "PrfToDpth" double precision,
            "PrfFrmDpth" double precision,
            "PrdIntvlID" uuid
        )
    "#,
    r#"
        CREATE TABLE IF NOT EXISTS "Well_PetroDat" (
            "PrdIntvlID" uuid PRIMARY KEY,
            "RecrdsetID" uuid,
            "ProdFm" varchar(128),
            "Field_Pool" varchar(128),
            "PrdFrmDpth" double precision,
            "PrdToDepth" double precision,
            "Int_Notes" varchar(255),
            "OCD_PoolID" varchar(10)
        )
    "#,
    r#"
        CREATE TABLE IF NOT EXISTS "Well_Productn" (
            "GlobalID" uuid PRIMARY KEY,
            "OBJECTID" integer,
            "RecrdsetID" uuid,
            "InitialProd" timestamp,
            "Method" varchar(24),
            "ProdQual" varchar(24),
            "ChokeSize" double precision,
            "ChokeQual" varchar(24),
            "ProdZone" varchar(50),
            "GOR" double precision,
            "GORqual" varchar(24),
            "FTP" double precision,
            "FTPmin" double precision,
            "FTPmax" double precision,
            "FTPunits" varchar(4),
            "SITP" double precision,
            "SITPunits" varchar(4),
            "SICP" double precision,
            "SICPunits" varchar(4),
            "CsgPress" double precision,
            "CsgPressUn" varchar(4),
            "CsgPrsQual" varchar(16),
            "BOPD" double precision,
            "BOPDqual" varchar(8),
            "TraceOil" integer,
            "MCFGD" double precision,
            "MillMCFGD" double precision,
            "MCFGDqual" varchar(8),
            "BWD" double precision,
            "BWDqual" varchar(8),
            "APIoilGrav" double precision,
            "OilGravqu" varchar(16),
            "GasGrav" double precision,
            "GasGravqu" varchar(16),
            "IP" varchar(4),
            "GasBTU" double precision,
            "MiscInfo" text
        )
    "#,
    r#"
        CREATE TABLE IF NOT EXISTS "Well_Treatmnt" (
            "GlobalID" uuid PRIMARY KEY,
            "OBJECTID" integer,
            "RecrdsetID" uuid,
            "Comments" varchar(255),
            "Treatment" text,
            "ToDepth" double precision,
            "FromDepth" double precision
        )
    "#,
    r#"
        CREATE TABLE IF NOT EXISTS "Well_Tubing" (
            "GlobalID" uuid PRIMARY KEY,
            "OBJECTID" integer,
            "RecrdsetID" uuid,
            "Comments" varchar(255),
            "PackerSet" integer,
            "TubingDepth" double precision,
            "TubingSize" double precision
        )
    "#,
    r#"
        CREATE TABLE IF NOT EXISTS "Well_Samples" (
            "SamplSetID" uuid PRIMARY KEY,
            "OBJECTID" integer,
            "RecrdsetID" uuid,
            "SmpSetName" varchar(128),
            "SamplClass" varchar(24),
            "SampleType" varchar(50),
            "SampleFm" varchar(50),
            "SampleLoc" varchar(128),
            "SampleDate" timestamp,
            "From_Depth" double precision,
            "To_Depth" double precision,
            "SmpDpUnt" varchar(16),
            "From_TVD" double precision,
            "To_TVD" double precision,
            "From_Elev" double precision,
            "To_Elev" double precision,
            "Porosity" integer,
            "Permeablty" integer,
            "Density" integer,
            "DST_Tests" integer,
            "ThinSect" integer,
            "Geochron" integer,
            "Geochem" integer,
            "Geothermal" integer,
            "WholeRock" integer,
            "Paleontlgy" integer,
            "EnteredBy" varchar(4),
            "EntryDate" timestamp,
            "Notes" varchar(255)
        )
    "#,
    r#"
        CREATE TABLE IF NOT EXISTS "WS_Interval" (
            "IntrvlGUID" uuid PRIMARY KEY,
            "SamplSetID" uuid,
            "From_Depth" double precision,
            "To_Depth" double precision
        )
    "#,
    r#"
        CREATE TABLE IF NOT EXISTS "GT_HeatFlow" (
            "GlobalID" uuid PRIMARY KEY,
            "OBJECTID" integer,
            "IntrvlGUID" uuid,
            "Ka" double precision,
            "Kpr" double precision
        )
    "#,
    r#"
        CREATE TABLE IF NOT EXISTS "GT_Conductvty" (
            "GlobalID" uuid PRIMARY KEY,
            "OBJECTID" integer,
            "IntrvlGUID" uuid,
            "Cnductvity" double precision
        )
    "#,
    r#"
        CREATE TABLE IF NOT EXISTS "GT_TempDepth" (
            "GlobalID" uuid PRIMARY KEY,
            "OBJECTID" integer,
            "Depth" double precision,
            "Temp" double precision,
            "SamplSetID" uuid
        )
    "#,
    r#"
        CREATE TABLE IF NOT EXISTS "GT_BHTheader" (
            "BHTGUID" uuid PRIMARY KEY,
            "SamplSetID" uuid,
            "BoreDia" double precision
        )
    "#,
    r#"
        CREATE TABLE IF NOT EXISTS "GT_BHTdata" (
            "BHTGUID" uuid PRIMARY KEY,
            "BHT" double precision,
            "Depth" double precision
        )
    "#,
];

/// Lookup indexes on the columns used to walk from a well down to its samples.
const CREATE_INDEXES: &[&str] = &[
    r#"CREATE INDEX IF NOT EXISTS "ix_Well_Location_WellDataID" ON "Well_Location" ("WellDataID")"#,
    r#"CREATE INDEX IF NOT EXISTS "ix_Well_Header_WellDataID" ON "Well_Header" ("WellDataID")"#,
    r#"CREATE INDEX IF NOT EXISTS "ix_Well_Spots_WellDataID" ON "Well_Spots" ("WellDataID")"#,
    r#"CREATE INDEX IF NOT EXISTS "ix_Well_Records_WellDataID" ON "Well_Records" ("WellDataID")"#,
    r#"CREATE INDEX IF NOT EXISTS "ix_Well_Bore_RecrdsetID" ON "Well_Bore" ("RecrdsetID")"#,
    r#"CREATE INDEX IF NOT EXISTS "ix_Well_Casing_RecrdsetID" ON "Well_Casing" ("RecrdsetID")"#,
    r#"CREATE INDEX IF NOT EXISTS "ix_Well_Drillers_RecrdsetID" ON "Well_Drillers" ("RecrdsetID")"#,
    r#"CREATE INDEX IF NOT EXISTS "ix_Well_History_RecrdsetID" ON "Well_History" ("RecrdsetID")"#,
    r#"CREATE INDEX IF NOT EXISTS "ix_Well_Liner_RecrdsetID" ON "Well_Liner" ("RecrdsetID")"#,
    r#"CREATE INDEX IF NOT EXISTS "ix_Well_LithLog_RecrdsetID" ON "Well_LithLog" ("RecrdsetID")"#,
    r#"CREATE INDEX IF NOT EXISTS "ix_Well_LogData_RecrdsetID" ON "Well_LogData" ("RecrdsetID")"#,
    r#"CREATE INDEX IF NOT EXISTS "ix_Well_LthStrat_RecrdsetID" ON "Well_LthStrat" ("RecrdsetID")"#,
    r#"CREATE INDEX IF NOT EXISTS "ix_Well_PerfIntv_RecrdsetID" ON "Well_PerfIntv" ("RecrdsetID")"#,
    r#"CREATE INDEX IF NOT EXISTS "ix_Well_PetroDat_RecrdsetID" ON "Well_PetroDat" ("RecrdsetID")"#,
    r#"CREATE INDEX IF NOT EXISTS "ix_Well_Productn_RecrdsetID" ON "Well_Productn" ("RecrdsetID")"#,
    r#"CREATE INDEX IF NOT EXISTS "ix_Well_Treatmnt_RecrdsetID" ON "Well_Treatmnt" ("RecrdsetID")"#,
    r#"CREATE INDEX IF NOT EXISTS "ix_Well_Tubing_RecrdsetID" ON "Well_Tubing" ("RecrdsetID")"#,
    r#"CREATE INDEX IF NOT EXISTS "ix_Well_Samples_RecrdsetID" ON "Well_Samples" ("RecrdsetID")"#,
    r#"CREATE INDEX IF NOT EXISTS "ix_WS_Interval_SamplSetID" ON "WS_Interval" ("SamplSetID")"#,
    r#"CREATE INDEX IF NOT EXISTS "ix_GT_HeatFlow_IntrvlGUID" ON "GT_HeatFlow" ("IntrvlGUID")"#,
    r#"CREATE INDEX IF NOT EXISTS "ix_GT_Conductvty_IntrvlGUID" ON "GT_Conductvty" ("IntrvlGUID")"#,
    r#"CREATE INDEX IF NOT EXISTS "ix_GT_TempDepth_SamplSetID" ON "GT_TempDepth" ("SamplSetID")"#,
    r#"CREATE INDEX IF NOT EXISTS "ix_GT_BHTheader_SamplSetID" ON "GT_BHTheader" ("SamplSetID")"#,
];

const DROP_ORDER: &[&str] = &[
    "GT_BHTdata",
    "GT_BHTheader",
    "GT_TempDepth",
    "GT_Conductvty",
    "GT_HeatFlow",
    "WS_Interval",
    "Well_Samples",
    "Well_Tubing",
    "Well_Treatmnt",
    "Well_Productn",
    "Well_PetroDat",
    "Well_PerfIntv",
    "Well_LthStrat",
    "Well_LogData",
    "Well_LithLog",
    "Well_Liner",
    "Well_History",
    "Well_Drillers",
    "Well_Casing",
    "Well_Bore",
    "Well_Records",
    "Well_Spots",
    "Well_Header",
    "Well_Location",
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        for statement in CREATE_TABLES.iter().chain(CREATE_INDEXES) {
            db.execute_unprepared(statement).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        for table in DROP_ORDER {
            db.execute_unprepared(&format!("DROP TABLE IF EXISTS \"{table}\""))
                .await?;
        }

        Ok(())
    }
}
