use super::models::{
    BhtHeaderNode, IntervalNode, RecordNode, SampleNode, WellGraph, flatten_by_parent,
    group_by_parent,
};
use crate::records::{RecordSetChild, models as records};
use crate::samples::{
    bht_data, bht_headers, conductivities, heat_flows, intervals, models as samples, temperatures,
};
use crate::wells::{headers, models as wells, spots};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

pub async fn find_well(
    db: &DatabaseConnection,
    well_id: i32,
) -> Result<Option<wells::Model>, DbErr> {
    wells::Entity::find_by_id(well_id).one(db).await
}

async fn records_of(
    db: &DatabaseConnection,
    well: &wells::Model,
) -> Result<Vec<records::Model>, DbErr> {
    let Some(well_data_id) = well.well_data_id else {
        return Ok(vec![]);
    };

    records::Entity::find()
        .filter(records::Column::WellDataId.eq(well_data_id))
        .all(db)
        .await
}

pub async fn header_of(
    db: &DatabaseConnection,
    well: &wells::Model,
) -> Result<Option<headers::Model>, DbErr> {
    let Some(well_data_id) = well.well_data_id else {
        return Ok(None);
    };

    headers::Entity::find()
        .filter(headers::Column::WellDataId.eq(well_data_id))
        .one(db)
        .await
}

/// Rows of `E` whose `column` points at one of `parent_ids`
async fn find_children<E: EntityTrait>(
    db: &DatabaseConnection,
    column: E::Column,
    parent_ids: &[Uuid],
) -> Result<Vec<E::Model>, DbErr> {
    if parent_ids.is_empty() {
        return Ok(vec![]);
    }

    E::find()
        .filter(column.is_in(parent_ids.iter().copied()))
        .all(db)
        .await
}

/// Loads a well and hydrates its record/sample subgraph.
///
/// Returns `Ok(None)` when no well has this id. The graph is loaded level by
/// level (records, samples, then interval/temperature/BHT rows, then their
/// measurements) so the series extraction never touches the database.
pub async fn fetch_well(
    db: &DatabaseConnection,
    well_id: i32,
) -> Result<Option<WellGraph>, DbErr> {
    let Some(well) = find_well(db, well_id).await? else {
        return Ok(None);
    };

    let header = header_of(db, &well).await?;

    let record_rows = records_of(db, &well).await?;
    let record_ids: Vec<Uuid> = record_rows.iter().map(|r| r.record_set_id).collect();

    let sample_rows =
        find_children::<samples::Entity>(db, samples::Column::RecordSetId, &record_ids).await?;
    let sample_ids: Vec<Uuid> = sample_rows.iter().map(|s| s.sample_set_id).collect();

    let interval_rows =
        find_children::<intervals::Entity>(db, intervals::Column::SampleSetId, &sample_ids)
            .await?;
    let temperature_rows =
        find_children::<temperatures::Entity>(db, temperatures::Column::SampleSetId, &sample_ids)
            .await?;
    let bht_header_rows =
        find_children::<bht_headers::Entity>(db, bht_headers::Column::SampleSetId, &sample_ids)
            .await?;

    let interval_ids: Vec<Uuid> = interval_rows.iter().map(|i| i.interval_id).collect();
    let bht_ids: Vec<Uuid> = bht_header_rows.iter().map(|h| h.bht_id).collect();

    let heat_flow_rows =
        find_children::<heat_flows::Entity>(db, heat_flows::Column::IntervalId, &interval_ids)
            .await?;
    let conductivity_rows = find_children::<conductivities::Entity>(
        db,
        conductivities::Column::IntervalId,
        &interval_ids,
    )
    .await?;
    let bht_data_rows =
        find_children::<bht_data::Entity>(db, bht_data::Column::BhtId, &bht_ids).await?;

    tracing::debug!(
        well_id,
        records = record_rows.len(),
        samples = sample_rows.len(),
        intervals = interval_rows.len(),
        "hydrated well graph"
    );

    let mut heat_flows_by_interval =
        group_by_parent(heat_flow_rows, |row: &heat_flows::Model| row.interval_id);
    let mut conductivities_by_interval =
        group_by_parent(conductivity_rows, |row: &conductivities::Model| row.interval_id);
    let mut data_by_header =
        group_by_parent(bht_data_rows, |row: &bht_data::Model| Some(row.bht_id));

    let interval_nodes: Vec<IntervalNode> = interval_rows
        .into_iter()
        .map(|interval| IntervalNode {
            heat_flows: heat_flows_by_interval
                .remove(&interval.interval_id)
                .unwrap_or_default(),
            conductivities: conductivities_by_interval
                .remove(&interval.interval_id)
                .unwrap_or_default(),
            interval,
        })
        .collect();
    let bht_nodes: Vec<BhtHeaderNode> = bht_header_rows
        .into_iter()
        .map(|header| BhtHeaderNode {
            data: data_by_header.remove(&header.bht_id).unwrap_or_default(),
            header,
        })
        .collect();

    let mut intervals_by_sample = group_by_parent(interval_nodes, |node: &IntervalNode| {
        node.interval.sample_set_id
    });
    let mut temperatures_by_sample =
        group_by_parent(temperature_rows, |row: &temperatures::Model| row.sample_set_id);
    let mut headers_by_sample =
        group_by_parent(bht_nodes, |node: &BhtHeaderNode| node.header.sample_set_id);

    let sample_nodes: Vec<SampleNode> = sample_rows
        .into_iter()
        .map(|sample| SampleNode {
            intervals: intervals_by_sample
                .remove(&sample.sample_set_id)
                .unwrap_or_default(),
            temperatures: temperatures_by_sample
                .remove(&sample.sample_set_id)
                .unwrap_or_default(),
            bht_headers: headers_by_sample
                .remove(&sample.sample_set_id)
                .unwrap_or_default(),
            sample,
        })
        .collect();
    let mut samples_by_record =
        group_by_parent(sample_nodes, |node: &SampleNode| node.sample.record_set_id);

    let records = record_rows
        .into_iter()
        .map(|record| RecordNode {
            samples: samples_by_record
                .remove(&record.record_set_id)
                .unwrap_or_default(),
            record,
        })
        .collect();

    Ok(Some(WellGraph {
        well,
        header,
        records,
    }))
}

/// Wells that carry an API number, paired with their header
pub async fn list_wells(
    db: &DatabaseConnection,
) -> Result<Vec<(wells::Model, headers::Model)>, DbErr> {
    let rows = wells::Entity::find()
        .find_also_related(headers::Entity)
        .filter(headers::Column::Api.is_not_null())
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .filter_map(|(well, header)| header.map(|header| (well, header)))
        .collect())
}

/// All children of kind `E` across every record-set of the well, flattened
/// in record order and then in storage order within each record.
///
/// `Ok(None)` means the well does not exist; a well without record-sets
/// yields an empty list.
pub async fn get_recordset_assoc<E: RecordSetChild>(
    db: &DatabaseConnection,
    well_id: i32,
) -> Result<Option<Vec<E::Model>>, DbErr> {
    let Some(well) = find_well(db, well_id).await? else {
        return Ok(None);
    };

    let record_ids: Vec<Uuid> = records_of(db, &well)
        .await?
        .iter()
        .map(|r| r.record_set_id)
        .collect();
    let children = find_children::<E>(db, E::record_set_column(), &record_ids).await?;

    Ok(Some(flatten_by_parent(&record_ids, children, |child| {
        E::record_set_id(child)
    })))
}

/// Record-sets of the well in storage order, without their children.
pub async fn well_records(
    db: &DatabaseConnection,
    well_id: i32,
) -> Result<Option<Vec<records::Model>>, DbErr> {
    let Some(well) = find_well(db, well_id).await? else {
        return Ok(None);
    };

    Ok(Some(records_of(db, &well).await?))
}

/// `Ok(None)` for a missing well, `Ok(Some(None))` for a well with no header.
pub async fn well_header(
    db: &DatabaseConnection,
    well_id: i32,
) -> Result<Option<Option<headers::Model>>, DbErr> {
    let Some(well) = find_well(db, well_id).await? else {
        return Ok(None);
    };

    Ok(Some(header_of(db, &well).await?))
}

pub async fn well_spots(
    db: &DatabaseConnection,
    well_id: i32,
) -> Result<Option<Vec<spots::Model>>, DbErr> {
    let Some(well) = find_well(db, well_id).await? else {
        return Ok(None);
    };
    let Some(well_data_id) = well.well_data_id else {
        return Ok(Some(vec![]));
    };

    let rows = spots::Entity::find()
        .filter(spots::Column::WellDataId.eq(well_data_id))
        .all(db)
        .await?;

    Ok(Some(rows))
}
