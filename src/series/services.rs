use super::models::{BhtSummary, DepthSeries, WellSeries};
use crate::graph::models::{IntervalNode, WellGraph};

/// Temperature against depth from the well's first sample.
///
/// The first sample is taken in traversal order: records that carry no
/// samples are skipped, so a leading empty record does not blank the series.
/// Only that one sample is read even when the well has more; readings are
/// not merged across samples or records.
pub fn temperature_vs_depth(graph: &WellGraph) -> DepthSeries {
    graph
        .first_sample()
        .map(|sample| {
            DepthSeries::from_pairs(
                sample
                    .temperatures
                    .iter()
                    .map(|row| (row.depth, row.temperature)),
            )
        })
        .unwrap_or_default()
}

/// Intervals of the well's first sample, empty when there is none.
pub fn intervals_of(graph: &WellGraph) -> &[IntervalNode] {
    graph
        .first_sample()
        .map(|sample| sample.intervals.as_slice())
        .unwrap_or(&[])
}

/// First conductivity measurement of each interval against the interval top.
pub fn thermal_conductivity(intervals: &[IntervalNode]) -> DepthSeries {
    DepthSeries::from_pairs(intervals.iter().filter_map(|node| {
        node.conductivities
            .first()
            .map(|measurement| (node.interval.from_depth, measurement.conductivity))
    }))
}

/// First heat-flow measurement (Ka) of each interval against the interval top.
pub fn heat_flow(intervals: &[IntervalNode]) -> DepthSeries {
    DepthSeries::from_pairs(intervals.iter().filter_map(|node| {
        node.heat_flows
            .first()
            .map(|measurement| (node.interval.from_depth, measurement.ka))
    }))
}

/// Searches records, then samples, then BHT headers (each in storage order)
/// and stops at the first header found.
pub fn bottom_hole_temperature(graph: &WellGraph) -> BhtSummary {
    let Some(node) = graph
        .samples()
        .flat_map(|sample| sample.bht_headers.iter())
        .next()
    else {
        return BhtSummary::default();
    };

    let reading = node.data.first();
    BhtSummary {
        diameter: node.header.bore_diameter,
        bht: reading.and_then(|row| row.bht),
        depth: reading.and_then(|row| row.depth),
    }
}

/// Runs every extractor over one graph. Interval-based series are only
/// present when the first sample has intervals.
pub fn well_series(graph: &WellGraph) -> WellSeries {
    let intervals = intervals_of(graph);
    let (thermal_conductivity, heat_flow) = if intervals.is_empty() {
        (None, None)
    } else {
        (
            Some(thermal_conductivity(intervals)),
            Some(heat_flow(intervals)),
        )
    };

    WellSeries {
        temperature: temperature_vs_depth(graph),
        thermal_conductivity,
        heat_flow,
        bht: bottom_hole_temperature(graph),
    }
}
