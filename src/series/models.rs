use serde::{Serialize, Serializer};

/// Values indexed by depth, sorted shallow to deep.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DepthSeries {
    pub depths: Vec<f64>,
    pub values: Vec<Option<f64>>,
}

impl DepthSeries {
    /// Builds a series from `(depth, value)` pairs.
    ///
    /// Pairs without a depth cannot be placed on the axis and are dropped; a
    /// missing value is kept as a gap. The sort is stable, so readings at the
    /// same depth keep their input order.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Option<f64>, Option<f64>)>,
    {
        let mut placed: Vec<(f64, Option<f64>)> = pairs
            .into_iter()
            .filter_map(|(depth, value)| depth.map(|depth| (depth, value)))
            .collect();
        placed.sort_by(|a, b| a.0.total_cmp(&b.0));

        let (depths, values) = placed.into_iter().unzip();
        Self { depths, values }
    }
}

/// First bottom-hole temperature reading of a well. Missing values render as
/// empty strings.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BhtSummary {
    #[serde(serialize_with = "blank_when_missing")]
    pub diameter: Option<f64>,
    #[serde(serialize_with = "blank_when_missing")]
    pub bht: Option<f64>,
    #[serde(serialize_with = "blank_when_missing")]
    pub depth: Option<f64>,
}

#[allow(clippy::ref_option)]
fn blank_when_missing<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(value) => serializer.serialize_f64(*value),
        None => serializer.serialize_str(""),
    }
}

/// Everything the detail page plots for one well
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WellSeries {
    pub temperature: DepthSeries,
    pub thermal_conductivity: Option<DepthSeries>,
    pub heat_flow: Option<DepthSeries>,
    pub bht: BhtSummary,
}
