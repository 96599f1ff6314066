use crate::records::models as records;
use crate::samples::{
    bht_data, bht_headers, conductivities, heat_flows, intervals, models as samples, temperatures,
};
use crate::wells::{headers, models as wells};
use std::collections::HashMap;
use std::hash::Hash;

/// A well with its record-sets and the sample subtree loaded up front.
///
/// Every child list keeps the order in which the database returned it, so
/// "first" below always means first in storage order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WellGraph {
    pub well: wells::Model,
    pub header: Option<headers::Model>,
    pub records: Vec<RecordNode>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordNode {
    pub record: records::Model,
    pub samples: Vec<SampleNode>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampleNode {
    pub sample: samples::Model,
    pub intervals: Vec<IntervalNode>,
    pub temperatures: Vec<temperatures::Model>,
    pub bht_headers: Vec<BhtHeaderNode>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct IntervalNode {
    pub interval: intervals::Model,
    pub heat_flows: Vec<heat_flows::Model>,
    pub conductivities: Vec<conductivities::Model>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BhtHeaderNode {
    pub header: bht_headers::Model,
    pub data: Vec<bht_data::Model>,
}

impl WellGraph {
    /// Samples in traversal order: records as stored, then each record's
    /// samples as stored.
    pub fn samples(&self) -> impl Iterator<Item = &SampleNode> {
        self.records.iter().flat_map(|node| node.samples.iter())
    }

    /// First sample of the first record that has any.
    pub fn first_sample(&self) -> Option<&SampleNode> {
        self.samples().next()
    }

    pub fn api(&self) -> Option<&str> {
        self.header.as_ref().and_then(|header| header.api.as_deref())
    }
}

/// Buckets children by parent key, keeping input order inside each bucket.
/// Orphans (no parent key) are dropped.
pub(crate) fn group_by_parent<K, T, F>(children: Vec<T>, parent_of: F) -> HashMap<K, Vec<T>>
where
    K: Eq + Hash,
    F: Fn(&T) -> Option<K>,
{
    let mut grouped: HashMap<K, Vec<T>> = HashMap::new();
    for child in children {
        if let Some(key) = parent_of(&child) {
            grouped.entry(key).or_default().push(child);
        }
    }
    grouped
}

/// Concatenates children parent by parent, in the order of `parents`.
pub(crate) fn flatten_by_parent<K, T, F>(parents: &[K], children: Vec<T>, parent_of: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> Option<K>,
{
    let mut grouped = group_by_parent(children, parent_of);
    parents
        .iter()
        .filter_map(|key| grouped.remove(key))
        .flatten()
        .collect()
}
