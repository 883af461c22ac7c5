//! Point tallies
//!
//! Category → points mappings produced by the aggregation methods. Only
//! categories that actually occurred are present; nothing is zero-filled.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use super::story::StoryState;

/// Label used for stories with no state or no owner
pub const NONE_LABEL: &str = "none";

/// A category key that can be rendered for the presentation layer
pub trait CategoryLabel {
    fn label(&self) -> String;
}

impl CategoryLabel for Option<StoryState> {
    fn label(&self) -> String {
        match self {
            Some(state) => state.to_string(),
            None => NONE_LABEL.to_string(),
        }
    }
}

impl CategoryLabel for Option<String> {
    fn label(&self) -> String {
        self.clone().unwrap_or_else(|| NONE_LABEL.to_string())
    }
}

/// Summed points per category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointTally<K: Ord> {
    totals: BTreeMap<K, u32>,
}

/// State → points, features only
pub type WorkProfile = PointTally<Option<StoryState>>;

/// Owner → points, features only
pub type OwnerProfile = PointTally<Option<String>>;

impl<K: Ord> Default for PointTally<K> {
    fn default() -> Self {
        Self {
            totals: BTreeMap::new(),
        }
    }
}

impl<K: Ord> PointTally<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add points under `key`, creating the category even for zero points
    pub fn add(&mut self, key: K, points: u32) {
        let total = self.totals.entry(key).or_insert(0);
        *total = total.saturating_add(points);
    }

    /// Points recorded under `key`, 0 if the category never occurred
    pub fn get(&self, key: &K) -> u32 {
        self.totals.get(key).copied().unwrap_or(0)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.totals.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, u32)> {
        self.totals.iter().map(|(k, v)| (k, *v))
    }

    pub fn total(&self) -> u32 {
        self.totals
            .values()
            .fold(0u32, |acc, v| acc.saturating_add(*v))
    }

    pub fn merge(&mut self, other: &Self)
    where
        K: Clone,
    {
        for (key, points) in other.iter() {
            self.add(key.clone(), points);
        }
    }
}

impl<K: Ord + CategoryLabel> PointTally<K> {
    /// String-keyed view; keys sharing a label are summed
    pub fn labelled(&self) -> BTreeMap<String, u32> {
        let mut out = BTreeMap::new();
        for (key, points) in self.iter() {
            let total: &mut u32 = out.entry(key.label()).or_insert(0);
            *total = total.saturating_add(points);
        }
        out
    }
}

impl<K: Ord> FromIterator<(K, u32)> for PointTally<K> {
    fn from_iter<I: IntoIterator<Item = (K, u32)>>(iter: I) -> Self {
        let mut tally = Self::new();
        for (key, points) in iter {
            tally.add(key, points);
        }
        tally
    }
}

impl<K: Ord + CategoryLabel> Serialize for PointTally<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.labelled().serialize(serializer)
    }
}
