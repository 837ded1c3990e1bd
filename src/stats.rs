//! Grouped aggregation over the record set: counts and means per categorical key.

use crate::models::{CompanySize, Dimension, ExperienceLevel, Record};
use indexmap::IndexMap;
use serde::Serialize;
use std::hash::Hash;

/// One aggregated group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Group<K> {
    pub key: K,
    pub value: f64,
}

/// Mapping from a categorical key to an aggregate value.
///
/// Groups keep the order in which their key was first seen unless the summary is
/// reordered with [`GroupSummary::sorted_by_order`].
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSummary<K> {
    groups: Vec<Group<K>>,
}

impl<K: Copy + Eq> GroupSummary<K> {
    pub fn iter(&self) -> impl Iterator<Item = &Group<K>> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, key: &K) -> Option<f64> {
        self.groups.iter().find(|g| g.key == *key).map(|g| g.value)
    }

    pub fn keys(&self) -> Vec<K> {
        self.groups.iter().map(|g| g.key).collect()
    }

    /// Sum of all group values.
    pub fn total(&self) -> f64 {
        self.groups.iter().map(|g| g.value).sum()
    }

    /// Largest group value, `None` for an empty summary.
    pub fn max_value(&self) -> Option<f64> {
        self.groups.iter().map(|g| g.value).reduce(f64::max)
    }

    /// Reorder groups by a fixed canonical sequence. Keys not present in `order`
    /// are kept after the ordered ones, in discovery order.
    pub fn sorted_by_order(mut self, order: &[K]) -> Self {
        let rank = |k: &K| order.iter().position(|o| o == k).unwrap_or(order.len());
        // stable sort keeps discovery order among unranked keys
        self.groups.sort_by_key(|g| rank(&g.key));
        self
    }
}

impl<K> IntoIterator for GroupSummary<K> {
    type Item = Group<K>;
    type IntoIter = std::vec::IntoIter<Group<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Count items per key. Items whose key function yields `None` are not grouped.
pub fn count_by<T, K, F>(items: &[T], key: F) -> GroupSummary<K>
where
    K: Copy + Eq + Hash,
    F: Fn(&T) -> Option<K>,
{
    let mut counts: IndexMap<K, usize> = IndexMap::new();
    for item in items {
        if let Some(k) = key(item) {
            *counts.entry(k).or_default() += 1;
        }
    }
    GroupSummary {
        groups: counts
            .into_iter()
            .map(|(key, n)| Group { key, value: n as f64 })
            .collect(),
    }
}

/// Arithmetic mean of `value` per key. Missing and non-finite values are ignored;
/// a group with no usable value at all yields no entry.
pub fn mean_by<T, K, F, V>(items: &[T], key: F, value: V) -> GroupSummary<K>
where
    K: Copy + Eq + Hash,
    F: Fn(&T) -> Option<K>,
    V: Fn(&T) -> Option<f64>,
{
    let mut sums: IndexMap<K, (f64, usize)> = IndexMap::new();
    for item in items {
        let Some(k) = key(item) else { continue };
        let acc = sums.entry(k).or_insert((0.0, 0));
        if let Some(v) = value(item).filter(|v| v.is_finite()) {
            acc.0 += v;
            acc.1 += 1;
        }
    }
    GroupSummary {
        groups: sums
            .into_iter()
            .filter(|(_, (_, n))| *n > 0)
            .map(|(key, (sum, n))| Group {
                key,
                value: sum / n as f64,
            })
            .collect(),
    }
}

/// Record counts per company size, in order of first occurrence.
pub fn company_size_counts(records: &[Record]) -> GroupSummary<CompanySize> {
    count_by(records, Record::company_size)
}

/// Mean `salary_in_usd` per experience level, Entry → Executive.
pub fn mean_salary_by_experience(records: &[Record]) -> GroupSummary<ExperienceLevel> {
    mean_by(records, Record::experience, |r| r.value(Dimension::SalaryInUsd)).sorted_by_order(&ExperienceLevel::ALL)
}

/// Numeric extent `(min, max)` of the finite values, `None` when there are none.
pub fn extent<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = Option<f64>>,
{
    values
        .into_iter()
        .flatten()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_skips_missing() {
        assert_eq!(
            extent([Some(3.0), None, Some(-1.0), Some(f64::NAN), Some(f64::INFINITY)]),
            Some((-1.0, 3.0))
        );
        assert_eq!(extent(Vec::<Option<f64>>::new()), None);
    }

    #[test]
    fn unranked_keys_go_last() {
        let s = count_by(&["b", "z", "a", "b"], |s| Some(*s)).sorted_by_order(&["a", "b"]);
        assert_eq!(s.keys(), vec!["a", "b", "z"]);
        assert_eq!(s.get(&"b"), Some(2.0));
    }
}
