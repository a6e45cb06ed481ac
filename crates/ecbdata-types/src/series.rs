//! Insertion-ordered, date-keyed observation series.

use std::collections::HashMap;

use chrono::NaiveDate;

/// An ordered mapping from a calendar period to an observation value.
///
/// Entries iterate in the order they were first inserted, which for parsed
/// payloads is document order. Inserting an existing key overwrites the value
/// but keeps the key at its original position, so a payload that repeats a
/// period keeps the last value at the first position. Missing periods are
/// simply absent keys; the series never gap-fills.
#[derive(Debug, Clone)]
pub struct Series<V> {
    entries: Vec<(NaiveDate, V)>,
    positions: HashMap<NaiveDate, usize>,
}

impl<V> Series<V> {
    /// Creates an empty series.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Inserts an observation, returning the previous value for the date if
    /// one was present.
    pub fn insert(&mut self, date: NaiveDate, value: V) -> Option<V> {
        match self.positions.get(&date) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, value)),
            None => {
                self.positions.insert(date, self.entries.len());
                self.entries.push((date, value));
                None
            }
        }
    }

    /// Returns the observation for the given date, if present.
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&V> {
        self.positions.get(&date).map(|&pos| &self.entries[pos].1)
    }

    /// Returns true if the series contains an observation for the date.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.positions.contains_key(&date)
    }

    /// Returns the number of observations.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the series has no observations.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the first observation in insertion order.
    #[must_use]
    pub fn first(&self) -> Option<(NaiveDate, &V)> {
        self.entries.first().map(|(d, v)| (*d, v))
    }

    /// Returns the last observation in insertion order.
    #[must_use]
    pub fn last(&self) -> Option<(NaiveDate, &V)> {
        self.entries.last().map(|(d, v)| (*d, v))
    }

    /// Iterates over observations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &V)> {
        self.entries.iter().map(|(d, v)| (*d, v))
    }

    /// Iterates over dates in insertion order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.entries.iter().map(|(d, _)| *d)
    }

    /// Iterates over values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Collapses runs of adjacent equal values, keeping the first entry of
    /// each run.
    ///
    /// Only immediate neighbours are compared; equal values separated by a
    /// different value both survive.
    pub fn dedup_values(&mut self)
    where
        V: PartialEq,
    {
        // Vec::dedup_by drops the first closure argument and keeps the
        // second, which is the earlier entry of the pair.
        self.entries.dedup_by(|next, prev| next.1 == prev.1);
        self.rebuild_positions();
    }

    fn rebuild_positions(&mut self) {
        self.positions = self
            .entries
            .iter()
            .enumerate()
            .map(|(pos, (d, _))| (*d, pos))
            .collect();
    }
}

impl<V> Default for Series<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: PartialEq> PartialEq for Series<V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<V> FromIterator<(NaiveDate, V)> for Series<V> {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, V)>>(iter: I) -> Self {
        let mut series = Self::new();
        for (date, value) in iter {
            series.insert(date, value);
        }
        series
    }
}

impl<V> IntoIterator for Series<V> {
    type Item = (NaiveDate, V);
    type IntoIter = std::vec::IntoIter<(NaiveDate, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a Series<V> {
    type Item = (NaiveDate, &'a V);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (NaiveDate, V)>,
        fn(&'a (NaiveDate, V)) -> (NaiveDate, &'a V),
    >;

    fn into_iter(self) -> Self::IntoIter {
        fn entry_ref<'a, V>(entry: &'a (NaiveDate, V)) -> (NaiveDate, &'a V) {
            (entry.0, &entry.1)
        }
        self.entries.iter().map(entry_ref)
    }
}
