//! Per-term reward values of one step.
use nao_gym_core::{
    record::{Record, RecordValue},
    Info,
};

/// Weighted value of every reward term, in registration order.
///
/// Inserting a name twice overwrites the value but keeps the position of the
/// first insertion.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RewardBreakdown(Vec<(String, f64)>);

impl RewardBreakdown {
    /// Creates an empty breakdown.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Inserts the value of a term.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        let name = name.into();
        match self.0.iter().position(|(k, _)| *k == name) {
            Some(ix) => self.0[ix].1 = value,
            None => self.0.push((name, value)),
        }
    }

    /// The value of the named term.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.iter().find(|(k, _)| k == name).map(|(_, v)| *v)
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Term names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    /// The number of terms.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no terms.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all values, the scalar reward of the step.
    pub fn total(&self) -> f64 {
        self.0.iter().map(|(_, v)| v).sum()
    }
}

impl Info for RewardBreakdown {}

impl From<&RewardBreakdown> for Record {
    fn from(breakdown: &RewardBreakdown) -> Self {
        let mut record = Record::empty();
        for (name, value) in breakdown.iter() {
            record.insert(name, RecordValue::Scalar(value as f32));
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order() {
        let mut breakdown = RewardBreakdown::new();
        breakdown.insert("b", 1.0);
        breakdown.insert("a", 2.0);
        breakdown.insert("c", 3.0);
        assert_eq!(breakdown.names().collect::<Vec<_>>(), vec!["b", "a", "c"]);
        assert_eq!(breakdown.total(), 6.0);
    }

    #[test]
    fn test_duplicate_overwrites_in_place() {
        let mut breakdown = RewardBreakdown::new();
        breakdown.insert("a", 1.0);
        breakdown.insert("b", 2.0);
        breakdown.insert("a", 5.0);
        assert_eq!(breakdown.len(), 2);
        assert_eq!(
            breakdown.iter().collect::<Vec<_>>(),
            vec![("a", 5.0), ("b", 2.0)]
        );
        assert_eq!(breakdown.get("a"), Some(5.0));
        assert_eq!(breakdown.get("c"), None);
    }

    #[test]
    fn test_into_record() {
        let mut breakdown = RewardBreakdown::new();
        breakdown.insert("head_height", 0.25);
        breakdown.insert("control_amplitude", -0.5);
        let record = Record::from(&breakdown);
        assert_eq!(record.len(), 2);
        assert_eq!(record.get_scalar("head_height").unwrap(), 0.25);
        assert_eq!(record.get_scalar("control_amplitude").unwrap(), -0.5);
    }
}
