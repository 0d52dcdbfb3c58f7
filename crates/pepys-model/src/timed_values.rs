//! Timed attribute values
//!
//! Each attribute of a node maps values to the period over which they hold.
//! The map keeps one invariant: no stored period is empty. Values whose
//! period empties out disappear, and an attribute disappears with its last
//! value.

use std::collections::BTreeMap;

use pepys_domain::TimePeriod;

/// A mapping from attribute names to timed values
///
/// Within one attribute, assigning a period to a value withdraws that
/// period from every competing value, so the values of an attribute never
/// overlap in time. All operations act on the backing map directly.
///
/// # Examples
///
/// ```
/// use pepys_model::TimedValues;
///
/// let mut values = TimedValues::new();
/// values.set("name", "Samuel");
/// assert_eq!(values.values("name"), vec!["Samuel"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimedValues {
    attributes: BTreeMap<String, BTreeMap<String, TimePeriod>>,
}

impl TimedValues {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every value of `attribute` with `value`, valid always
    pub fn set(&mut self, attribute: &str, value: &str) {
        let mut values = BTreeMap::new();
        values.insert(value.to_string(), TimePeriod::full());
        self.attributes.insert(attribute.to_string(), values);
    }

    /// Assign `period` to `value`, on top of what it already covers
    ///
    /// The period is withdrawn from every other value of the attribute;
    /// values left with an empty period are removed. Adding an empty period
    /// is a no-op.
    pub fn add(&mut self, attribute: &str, value: &str, period: &TimePeriod) {
        if period.is_empty() {
            return;
        }
        let values = self.attributes.entry(attribute.to_string()).or_default();
        withdraw_from_others(values, value, period);
        match values.get_mut(value) {
            Some(current) => current.add(period),
            None => {
                values.insert(value.to_string(), period.clone());
            }
        }
    }

    /// Assign exactly `period` to `value`, replacing what it covered
    ///
    /// As [`add`](Self::add), except the value's own period is replaced
    /// instead of widened. An empty period removes the value.
    pub fn set_period(&mut self, attribute: &str, value: &str, period: &TimePeriod) {
        if period.is_empty() {
            if let Some(values) = self.attributes.get_mut(attribute) {
                values.remove(value);
                if values.is_empty() {
                    self.attributes.remove(attribute);
                }
            }
            return;
        }
        let values = self.attributes.entry(attribute.to_string()).or_default();
        withdraw_from_others(values, value, period);
        values.insert(value.to_string(), period.clone());
    }

    /// Withdraw `period` from every value of `attribute`
    ///
    /// Values left with an empty period are removed, and the attribute is
    /// removed with its last value.
    pub fn remove_period(&mut self, attribute: &str, period: &TimePeriod) {
        if period.is_empty() {
            return;
        }
        let Some(values) = self.attributes.get_mut(attribute) else {
            return;
        };
        values.retain(|_, existing| {
            existing.subtract(period);
            !existing.is_empty()
        });
        if values.is_empty() {
            self.attributes.remove(attribute);
        }
    }

    /// A snapshot of the value-to-period map for `attribute`
    ///
    /// Unknown attributes yield an empty map.
    pub fn periods_for(&self, attribute: &str) -> BTreeMap<String, TimePeriod> {
        self.attributes.get(attribute).cloned().unwrap_or_default()
    }

    /// The values of `attribute`, sorted
    pub fn values(&self, attribute: &str) -> Vec<String> {
        self.attributes
            .get(attribute)
            .map(|values| values.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// The attribute names present, sorted
    pub fn attributes(&self) -> Vec<String> {
        self.attributes.keys().cloned().collect()
    }
}

/// Subtract `period` from every value except `kept`, dropping emptied ones
fn withdraw_from_others(
    values: &mut BTreeMap<String, TimePeriod>,
    kept: &str,
    period: &TimePeriod,
) {
    values.retain(|value, existing| {
        if value == kept {
            return true;
        }
        existing.subtract(period);
        !existing.is_empty()
    });
}
