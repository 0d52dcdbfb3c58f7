//! Activity-bounded timed values
//!
//! A node is only observable while it is active. This wrapper pairs a
//! [`TimedValues`] with an activity period; reads intersect every returned
//! period with the activity, writes pass straight through to the backing
//! map. The activity itself changes only through the dedicated operations.

use std::collections::BTreeMap;

use pepys_domain::TimePeriod;

use crate::timed_values::TimedValues;

/// Timed values observed through an activity window
///
/// # Examples
///
/// ```
/// use pepys_model::ActiveTimedValues;
/// use pepys_domain::TimePeriod;
///
/// let mut values = ActiveTimedValues::new();
/// values.set("name", "Samuel");
/// assert_eq!(values.periods_for("name")["Samuel"], TimePeriod::full());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveTimedValues {
    values: TimedValues,
    activity: TimePeriod,
}

impl Default for ActiveTimedValues {
    fn default() -> Self {
        Self::new()
    }
}

impl ActiveTimedValues {
    /// Create an empty mapping, active over the whole timeline
    pub fn new() -> Self {
        Self {
            values: TimedValues::new(),
            activity: TimePeriod::full(),
        }
    }

    /// Create an empty mapping with the given activity period
    pub fn with_activity(activity: TimePeriod) -> Self {
        Self {
            values: TimedValues::new(),
            activity,
        }
    }

    /// The current activity period
    pub fn activity(&self) -> &TimePeriod {
        &self.activity
    }

    /// Replace the activity period
    pub fn set_activity(&mut self, activity: TimePeriod) {
        tracing::debug!(
            intervals = activity.as_intervals().len(),
            "activity period replaced"
        );
        self.activity = activity;
    }

    /// Extend the activity period
    pub fn add_activity(&mut self, period: &TimePeriod) {
        self.activity.add(period);
    }

    /// Withdraw moments from the activity period
    pub fn remove_activity(&mut self, period: &TimePeriod) {
        self.activity.subtract(period);
    }

    /// Replace every value of `attribute` with `value`, valid always
    pub fn set(&mut self, attribute: &str, value: &str) {
        self.values.set(attribute, value);
    }

    /// Assign `period` to `value`, on top of what it already covers
    pub fn add(&mut self, attribute: &str, value: &str, period: &TimePeriod) {
        self.values.add(attribute, value, period);
    }

    /// Assign exactly `period` to `value`, replacing what it covered
    pub fn set_period(&mut self, attribute: &str, value: &str, period: &TimePeriod) {
        self.values.set_period(attribute, value, period);
    }

    /// Withdraw `period` from every value of `attribute`
    pub fn remove_period(&mut self, attribute: &str, period: &TimePeriod) {
        self.values.remove_period(attribute, period);
    }

    /// The value-to-period map for `attribute`, narrowed to the activity
    ///
    /// Values whose narrowed period is empty are omitted.
    pub fn periods_for(&self, attribute: &str) -> BTreeMap<String, TimePeriod> {
        self.values
            .periods_for(attribute)
            .into_iter()
            .filter_map(|(value, mut period)| {
                period.intersect(&self.activity);
                (!period.is_empty()).then_some((value, period))
            })
            .collect()
    }

    /// The values of `attribute` observable within the activity, sorted
    pub fn values(&self, attribute: &str) -> Vec<String> {
        self.periods_for(attribute).into_keys().collect()
    }

    /// The attribute names present in the backing map, sorted
    pub fn attributes(&self) -> Vec<String> {
        self.values.attributes()
    }
}
