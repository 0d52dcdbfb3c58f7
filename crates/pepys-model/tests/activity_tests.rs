//! Integration tests for activity-bounded knowledge
//!
//! These exercise the model layer end to end: nodes with timed attributes,
//! activity narrowing, and the trait vocabulary.

use chrono::NaiveDate;
use pepys_domain::{Instant, Interval, TimePeriod};
use pepys_model::{ActiveTimedValues, Node, NodeId, TraitDictionary};

fn year(y: i32) -> Instant {
    NaiveDate::from_ymd_opt(y, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn span(from: i32, to: i32) -> TimePeriod {
    TimePeriod::from_interval(Interval::bounded(year(from), true, year(to), true).unwrap())
}

#[test]
fn test_full_fact_narrowed_by_activity_window() {
    let mut values = ActiveTimedValues::new();
    values.set("name", "X");

    values.set_activity(span(2000, 2010));

    let periods = values.periods_for("name");
    assert_eq!(periods.len(), 1);
    assert_eq!(periods["X"], span(2000, 2010));
}

#[test]
fn test_observed_periods_are_subsets_of_the_activity() {
    let mut values = ActiveTimedValues::with_activity(span(2000, 2010));
    values.add("employer", "Navy Board", &span(1995, 2005));
    values.add("employer", "Admiralty", &span(2005, 2015));

    for (_, period) in values.periods_for("employer") {
        let mut outside = period.clone();
        outside.subtract(values.activity());
        assert!(outside.is_empty());
    }
}

#[test]
fn test_relation_lifecycle() {
    let samuel = Node::entity(NodeId::new(1));
    let navy_board = Node::entity(NodeId::new(2));

    let mut employment = Node::relation(NodeId::new(3), samuel.id, navy_board.id);
    employment.values_mut().set("role", "clerk");
    employment.set_active_period(span(2000, 2009));

    // A later correction replaces the activity outright.
    employment.set_active_period(span(2000, 2005));

    assert_eq!(employment.active_period(), &span(2000, 2005));
    assert_eq!(
        employment.values().periods_for("role")["clerk"],
        span(2000, 2005)
    );
    assert_eq!(employment.endpoints(), Some((NodeId::new(1), NodeId::new(2))));
}

#[test]
fn test_attribute_history_respects_value_exclusivity() {
    let mut node = Node::entity(NodeId::new(1));
    node.values_mut().set("residence", "London");
    node.values_mut()
        .add("residence", "Brampton", &span(2006, 2008));

    let periods = node.values().periods_for("residence");
    assert_eq!(periods["Brampton"], span(2006, 2008));

    let mut london = TimePeriod::full();
    london.subtract(&span(2006, 2008));
    assert_eq!(periods["London"], london);
}

#[test]
fn test_traits_classify_nodes_transitively() {
    let mut dictionary = TraitDictionary::new();
    for name in ["person", "official", "clerk"] {
        dictionary.define(name);
    }
    dictionary.link("official", "person").unwrap();
    dictionary.link("clerk", "official").unwrap();

    assert!(dictionary.is_subtrait("clerk", "person"));
    assert_eq!(dictionary.supertraits("clerk"), vec!["official", "person"]);
}
