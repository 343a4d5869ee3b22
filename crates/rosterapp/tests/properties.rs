//! Property-based and scenario tests for the filtering core.

use proptest::prelude::*;
use rosterapp::attributes::{FieldKind, FieldSpec, PredicateSet, Schema, Selection, Value};
use rosterapp::domains::{Dataset, Domain};
use rosterapp::engine::FilterEngine;
use rosterapp::index::distinct_values;
use rosterapp::model::Record;
use rosterapp::partition::{partition, partition_by, TabRule};

// ============================================================================
// Test helpers
// ============================================================================

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", "Name", FieldKind::Text).searchable(),
    FieldSpec::new("bio", "Bio", FieldKind::Text).searchable(),
    FieldSpec::new("role", "Role", FieldKind::Text)
        .searchable()
        .filterable()
        .partitionable(),
    FieldSpec::new("year", "Year", FieldKind::Number).filterable(),
    FieldSpec::new("tags", "Tags", FieldKind::List)
        .searchable()
        .filterable(),
    FieldSpec::new("active", "Active", FieldKind::Bool).filterable(),
];

const SCHEMA: Schema = Schema::new("people", FIELDS);

const ROLES: &[&str] = &["member", "officer", "admin"];
const TAGS: &[&str] = &["service", "finance", "youth"];

fn ids(records: &[&Record]) -> Vec<String> {
    records.iter().map(|r| r.id.clone()).collect()
}

fn record_strategy() -> impl Strategy<Value = (String, Option<String>, usize, i64, Vec<usize>, bool)> {
    (
        "[a-z]{1,8}",
        prop::option::of("[a-z ]{0,16}"),
        0..ROLES.len(),
        2020i64..2026,
        prop::collection::vec(0..TAGS.len(), 0..3),
        any::<bool>(),
    )
}

fn records_strategy() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(record_strategy(), 0..40).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, bio, role, year, tags, active))| {
                let tags: Vec<&str> = tags.into_iter().map(|t| TAGS[t]).collect();
                Record::new(i.to_string())
                    .with("name", name)
                    .with_opt("bio", bio)
                    .with("role", ROLES[role])
                    .with("year", year)
                    .with("tags", tags)
                    .with("active", active)
            })
            .collect()
    })
}

fn predicates_strategy() -> impl Strategy<Value = PredicateSet> {
    (
        "[a-z]{0,2}",
        prop::option::of(0..ROLES.len()),
        prop::option::of(2020i64..2026),
        prop::option::of(0..TAGS.len()),
    )
        .prop_map(|(term, role, year, tag)| {
            let mut predicates = PredicateSet::new(&SCHEMA).with_search(term);
            if let Some(role) = role {
                predicates
                    .select("role", Selection::Only(Value::from(ROLES[role])))
                    .unwrap();
            }
            if let Some(year) = year {
                predicates
                    .select("year", Selection::Only(Value::Number(year)))
                    .unwrap();
            }
            if let Some(tag) = tag {
                predicates
                    .select("tags", Selection::Only(Value::from(TAGS[tag])))
                    .unwrap();
            }
            predicates
        })
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// No search term and every filter at All returns the input unchanged.
    #[test]
    fn unconstrained_predicates_are_identity(records in records_strategy()) {
        let engine = FilterEngine::new(&SCHEMA);
        let out = engine.apply(&records, &PredicateSet::new(&SCHEMA));
        let expected: Vec<String> = records.iter().map(|r| r.id.clone()).collect();
        prop_assert_eq!(ids(&out.records), expected);
        prop_assert!(out.warnings.is_empty());
    }

    /// The result is a subsequence of the input.
    #[test]
    fn apply_is_stable(records in records_strategy(), predicates in predicates_strategy()) {
        let out = FilterEngine::new(&SCHEMA).apply(&records, &predicates);
        let mut input = records.iter().map(|r| r.id.as_str());
        for id in out.ids() {
            prop_assert!(input.any(|candidate| candidate == id));
        }
    }

    /// Filtering filtered output changes nothing.
    #[test]
    fn apply_is_idempotent(records in records_strategy(), predicates in predicates_strategy()) {
        let engine = FilterEngine::new(&SCHEMA);
        let once = engine.apply(&records, &predicates);
        let twice = engine.apply(once.records.iter().copied(), &predicates);
        prop_assert_eq!(ids(&once.records), ids(&twice.records));
    }

    /// Narrowing one filter from All to a value never grows the result.
    #[test]
    fn tightening_a_filter_never_grows_result(
        records in records_strategy(),
        predicates in predicates_strategy(),
        role in 0..ROLES.len(),
    ) {
        let engine = FilterEngine::new(&SCHEMA);

        let mut loose = predicates.clone();
        loose.select("role", Selection::All).unwrap();
        let mut tight = predicates;
        tight
            .select("role", Selection::Only(Value::from(ROLES[role])))
            .unwrap();

        prop_assert!(engine.apply(&records, &tight).len() <= engine.apply(&records, &loose).len());
    }

    /// Distinct values hold no duplicates and never outnumber the records.
    #[test]
    fn distinct_values_are_unique_and_bounded(
        records in records_strategy(),
        field in prop::sample::select(vec!["name", "bio", "role", "year", "tags", "active"]),
    ) {
        let values = distinct_values(&records, field);
        prop_assert!(values.len() <= records.len());
        for (i, v) in values.iter().enumerate() {
            prop_assert!(!values[i + 1..].contains(v));
        }
    }

    /// Buckets are disjoint and, with the unbucketed records, cover the filtered set.
    #[test]
    fn partition_is_a_disjoint_cover(
        records in records_strategy(),
        predicates in predicates_strategy(),
    ) {
        let filtered = FilterEngine::new(&SCHEMA).apply(&records, &predicates);
        // "admin" is deliberately left out of the order
        let order = vec![Value::from("member"), Value::from("officer")];
        let view = partition(filtered.records.iter().copied(), &SCHEMA, "role", &order);

        let mut seen: Vec<&str> = Vec::new();
        for bucket in &view.buckets {
            for record in &bucket.records {
                prop_assert!(!seen.contains(&record.id.as_str()));
                prop_assert_eq!(record.get_attr("role"), Some(&bucket.value));
                seen.push(&record.id);
            }
        }
        for record in &view.unbucketed {
            prop_assert_eq!(record.get_attr("role"), Some(&Value::from("admin")));
        }
        prop_assert_eq!(view.total() + view.unbucketed.len(), filtered.len());
    }
}

// ============================================================================
// Scenarios
// ============================================================================

fn sample() -> Dataset {
    Dataset::sample().unwrap()
}

#[test]
fn role_filter_picks_the_single_admin() {
    let roles = ["member", "member", "officer", "member", "admin", "member"];
    let records: Vec<Record> = roles
        .iter()
        .enumerate()
        .map(|(i, role)| Record::new(i.to_string()).with("role", *role))
        .collect();

    let mut predicates = PredicateSet::new(&SCHEMA);
    predicates.select_raw("role", "admin").unwrap();
    let out = FilterEngine::new(&SCHEMA).apply(&records, &predicates);

    assert_eq!(out.ids(), vec!["4"]);
}

#[test]
fn search_clean_finds_the_cleanup_event() {
    let data = sample();
    let records = data.records(Domain::Events);
    let schema = Domain::Events.schema();
    let predicates = PredicateSet::new(schema).with_search("clean");

    let out = FilterEngine::new(schema).apply(&records, &predicates);
    assert_eq!(out.len(), 1);
    assert_eq!(out.records[0].text("title"), "Environmental Cleanup Campaign");
    assert_eq!(out.records[0].text("category"), "Environmental");
}

#[test]
fn announcements_split_pinned_and_unpinned() {
    let data = sample();
    let records = data.records(Domain::Announcements);
    let rule = TabRule::Flag {
        field: "is_pinned",
        value: true,
    };
    let view = partition_by(&records, "is_pinned", ("pinned", "unpinned"), |r| {
        rule.matches(r)
    });

    assert_eq!(view.bucket("pinned").unwrap().len(), 2);
    assert_eq!(view.bucket("unpinned").unwrap().len(), 3);
    assert_eq!(view.total(), records.len());
}

#[test]
fn gallery_buckets_by_media_type() {
    let data = sample();
    let records = data.records(Domain::Gallery);
    let schema = Domain::Gallery.schema();
    let filtered = FilterEngine::new(schema).apply(&records, &PredicateSet::new(schema));
    let order = vec![Value::from("image"), Value::from("video")];

    let view = partition(filtered.records.iter().copied(), schema, "type", &order);
    let counts: Vec<usize> = view.buckets.iter().map(|b| b.len()).collect();
    assert_eq!(counts, vec![7, 1]);
    assert_eq!(view.total(), filtered.len());
    assert!(view.unbucketed.is_empty());
}

#[test]
fn every_domain_is_unchanged_by_empty_predicates() {
    let data = sample();
    for domain in Domain::ALL {
        let records = data.records(domain);
        let schema = domain.schema();
        let out = FilterEngine::new(schema).apply(&records, &PredicateSet::new(schema));
        let expected: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(out.ids(), expected, "{}", domain);
    }
}

#[test]
fn absent_bio_reads_as_empty() {
    let records = vec![
        Record::new("1").with("name", "Asha").with("role", "member"),
        Record::new("2")
            .with("name", "Bala")
            .with("bio", "Leadership development lead")
            .with("role", "member"),
        Record::new("3").with("name", "Leadership Circle").with("role", "officer"),
    ];
    let predicates = PredicateSet::new(&SCHEMA).with_search("leadership");
    let out = FilterEngine::new(&SCHEMA).apply(&records, &predicates);

    assert_eq!(out.ids(), vec!["2", "3"]);
    assert!(out.warnings.is_empty());
}
