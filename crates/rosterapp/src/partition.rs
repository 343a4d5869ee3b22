//! # View Partitions
//!
//! After filtering, pages split their results for tabbed or sectioned display:
//! events by status, gallery items by media type, announcements into pinned
//! and the rest.
//!
//! There are two shapes:
//!
//! - **Partitions** ([`partition`], [`partition_by`]) are disjoint. Each record
//!   lands in at most one bucket. Bucket order is supplied by the caller, never
//!   derived from the data, so tabs keep their intended order whatever the
//!   records hold.
//! - **Tab views** ([`tab_views`]) may overlap. "All" contains everything,
//!   "Unread" and "Pinned" can share records. Each tab is just a predicate.
//!
//! ## Unknown Discriminators
//!
//! A record whose discriminator is not in the bucket order is never dropped
//! silently and never put in a default bucket. It is collected in
//! [`ViewPartition::unbucketed`] and logged at `warn`.

use serde::Serialize;

use crate::attributes::{Schema, Value};
use crate::engine::dedupe;
use crate::error::FilterWarning;
use crate::model::{FieldRead, Record};

#[derive(Debug, Clone)]
pub struct Bucket<'r> {
    pub value: Value,
    pub records: Vec<&'r Record>,
}

impl Bucket<'_> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct ViewPartition<'r> {
    pub bucket_key: String,
    pub buckets: Vec<Bucket<'r>>,
    pub unbucketed: Vec<&'r Record>,
    pub warnings: Vec<FilterWarning>,
}

impl<'r> ViewPartition<'r> {
    pub fn bucket(&self, value: impl Into<Value>) -> Option<&Bucket<'r>> {
        let value = value.into();
        self.buckets.iter().find(|b| b.value == value)
    }

    pub fn counts(&self) -> Vec<(&Value, usize)> {
        self.buckets.iter().map(|b| (&b.value, b.len())).collect()
    }

    /// Records placed in some bucket.
    pub fn total(&self) -> usize {
        self.buckets.iter().map(Bucket::len).sum()
    }
}

fn empty_buckets<'r>(order: &[Value]) -> Vec<Bucket<'r>> {
    let mut buckets: Vec<Bucket<'r>> = Vec::with_capacity(order.len());
    for value in order {
        if !buckets.iter().any(|b| &b.value == value) {
            buckets.push(Bucket {
                value: value.clone(),
                records: Vec::new(),
            });
        }
    }
    buckets
}

/// Split records into buckets by the value of `bucket_key`, in `bucket_order`.
///
/// Repeated entries in `bucket_order` are ignored after the first.
pub fn partition<'r, I>(
    records: I,
    schema: &Schema,
    bucket_key: &str,
    bucket_order: &[Value],
) -> ViewPartition<'r>
where
    I: IntoIterator<Item = &'r Record>,
{
    let mut buckets = empty_buckets(bucket_order);
    let mut unbucketed = Vec::new();
    let mut warnings = Vec::new();

    let Some(spec) = schema.get(bucket_key) else {
        let warning = FilterWarning::InvalidFieldReference {
            domain: schema.domain.to_string(),
            field: bucket_key.to_string(),
        };
        log::warn!("{}: {}", schema.domain, warning);
        return ViewPartition {
            bucket_key: bucket_key.to_string(),
            buckets,
            unbucketed: records.into_iter().collect(),
            warnings: vec![warning],
        };
    };

    for record in records {
        let value = match record.read(spec) {
            FieldRead::Present(v) => v.into_owned(),
            FieldRead::Absent => spec.kind.empty(),
            FieldRead::Malformed(_) => {
                warnings.push(FilterWarning::MalformedValue {
                    record_id: record.id.clone(),
                    field: spec.name.to_string(),
                    expected: spec.kind,
                });
                spec.kind.empty()
            }
        };

        match buckets.iter_mut().find(|b| b.value == value) {
            Some(bucket) => bucket.records.push(record),
            None => {
                log::warn!(
                    "{}: record {} has {}={:?}, which is not a known bucket",
                    schema.domain,
                    record.id,
                    bucket_key,
                    value.to_string()
                );
                unbucketed.push(record);
            }
        }
    }

    let warnings = dedupe(warnings);
    for warning in &warnings {
        log::warn!("{}: {}", schema.domain, warning);
    }

    ViewPartition {
        bucket_key: bucket_key.to_string(),
        buckets,
        unbucketed,
        warnings,
    }
}

/// Two-bucket partition by a predicate, e.g. pinned / unpinned.
///
/// Every record lands in exactly one of the two buckets.
pub fn partition_by<'r, I, F>(
    records: I,
    bucket_key: &str,
    labels: (&str, &str),
    predicate: F,
) -> ViewPartition<'r>
where
    I: IntoIterator<Item = &'r Record>,
    F: Fn(&Record) -> bool,
{
    let (mut yes, mut no) = (Vec::new(), Vec::new());
    for record in records {
        if predicate(record) {
            yes.push(record);
        } else {
            no.push(record);
        }
    }

    ViewPartition {
        bucket_key: bucket_key.to_string(),
        buckets: vec![
            Bucket {
                value: Value::from(labels.0),
                records: yes,
            },
            Bucket {
                value: Value::from(labels.1),
                records: no,
            },
        ],
        unbucketed: Vec::new(),
        warnings: Vec::new(),
    }
}

/// How a tab selects its records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum TabRule {
    All,
    /// Text field equals `value`.
    Equals {
        field: &'static str,
        value: &'static str,
    },
    /// Bool field equals `value`; absent reads as false.
    Flag { field: &'static str, value: bool },
}

impl TabRule {
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            TabRule::All => true,
            TabRule::Equals { field, value } => record
                .get_attr(field)
                .and_then(Value::as_text)
                .is_some_and(|t| t == *value),
            TabRule::Flag { field, value } => {
                record
                    .get_attr(field)
                    .and_then(Value::as_bool)
                    .unwrap_or(false)
                    == *value
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TabSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub rule: TabRule,
}

impl TabSpec {
    pub const fn new(name: &'static str, label: &'static str, rule: TabRule) -> Self {
        Self { name, label, rule }
    }
}

#[derive(Debug, Clone)]
pub struct TabView<'r> {
    pub name: &'static str,
    pub label: &'static str,
    pub records: Vec<&'r Record>,
}

/// Evaluate every tab over the same records. Tabs may overlap.
pub fn tab_views<'r, I>(records: I, tabs: &[TabSpec]) -> Vec<TabView<'r>>
where
    I: IntoIterator<Item = &'r Record>,
{
    let records: Vec<&'r Record> = records.into_iter().collect();
    tabs.iter()
        .map(|tab| TabView {
            name: tab.name,
            label: tab.label,
            records: records
                .iter()
                .copied()
                .filter(|r| tab.rule.matches(r))
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::{FieldKind, FieldSpec};

    const FIELDS: &[FieldSpec] = &[
        FieldSpec::new("title", "Title", FieldKind::Text).searchable(),
        FieldSpec::new("status", "Status", FieldKind::Text).partitionable(),
        FieldSpec::new("is_pinned", "Pinned", FieldKind::Bool).partitionable(),
    ];
    const SCHEMA: Schema = Schema::new("events", FIELDS);

    fn order() -> Vec<Value> {
        vec!["upcoming".into(), "ongoing".into(), "completed".into()]
    }

    fn events() -> Vec<Record> {
        vec![
            Record::new("1").with("status", "completed"),
            Record::new("2").with("status", "upcoming"),
            Record::new("3").with("status", "upcoming").with("is_pinned", true),
            Record::new("4").with("status", "cancelled"),
        ]
    }

    #[test]
    fn test_buckets_follow_supplied_order() {
        let rs = events();
        let view = partition(&rs, &SCHEMA, "status", &order());
        let values: Vec<String> = view.buckets.iter().map(|b| b.value.to_string()).collect();
        assert_eq!(values, vec!["upcoming", "ongoing", "completed"]);
        assert_eq!(view.bucket("upcoming").unwrap().len(), 2);
        assert!(view.bucket("ongoing").unwrap().is_empty());
        assert_eq!(view.bucket("completed").unwrap().len(), 1);
    }

    #[test]
    fn test_malformed_discriminator_is_unbucketed_with_warning() {
        let rs = vec![
            Record::new("1").with("status", "upcoming"),
            Record::new("2").with("status", 3),
            Record::new("3").with("status", 3),
        ];
        let view = partition(&rs, &SCHEMA, "status", &order());

        assert_eq!(view.total(), 1);
        let ids: Vec<&str> = view.unbucketed.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
        assert_eq!(
            view.warnings,
            vec![
                FilterWarning::MalformedValue {
                    record_id: "2".into(),
                    field: "status".into(),
                    expected: FieldKind::Text,
                },
                FilterWarning::MalformedValue {
                    record_id: "3".into(),
                    field: "status".into(),
                    expected: FieldKind::Text,
                },
            ]
        );
    }

    #[test]
    fn test_unknown_discriminator_is_unbucketed() {
        let rs = events();
        let view = partition(&rs, &SCHEMA, "status", &order());
        assert_eq!(view.total(), 3);
        assert_eq!(view.unbucketed.len(), 1);
        assert_eq!(view.unbucketed[0].id, "4");
        assert!(view.warnings.is_empty());
    }

    #[test]
    fn test_duplicate_order_entries_collapse() {
        let rs = events();
        let order = vec![Value::from("upcoming"), Value::from("upcoming")];
        let view = partition(&rs, &SCHEMA, "status", &order);
        assert_eq!(view.buckets.len(), 1);
        assert_eq!(view.total(), 2);
    }

    #[test]
    fn test_undeclared_key_gives_empty_buckets() {
        let rs = events();
        let view = partition(&rs, &SCHEMA, "type", &order());
        assert_eq!(view.buckets.len(), 3);
        assert_eq!(view.total(), 0);
        assert_eq!(view.unbucketed.len(), 4);
        assert!(matches!(
            view.warnings.as_slice(),
            [FilterWarning::InvalidFieldReference { field, .. }] if field == "type"
        ));
    }

    #[test]
    fn test_partition_by_covers_everything() {
        let rs = events();
        let view = partition_by(&rs, "is_pinned", ("pinned", "unpinned"), |r| {
            TabRule::Flag {
                field: "is_pinned",
                value: true,
            }
            .matches(r)
        });
        assert_eq!(view.bucket("pinned").unwrap().len(), 1);
        assert_eq!(view.bucket("unpinned").unwrap().len(), 3);
        assert_eq!(view.total(), rs.len());
    }

    #[test]
    fn test_tab_views_overlap() {
        let rs = events();
        let tabs = [
            TabSpec::new("all", "All", TabRule::All),
            TabSpec::new(
                "upcoming",
                "Upcoming",
                TabRule::Equals {
                    field: "status",
                    value: "upcoming",
                },
            ),
            TabSpec::new(
                "pinned",
                "Pinned",
                TabRule::Flag {
                    field: "is_pinned",
                    value: true,
                },
            ),
        ];
        let views = tab_views(&rs, &tabs);
        let sizes: Vec<_> = views.iter().map(|v| v.records.len()).collect();
        assert_eq!(sizes, vec![4, 2, 1]);
    }

    #[test]
    fn test_absent_flag_reads_false() {
        let rule = TabRule::Flag {
            field: "is_read",
            value: false,
        };
        assert!(rule.matches(&Record::new("x")));
    }
}
