use crate::{
    filter::{
        Column, FieldPresence, FilterOp, FilterProgram, FiltersByColumn, MissingFieldPolicy,
        OperatorRecord, Row, build, row_matches, row_matches_with_policy, where_eq, where_in,
    },
    obs::{FilterCounters, with_filter_sink},
    value::Value,
};
use serde_json::json;
use std::collections::BTreeMap;

///
/// Task
/// Typed record used to exercise `impl_row!`.
///

#[derive(Clone, Debug)]
struct Task {
    id: String,
    title: String,
    done: bool,
    priority: i64,
    list_id: Option<String>,
}

crate::impl_row!(Task {
    id,
    title,
    done,
    priority,
    list_id,
});

const ID: Column<String> = Column::new("id");
const DONE: Column<bool> = Column::new("done");
const PRIORITY: Column<i64> = Column::new("priority");

fn task(id: &str, done: bool, priority: i64, list_id: Option<&str>) -> Task {
    Task {
        id: id.to_string(),
        title: format!("task {id}"),
        done,
        priority,
        list_id: list_id.map(str::to_string),
    }
}

fn row(fields: &[(&str, Value)]) -> BTreeMap<String, Value> {
    fields
        .iter()
        .map(|(name, value)| ((*name).to_string(), value.clone()))
        .collect()
}

fn matching_ids<'a>(tasks: &'a [Task], filters: &FiltersByColumn) -> Vec<&'a str> {
    tasks
        .iter()
        .filter(|t| row_matches(*t, filters))
        .map(|t| t.id.as_str())
        .collect()
}

#[test]
fn eq_filter_matches_only_equal_rows() {
    let row = row(&[("id", Value::from("abc"))]);

    assert!(row_matches(&row, &where_eq("id", "abc").filters));
    assert!(!row_matches(&row, &where_eq("id", "xyz").filters));
}

#[test]
fn empty_filter_matches_every_row() {
    let empty = FiltersByColumn::new();

    assert!(row_matches(&row(&[]), &empty));
    assert!(row_matches(&row(&[("id", Value::from("abc"))]), &empty));
    assert!(row_matches(&task("t1", false, 1, None), &empty));
}

#[test]
fn empty_membership_set_matches_nothing() {
    let filters = where_in("id", Vec::<Value>::new()).into_filters();

    assert!(!row_matches(&row(&[("id", Value::from("abc"))]), &filters));
    assert!(!row_matches(&row(&[("id", Value::Null)]), &filters));
    assert!(!row_matches(&row(&[]), &filters));
}

#[test]
fn empty_operator_record_constrains_nothing() {
    let filters = FiltersByColumn::new().with_column("id", OperatorRecord::new());

    assert!(row_matches(&row(&[]), &filters));
    assert!(FilterProgram::compile(&filters).is_trivial());
}

#[test]
fn absent_filter_columns_are_unconstrained() {
    let filters = where_eq("done", true).into_filters();
    let row = row(&[("done", Value::Bool(true)), ("title", Value::from("anything"))]);

    assert!(row_matches(&row, &filters));
}

#[test]
fn missing_row_field_does_not_match_by_default() {
    let filters = where_eq("list_id", Value::Null).into_filters();
    let row = row(&[("id", Value::from("abc"))]);

    assert!(!row_matches(&row, &filters));
    assert!(row_matches_with_policy(
        &row,
        &filters,
        MissingFieldPolicy::TreatAsNull
    ));
}

#[test]
fn null_field_is_present_and_equals_null() {
    let filters = where_eq("list_id", Value::Null).into_filters();

    assert!(row_matches(&task("t1", false, 1, None), &filters));
    assert!(!row_matches(&task("t2", false, 1, Some("inbox")), &filters));
}

#[test]
fn multiple_operators_on_one_column_conjoin() {
    let record = OperatorRecord::eq("abc").with(FilterOp::In, Value::list(["abc", "def"]));
    let filters = record.for_column("id");

    assert!(row_matches(&row(&[("id", Value::from("abc"))]), &filters));
    assert!(!row_matches(&row(&[("id", Value::from("def"))]), &filters));
}

#[test]
fn typed_records_evaluate_through_impl_row() {
    let tasks = [
        task("t1", false, 1, Some("inbox")),
        task("t2", true, 2, Some("inbox")),
        task("t3", false, 3, Some("work")),
    ];

    let open = DONE.eq(false).into_filters();
    let urgent = PRIORITY.in_([2, 3]).into_filters();
    let by_id = ID.eq("t3".to_string()).into_filters();

    assert_eq!(matching_ids(&tasks, &open), ["t1", "t3"]);
    assert_eq!(matching_ids(&tasks, &urgent), ["t2", "t3"]);
    assert_eq!(matching_ids(&tasks, &by_id), ["t3"]);
    assert_eq!(tasks[0].field("unknown"), FieldPresence::Missing);
    assert!(!tasks[0].title.is_empty());
}

#[test]
fn json_rows_evaluate_and_nested_objects_never_match() {
    let serde_json::Value::Object(row) = json!({
        "id": "abc",
        "tags": ["a", "b"],
        "meta": { "eq": "abc" },
    }) else {
        unreachable!("literal is an object");
    };

    assert!(row_matches(&row, &where_eq("id", "abc").filters));
    assert!(row_matches(&row, &where_eq("tags", vec!["a", "b"]).filters));
    assert!(!row_matches(&row, &where_eq("meta", Value::Null).filters));
    assert_eq!(row.field("meta"), FieldPresence::Opaque);
    assert!(!row_matches_with_policy(
        &row,
        &where_eq("meta", Value::Null).filters,
        MissingFieldPolicy::TreatAsNull
    ));
}

#[test]
fn scalar_in_target_fails_one_column_without_aborting() {
    let filters = FiltersByColumn::new()
        .with_column("id", OperatorRecord::single(FilterOp::In, Value::from("abc")))
        .with_column("done", OperatorRecord::eq(false));
    let counters = FilterCounters::new();

    let matched = with_filter_sink(&counters, || {
        row_matches(&task("abc", false, 1, None), &filters)
    });

    assert!(!matched);
    assert_eq!(counters.report().malformed_targets, 1);
}

#[test]
fn program_filters_batches_and_reports_counts() {
    let tasks = vec![
        task("t1", false, 1, None),
        task("t2", true, 1, None),
        task("t3", false, 2, None),
    ];
    let program = FilterProgram::compile(&DONE.eq(false).filters);
    let counters = FilterCounters::new();

    let matched = with_filter_sink(&counters, || program.filter_rows(&tasks));
    let ids: Vec<_> = matched.iter().map(|t| t.id.as_str()).collect();

    assert_eq!(ids, ["t1", "t3"]);
    let report = counters.report();
    assert_eq!(report.batches, 1);
    assert_eq!(report.rows_scanned, 3);
    assert_eq!(report.rows_matched, 2);
}

#[test]
fn program_retain_matching_preserves_order() {
    let mut rows = vec![
        row(&[("n", Value::Int(1))]),
        row(&[("n", Value::Int(2))]),
        row(&[("n", Value::Int(3))]),
        row(&[]),
    ];
    let program = FilterProgram::compile(&where_in("n", [3i64, 1]).filters)
        .with_missing_field_policy(MissingFieldPolicy::NoMatch);

    program.retain_matching(&mut rows);

    assert_eq!(
        rows,
        vec![row(&[("n", Value::Int(1))]), row(&[("n", Value::Int(3))])]
    );
}

#[test]
fn program_missing_field_policy_is_configurable() {
    let filters = where_in("list_id", [Value::Null, Value::from("inbox")]).into_filters();
    let missing = row(&[]);

    let strict = FilterProgram::compile(&filters);
    let lenient =
        FilterProgram::from(&filters).with_missing_field_policy(MissingFieldPolicy::TreatAsNull);

    assert_eq!(strict.missing_field_policy(), MissingFieldPolicy::NoMatch);
    assert!(!strict.eval(&missing));
    assert!(lenient.eval(&missing));
}

#[test]
fn program_terms_follow_column_then_operator_order() {
    let filters = FiltersByColumn::new()
        .with_column("b", OperatorRecord::in_(["x"]).with(FilterOp::Eq, Value::from("x")))
        .with_column("a", OperatorRecord::eq(1i64));
    let program = FilterProgram::compile(&filters);

    let terms: Vec<_> = program.terms().map(|(column, op, _)| (column, op)).collect();

    assert_eq!(
        terms,
        [("a", FilterOp::Eq), ("b", FilterOp::Eq), ("b", FilterOp::In)]
    );
    assert_eq!(
        filters.terms().map(|t| (t.column, t.op)).collect::<Vec<_>>(),
        terms
    );
    assert_eq!(filters.term_count(), 3);
}

#[test]
fn builder_output_round_trips_through_json() {
    let clause = build("id", FilterOp::In, vec!["abc", "def"]);
    let json = serde_json::to_string(&clause).unwrap();

    assert_eq!(json, r#"{"where":{"id":{"in":["abc","def"]}}}"#);
    assert_eq!(serde_json::from_str::<crate::filter::WhereClause>(&json).unwrap(), clause);
}
