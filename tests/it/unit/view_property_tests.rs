//! Properties of the view pipeline and the column registry.

use editgrid::data::{ViewQuery, compute_view, filter_rows, sorted_view};
use editgrid::store::ColumnRegistry;
use editgrid::types::{Row, RowRecord, SortKey};

fn sample_rows() -> Vec<Row> {
    let data: &[(&str, &str, i64, &str)] = &[
        ("John", "john@example.com", 30, "Devops Engineer"),
        ("ann", "ann@x.com", 22, "QA"),
        ("Zoe", "zoe@corp.io", 41, "Manager"),
        ("bob", "bob@x.com", 19, "Intern"),
        ("Eve", "eve@corp.io", 35, "Security"),
        ("Kim", "kim@x.com", 28, "Designer"),
    ];
    data.iter()
        .map(|(name, email, age, role)| {
            Row::new(
                RowRecord::new()
                    .with("name", *name)
                    .with("email", *email)
                    .with("age", *age)
                    .with("role", *role),
            )
        })
        .collect()
}

#[test]
fn test_filter_only_keeps_matching_rows() {
    let rows = sample_rows();
    for term in ["", "x.com", "CORP", "e", "9", "nobody"] {
        let needle = term.to_lowercase();
        let kept = filter_rows(&rows, term);

        for row in &kept {
            assert!(
                row.record
                    .values()
                    .any(|v| v.to_string().to_lowercase().contains(&needle)),
                "row {:?} kept for {:?}",
                row.record,
                term
            );
        }
        let expected = rows
            .iter()
            .filter(|row| {
                row.record
                    .values()
                    .any(|v| v.to_string().to_lowercase().contains(&needle))
            })
            .count();
        assert_eq!(kept.len(), expected, "term {:?}", term);
    }
}

#[test]
fn test_numeric_desc_is_reversed_asc() {
    let rows = sample_rows();
    let mut asc: Vec<_> = sorted_view(&rows, "", Some(&SortKey::asc("age")))
        .into_iter()
        .map(|r| r.id)
        .collect();
    let desc: Vec<_> = sorted_view(&rows, "", Some(&SortKey::desc("age")))
        .into_iter()
        .map(|r| r.id)
        .collect();

    asc.reverse();
    assert_eq!(asc, desc);
}

#[test]
fn test_pages_partition_the_sorted_view() {
    let rows = sample_rows();
    let sort = Some(SortKey::asc("name"));
    let full: Vec<_> = sorted_view(&rows, "", sort.as_ref())
        .into_iter()
        .map(|r| r.id)
        .collect();

    let mut stitched = Vec::new();
    for page in 0..3 {
        let view = compute_view(
            &rows,
            &ViewQuery {
                search: String::new(),
                sort: sort.clone(),
                page,
                page_size: 4,
            },
        );
        assert_eq!(view.total, rows.len());
        stitched.extend(view.rows.iter().map(|r| r.id));
    }
    assert_eq!(stitched, full);
}

#[test]
fn test_reorder_round_trip_is_identity() {
    let mut registry = ColumnRegistry::default();
    registry.add_field("team");
    let original = registry.visible_columns().to_vec();
    let len = original.len();

    for from in 0..len {
        for to in 0..len {
            registry.reorder(from, to).unwrap();
            assert_eq!(registry.visible_columns().len(), len);
            registry.reorder(to, from).unwrap();
            assert_eq!(registry.visible_columns(), original);
        }
    }
}

#[test]
fn test_add_field_twice_keeps_one_entry() {
    let mut registry = ColumnRegistry::default();
    registry.add_field("  Email ");
    registry.add_field("  Email ");
    let count = registry
        .all_columns()
        .iter()
        .filter(|c| c.as_str() == "email")
        .count();
    assert_eq!(count, 1);
}
