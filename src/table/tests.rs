//! Unit tests for the record sorter and sort state

use super::*;

#[derive(Debug, Clone, PartialEq)]
struct Row {
    id: u32,
    pts: Option<f64>,
    opp: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum RowField {
    Pts,
    Opp,
}

impl SortField<Row> for RowField {
    fn value<'a>(&self, record: &'a Row) -> SortValue<'a> {
        match self {
            RowField::Pts => record.pts.into(),
            RowField::Opp => record.opp.into(),
        }
    }
}

fn row(id: u32, pts: Option<f64>, opp: &'static str) -> Row {
    Row { id, pts, opp }
}

fn ids(rows: &[Row]) -> Vec<u32> {
    rows.iter().map(|r| r.id).collect()
}

fn sample() -> Vec<Row> {
    vec![
        row(1, Some(12.0), "LAL"),
        row(2, None, "BOS"),
        row(3, Some(25.0), "GSW"),
        row(4, Some(12.0), "PHX"),
        row(5, None, "MIA"),
        row(6, Some(3.0), "DAL"),
    ]
}

#[cfg(test)]
mod sort_tests {
    use super::*;

    #[test]
    fn test_sort_descending_numbers_nulls_last() {
        let sorted = sort_records(&sample(), RowField::Pts, SortDirection::Desc);
        assert_eq!(ids(&sorted), vec![3, 1, 4, 6, 2, 5]);
    }

    #[test]
    fn test_sort_ascending_numbers_nulls_still_last() {
        let sorted = sort_records(&sample(), RowField::Pts, SortDirection::Asc);
        assert_eq!(ids(&sorted), vec![6, 1, 4, 3, 2, 5]);
    }

    #[test]
    fn test_sort_is_stable_for_ties_in_both_directions() {
        // rows 1 and 4 tie on 12.0; input order is kept either way
        let asc = sort_records(&sample(), RowField::Pts, SortDirection::Asc);
        let desc = sort_records(&sample(), RowField::Pts, SortDirection::Desc);
        let pos = |rows: &[Row], id: u32| rows.iter().position(|r| r.id == id).unwrap();
        assert!(pos(&asc, 1) < pos(&asc, 4));
        assert!(pos(&desc, 1) < pos(&desc, 4));
        // nulls keep their relative order as well
        assert!(pos(&asc, 2) < pos(&asc, 5));
        assert!(pos(&desc, 2) < pos(&desc, 5));
    }

    #[test]
    fn test_sort_text_lexicographic() {
        let sorted = sort_records(&sample(), RowField::Opp, SortDirection::Asc);
        let opps: Vec<&str> = sorted.iter().map(|r| r.opp).collect();
        assert_eq!(opps, vec!["BOS", "DAL", "GSW", "LAL", "MIA", "PHX"]);
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let input = sample();
        let before = input.clone();
        let _ = sort_records(&input, RowField::Pts, SortDirection::Desc);
        assert_eq!(input, before);
    }

    #[test]
    fn test_sort_is_permutation() {
        let input = sample();
        let sorted = sort_records(&input, RowField::Pts, SortDirection::Asc);
        assert_eq!(sorted.len(), input.len());
        let mut a = ids(&input);
        let mut b = ids(&sorted);
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sort_idempotent() {
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let once = sort_records(&sample(), RowField::Pts, direction);
            let twice = sort_records(&once, RowField::Pts, direction);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_sort_empty() {
        let empty: Vec<Row> = Vec::new();
        assert!(sort_records(&empty, RowField::Pts, SortDirection::Desc).is_empty());
    }

    #[test]
    fn test_all_nulls_keep_input_order() {
        let input = vec![row(9, None, "A"), row(8, None, "B"), row(7, None, "C")];
        let sorted = sort_records(&input, RowField::Pts, SortDirection::Desc);
        assert_eq!(ids(&sorted), vec![9, 8, 7]);
    }

    #[test]
    fn test_nan_values_sort_totally() {
        let input = vec![
            row(1, Some(12.0), "A"),
            row(2, Some(f64::NAN), "B"),
            row(3, None, "C"),
            row(4, Some(3.0), "D"),
        ];
        let asc = sort_records(&input, RowField::Pts, SortDirection::Asc);
        assert_eq!(ids(&asc), vec![4, 1, 2, 3]);
        let desc = sort_records(&input, RowField::Pts, SortDirection::Desc);
        assert_eq!(ids(&desc), vec![2, 1, 4, 3]);
    }

    #[test]
    fn test_compare_records_null_after_value() {
        let a = row(1, None, "A");
        let b = row(2, Some(-100.0), "B");
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            assert_eq!(
                compare_records(&a, &b, RowField::Pts, direction),
                Ordering::Greater
            );
            assert_eq!(
                compare_records(&b, &a, RowField::Pts, direction),
                Ordering::Less
            );
        }
    }
}

#[cfg(test)]
mod sort_state_tests {
    use super::*;

    #[test]
    fn test_request_same_field_flips_direction() {
        let mut state = SortState::new(RowField::Pts, SortDirection::Desc);
        state.request_sort(RowField::Pts);
        assert_eq!(state.direction, SortDirection::Asc);
        state.request_sort(RowField::Pts);
        assert_eq!(state.direction, SortDirection::Desc);
    }

    #[test]
    fn test_request_new_field_resets_to_descending() {
        let mut state = SortState::new(RowField::Pts, SortDirection::Asc);
        state.request_sort(RowField::Opp);
        assert_eq!(state.field, RowField::Opp);
        assert_eq!(state.direction, SortDirection::Desc);
    }

    #[test]
    fn test_apply_requests_in_order() {
        let mut state = SortState::new(RowField::Pts, SortDirection::Desc);
        state.apply_requests([RowField::Opp, RowField::Opp, RowField::Pts]);
        assert_eq!(state, SortState::new(RowField::Pts, SortDirection::Desc));
    }

    #[test]
    fn test_sortable_table_follows_state() {
        let mut table = SortableTable::new(sample(), RowField::Pts, SortDirection::Desc);
        assert_eq!(table.len(), 6);
        assert_eq!(ids(&table.sorted())[0], 3);

        table.request_sort(RowField::Pts);
        assert_eq!(table.state().direction, SortDirection::Asc);
        assert_eq!(ids(&table.sorted())[0], 6);

        table.request_sort(RowField::Opp);
        assert_eq!(table.sorted()[0].opp, "PHX");
    }
}

#[cfg(test)]
mod column_tests {
    use super::*;

    fn columns() -> Vec<Column<Row, RowField>> {
        vec![
            Column::new(RowField::Opp, "OPP", |r: &Row| r.opp.to_string()),
            Column::new(RowField::Pts, "PTS", |r: &Row| {
                r.pts.map_or("—".to_string(), |p| format!("{:.1}", p))
            })
            .with_thresholds(20.0, 5.0),
        ]
    }

    #[test]
    fn test_threshold_tones() {
        let t = Thresholds::new(20.0, 5.0);
        assert_eq!(t.tone(20.0), Tone::Good);
        assert_eq!(t.tone(19.9), Tone::Plain);
        assert_eq!(t.tone(5.0), Tone::Bad);
        assert_eq!(t.tone(-3.0), Tone::Bad);
    }

    #[test]
    fn test_null_cells_are_plain() {
        let cols = columns();
        let cell = cols[1].cell(&row(1, None, "BOS"));
        assert_eq!(cell.tone, Tone::Plain);
        assert_eq!(cell.text, "—");
    }

    #[test]
    fn test_view_marks_active_header() {
        let cols = columns();
        let state = SortState::new(RowField::Pts, SortDirection::Asc);
        let view = TableView::build(&cols, &sample(), Some(state));
        assert_eq!(view.headers, vec!["OPP".to_string(), "PTS ▲".to_string()]);
        assert_eq!(view.rows.len(), 6);
        assert_eq!(view.rows[2][1].tone, Tone::Good);
        assert_eq!(view.rows[5][1].tone, Tone::Bad);
    }

    #[test]
    fn test_render_table_pads_columns() {
        let cols = columns();
        let view = TableView::build(&cols, &[row(1, Some(25.0), "GSW")], None);
        let text = render_table(&view);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "OPP  PTS");
        assert_eq!(lines[1], "---  -----");
        assert_eq!(lines[2], "GSW  25.0+");
    }
}
