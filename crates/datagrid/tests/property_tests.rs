use datagrid::column::Column;
use datagrid::grid::DataGrid;
use datagrid::paginator::Paginator;
use datagrid::row::Row;
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct Record {
    id: usize,
    text: String,
    rank: u8,
}

impl Row for Record {
    type Key = usize;

    fn key(&self) -> usize {
        self.id
    }
}

fn grid_columns() -> Vec<Column<Record>> {
    vec![
        Column::new("text", "Text", |r: &Record| r.text.clone()).sorted_by_text(),
        Column::new("rank", "Rank", |r: &Record| r.rank.to_string())
            .sorted_by(|a, b| a.rank.cmp(&b.rank)),
    ]
}

fn records_from(texts: &[String], ranks: &[u8]) -> Vec<Record> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| Record {
            id: i,
            text: text.clone(),
            rank: ranks.get(i).copied().unwrap_or(0),
        })
        .collect()
}

proptest! {
    #[test]
    fn test_paginator_invariants(
        per_page in 1usize..50,
        rows in 0usize..1000,
        page in 0usize..100
    ) {
        let mut p = Paginator::new().per_page(per_page);
        p.set_row_count(rows);
        p.set_page(page);

        // Invariant: the page index is always in range.
        prop_assert!(p.page() < p.total_pages());

        // Invariant: page count is ceil(rows / per_page), one page minimum.
        let expected = if rows == 0 { 1 } else { rows.div_ceil(per_page) };
        prop_assert_eq!(p.total_pages(), expected);

        let (start, end) = p.slice_bounds(rows);
        prop_assert!(start <= end);
        prop_assert!(end <= rows);
        prop_assert!(end - start <= per_page);

        // Invariant: every row lands on exactly one page.
        let mut covered = 0;
        for pg in 0..p.total_pages() {
            p.set_page(pg);
            covered += p.page_len(rows);
        }
        prop_assert_eq!(covered, rows);
    }

    #[test]
    fn test_paginator_clamps_on_shrink(
        per_page in 1usize..20,
        before in 1usize..500,
        after in 0usize..500
    ) {
        let mut p = Paginator::new().per_page(per_page);
        p.set_row_count(before);
        p.set_page(before / per_page);

        p.set_row_count(after);
        prop_assert!(p.page() < p.total_pages());
        // The last page is never empty while rows exist.
        if after > 0 {
            p.set_page(p.total_pages() - 1);
            prop_assert!(p.page_len(after) > 0);
        }
    }

    #[test]
    fn test_filter_matches_predicate(
        texts in prop::collection::vec("[a-c]{0,4}", 0..40),
        needle in "[a-c]{1,2}"
    ) {
        let data = records_from(&texts, &[]);
        let mut grid = DataGrid::new(grid_columns(), data.clone()).filter_by("text");
        grid.set_filter_value(&needle);

        let expected: Vec<usize> = data
            .iter()
            .filter(|r| r.text.contains(needle.as_str()))
            .map(|r| r.id)
            .collect();
        let shown: Vec<usize> = grid.derived().iter().map(|r| r.id).collect();
        prop_assert_eq!(shown, expected);
    }

    #[test]
    fn test_filter_independent_of_page_state(
        texts in prop::collection::vec("[a-c]{0,3}", 0..60),
        needle in "[a-c]{1}"
    ) {
        let data = records_from(&texts, &[]);

        let mut paged = DataGrid::new(grid_columns(), data.clone())
            .filter_by("text")
            .page_size(5);
        paged.next_page();
        paged.next_page();
        paged.set_filter_value(&needle);

        let mut fresh = DataGrid::new(grid_columns(), data).filter_by("text");
        fresh.set_filter_value(&needle);

        let a: Vec<usize> = paged.derived().iter().map(|r| r.id).collect();
        let b: Vec<usize> = fresh.derived().iter().map(|r| r.id).collect();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn test_sort_is_ordered_and_stable(
        ranks in prop::collection::vec(0u8..5, 0..60)
    ) {
        let texts = vec![String::new(); ranks.len()];
        let data = records_from(&texts, &ranks);
        let mut grid = DataGrid::new(grid_columns(), data);

        grid.cycle_sort("rank");
        let ascending: Vec<(u8, usize)> =
            grid.derived().iter().map(|r| (r.rank, r.id)).collect();
        // Non-decreasing, and equal ranks keep insertion order.
        prop_assert!(ascending
            .windows(2)
            .all(|w| w[0].0 < w[1].0 || (w[0].0 == w[1].0 && w[0].1 < w[1].1)));

        grid.cycle_sort("rank");
        let descending: Vec<u8> = grid.derived().iter().map(|r| r.rank).collect();
        prop_assert!(descending.windows(2).all(|w| w[0] >= w[1]));

        // The third toggle restores insertion order exactly.
        grid.cycle_sort("rank");
        let ids: Vec<usize> = grid.derived().iter().map(|r| r.id).collect();
        let expected: Vec<usize> = (0..ids.len()).collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn test_pagination_covers_derived_rows(
        count in 0usize..200,
        per_page in 1usize..25
    ) {
        let texts = vec!["x".to_string(); count];
        let data = records_from(&texts, &[]);
        let mut grid = DataGrid::new(grid_columns(), data).page_size(per_page);

        let expected_pages = if count == 0 { 1 } else { count.div_ceil(per_page) };
        prop_assert_eq!(grid.total_pages(), expected_pages);

        let mut seen = 0;
        loop {
            seen += grid.page_rows().len();
            if !grid.next_page() {
                break;
            }
        }
        prop_assert_eq!(seen, count);
    }

    #[test]
    fn test_selection_survives_filter_round_trip(
        ranks in prop::collection::vec(0u8..5, 1..40),
        pick in 0usize..40
    ) {
        let texts = vec!["visible".to_string(); ranks.len()];
        let data = records_from(&texts, &ranks);
        let key = pick % data.len();

        let mut grid = DataGrid::new(grid_columns(), data)
            .filter_by("text")
            .show_row_selection(true);
        grid.toggle_selected(key);

        // Filter the selected row out of view and back.
        grid.set_filter_value("nomatch");
        prop_assert_eq!(grid.derived().len(), 0);
        prop_assert!(grid.is_selected(&key));
        prop_assert_eq!(grid.selected_visible_count(), 0);

        grid.set_filter_value("");
        prop_assert!(grid.is_selected(&key));
        prop_assert!(grid.selected_rows().iter().any(|r| r.id == key));
    }

    #[test]
    fn test_set_data_prunes_missing_keys(count in 2usize..40) {
        let texts = vec!["x".to_string(); count];
        let data = records_from(&texts, &[]);
        let mut grid = DataGrid::new(grid_columns(), data.clone());

        grid.toggle_selected(0);
        grid.toggle_selected(count - 1);

        // Drop the last record.
        grid.set_data(data[..count - 1].to_vec());
        prop_assert!(grid.is_selected(&0));
        prop_assert!(!grid.is_selected(&(count - 1)));
        prop_assert_eq!(grid.selected_count(), 1);
    }
}
