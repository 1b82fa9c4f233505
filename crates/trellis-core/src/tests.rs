#[cfg(test)]
mod tests {
    use crate::*;

    fn selection_of(spans: &[(usize, usize)]) -> ListSelection {
        let mut selection = ListSelection::new();
        for &(start, end) in spans {
            selection.add_range(start, end);
        }
        selection
    }

    fn spans(pairs: &[(usize, usize)]) -> Vec<Span> {
        pairs.iter().map(|&(s, e)| Span::new(s, e)).collect()
    }

    #[test]
    fn test_span_length_and_normalize() {
        assert_eq!(Span::new(10, 5).len(), 6);
        assert_eq!(Span::new(5, 10).len(), 6);
        assert_eq!(Span::single(3).len(), 1);

        assert_eq!(Span::normalized(10, 5), Span::new(5, 10));
        assert_eq!(Span::new(10, 5).normalize(), Span::new(5, 10));
        assert!(!Span::new(10, 5).is_normalized());
    }

    #[test]
    fn test_span_contains() {
        let span = Span::new(5, 10);
        assert!(span.contains(&Span::new(5, 10)));
        assert!(span.contains(&Span::new(10, 6)));
        assert!(!span.contains(&Span::new(4, 6)));
        assert!(!span.contains(&Span::new(9, 11)));

        let reversed = Span::new(10, 5);
        assert!(reversed.contains(&Span::new(6, 9)));
        assert!(reversed.contains(&Span::new(9, 6)));
        assert!(!reversed.contains(&Span::new(4, 6)));

        assert!(span.contains_index(7));
        assert!(!span.contains_index(11));
    }

    #[test]
    fn test_span_intersects() {
        let span = Span::new(5, 10);
        assert!(span.intersects(&Span::new(10, 12)));
        assert!(span.intersects(&Span::new(0, 5)));
        assert!(!span.intersects(&Span::new(11, 12)));
        assert!(!span.intersects(&Span::new(4, 0)));

        let reversed = Span::new(10, 5);
        assert!(reversed.intersects(&Span::new(12, 8)));
        assert!(!reversed.intersects(&Span::new(11, 14)));
    }

    #[test]
    fn test_span_intersect_and_union() {
        let span = Span::new(5, 10);
        assert_eq!(span.intersect(&Span::new(8, 12)), Some(Span::new(8, 10)));
        assert_eq!(span.intersect(&Span::new(6, 7)), Some(Span::new(6, 7)));
        assert_eq!(span.intersect(&Span::new(11, 12)), None);

        assert_eq!(span.union(&Span::new(12, 14)), Span::new(5, 14));
        assert_eq!(Span::new(10, 5).union(&Span::new(12, 11)), Span::new(5, 12));
        assert_eq!(Span::new(10, 5).union(&Span::new(3, 4)), Span::new(3, 10));
    }

    #[test]
    fn test_span_display_and_ranges() {
        assert_eq!(Span::new(5, 10).to_string(), "[5, 10]");
        assert_eq!(Span::from(2..=4), Span::new(2, 4));
        assert_eq!(Span::new(4, 2).indices().collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn test_add_range_to_empty() {
        let mut selection = ListSelection::new();
        let added = selection.add_range(5, 10);

        assert_eq!(added.as_slice(), &[Span::new(5, 10)]);
        assert!(selection.contains_index(7));
        assert!(!selection.contains_index(4));
        assert!(!selection.contains_index(11));
    }

    #[test]
    fn test_add_range_normalizes_endpoints() {
        let mut selection = ListSelection::new();
        let added = selection.add_range(10, 5);

        assert_eq!(added.as_slice(), &[Span::new(5, 10)]);
        assert_eq!(selection.spans(), &[Span::new(5, 10)]);
    }

    #[test]
    fn test_add_range_merges_adjacent_after() {
        let mut selection = selection_of(&[(5, 10)]);
        let added = selection.add_range(11, 15);

        assert_eq!(added.as_slice(), &[Span::new(11, 15)]);
        assert_eq!(selection.spans(), &[Span::new(5, 15)]);
    }

    #[test]
    fn test_add_range_merges_adjacent_before() {
        let mut selection = selection_of(&[(5, 10)]);
        let added = selection.add_range(1, 4);

        assert_eq!(added.as_slice(), &[Span::new(1, 4)]);
        assert_eq!(selection.spans(), &[Span::new(1, 10)]);
    }

    #[test]
    fn test_add_range_bridges_two_spans() {
        let mut selection = selection_of(&[(0, 2), (6, 8)]);
        let added = selection.add_range(3, 5);

        assert_eq!(added.as_slice(), &[Span::new(3, 5)]);
        assert_eq!(selection.spans(), &[Span::new(0, 8)]);
    }

    #[test]
    fn test_add_range_reports_only_gaps() {
        let mut selection = selection_of(&[(2, 3), (6, 7), (10, 11)]);
        let added = selection.add_range(0, 12);

        assert_eq!(added.to_vec(), spans(&[(0, 1), (4, 5), (8, 9), (12, 12)]));
        assert_eq!(selection.spans(), &[Span::new(0, 12)]);
    }

    #[test]
    fn test_add_range_inserts_between_spans() {
        let mut selection = selection_of(&[(0, 1), (20, 21)]);
        let added = selection.add_range(10, 12);

        assert_eq!(added.as_slice(), &[Span::new(10, 12)]);
        assert_eq!(selection.spans(), spans(&[(0, 1), (10, 12), (20, 21)]));
    }

    #[test]
    fn test_add_range_already_selected() {
        let mut selection = selection_of(&[(5, 10)]);
        assert!(selection.add_range(6, 9).is_empty());
        assert!(selection.add_range(5, 10).is_empty());
        assert_eq!(selection.spans(), &[Span::new(5, 10)]);
    }

    #[test]
    fn test_remove_range_splits_span() {
        let mut selection = selection_of(&[(5, 15)]);
        let removed = selection.remove_range(8, 12);

        assert_eq!(removed.as_slice(), &[Span::new(8, 12)]);
        assert_eq!(selection.spans(), &[Span::new(5, 7), Span::new(13, 15)]);
    }

    #[test]
    fn test_remove_range_trims_edges() {
        let mut selection = selection_of(&[(5, 10)]);
        assert_eq!(selection.remove_range(5, 7).as_slice(), &[Span::new(5, 7)]);
        assert_eq!(selection.spans(), &[Span::new(8, 10)]);

        assert_eq!(selection.remove_range(12, 9).as_slice(), &[Span::new(9, 10)]);
        assert_eq!(selection.spans(), &[Span::new(8, 8)]);
    }

    #[test]
    fn test_remove_range_across_spans() {
        let mut selection = selection_of(&[(0, 3), (5, 6), (8, 12)]);
        let removed = selection.remove_range(2, 9);

        assert_eq!(removed.to_vec(), spans(&[(2, 3), (5, 6), (8, 9)]));
        assert_eq!(selection.spans(), &[Span::new(0, 1), Span::new(10, 12)]);
    }

    #[test]
    fn test_remove_range_whole_spans() {
        let mut selection = selection_of(&[(2, 3), (5, 6), (9, 9)]);
        let removed = selection.remove_range(1, 7);

        assert_eq!(removed.to_vec(), spans(&[(2, 3), (5, 6)]));
        assert_eq!(selection.spans(), &[Span::new(9, 9)]);
    }

    #[test]
    fn test_remove_range_nothing_selected() {
        let mut empty = ListSelection::new();
        assert!(empty.remove_range(0, 10).is_empty());

        let mut selection = selection_of(&[(0, 2), (10, 12)]);
        assert!(selection.remove_range(4, 8).is_empty());
        assert!(selection.remove_range(20, 30).is_empty());
        assert_eq!(selection.spans(), &[Span::new(0, 2), Span::new(10, 12)]);
    }

    #[test]
    fn test_clear_and_accessors() {
        let mut selection = selection_of(&[(0, 2), (10, 12)]);
        assert_eq!(selection.len(), 2);
        assert_eq!(selection[1], Span::new(10, 12));
        assert_eq!(selection.get(2), None);
        assert_eq!(selection.first(), Some(Span::new(0, 2)));
        assert_eq!(selection.last(), Some(Span::new(10, 12)));
        assert_eq!(selection.selected_count(), 6);
        assert_eq!(
            selection.indices().collect::<Vec<_>>(),
            vec![0, 1, 2, 10, 11, 12]
        );
        assert_eq!((&selection).into_iter().count(), 2);

        selection.clear();
        assert!(selection.is_empty());
        assert_eq!(selection.first(), None);
    }

    #[test]
    fn test_index_of_exact_only() {
        let selection = selection_of(&[(0, 2), (5, 10)]);

        assert_eq!(selection.index_of(&Span::new(5, 10)), Some(1));
        assert_eq!(selection.index_of(&Span::new(0, 2)), Some(0));
        assert_eq!(selection.index_of(&Span::new(6, 9)), None);
        assert_eq!(selection.index_of(&Span::new(10, 5)), None);
        assert_eq!(selection.index_of(&Span::new(20, 21)), None);
    }

    #[test]
    fn test_insert_index_inside_and_before() {
        let mut selection = selection_of(&[(5, 15)]);

        assert_eq!(selection.insert_index(10), 1);
        assert_eq!(selection.spans(), &[Span::new(5, 16)]);

        assert_eq!(selection.insert_index(3), 1);
        assert_eq!(selection.spans(), &[Span::new(6, 17)]);
    }

    #[test]
    fn test_insert_index_at_span_edges() {
        let mut selection = selection_of(&[(5, 10), (20, 22)]);

        // At the start: the span moves rather than grows.
        assert_eq!(selection.insert_index(5), 2);
        assert_eq!(selection.spans(), &[Span::new(6, 11), Span::new(21, 23)]);

        // At the last index: it grows.
        assert_eq!(selection.insert_index(11), 2);
        assert_eq!(selection.spans(), &[Span::new(6, 12), Span::new(22, 24)]);

        // Right after it: only later spans move.
        assert_eq!(selection.insert_index(13), 1);
        assert_eq!(selection.spans(), &[Span::new(6, 12), Span::new(23, 25)]);

        assert_eq!(selection.insert_index(30), 0);
    }

    #[test]
    fn test_remove_indexes_trims_and_shifts() {
        let mut selection = selection_of(&[(5, 10), (20, 25)]);
        let removed = selection.remove_indexes(8, 5);

        assert_eq!(removed.as_slice(), &[Span::new(8, 10)]);
        assert_eq!(selection.spans(), &[Span::new(5, 7), Span::new(15, 20)]);
    }

    #[test]
    fn test_remove_indexes_coalesces_neighbours() {
        let mut selection = selection_of(&[(5, 7), (13, 15)]);
        let removed = selection.remove_indexes(8, 5);

        assert!(removed.is_empty());
        assert_eq!(selection.spans(), &[Span::new(5, 10)]);
    }

    #[test]
    fn test_remove_indexes_zero_count() {
        let mut selection = selection_of(&[(5, 7)]);
        assert!(selection.remove_indexes(0, 0).is_empty());
        assert_eq!(selection.spans(), &[Span::new(5, 7)]);
    }

    #[test]
    fn test_len_saturates_at_full_index_space() {
        assert_eq!(Span::new(0, usize::MAX).len(), usize::MAX);
        assert_eq!(Span::new(usize::MAX, 0).len(), usize::MAX);

        let mut selection = ListSelection::new();
        selection.add_range(0, usize::MAX);
        assert_eq!(selection.selected_count(), usize::MAX);
    }

    #[test]
    fn test_insert_index_drops_last_representable_index() {
        let mut selection = selection_of(&[(usize::MAX, usize::MAX)]);
        assert_eq!(selection.insert_index(0), 1);
        assert!(selection.is_empty());

        // Growing a span that reaches the end keeps it at the end.
        let mut selection = selection_of(&[(5, usize::MAX)]);
        assert_eq!(selection.insert_index(10), 1);
        assert_eq!(selection.spans(), &[Span::new(5, usize::MAX)]);

        // Shifting onto the end drops the old last index.
        let mut selection = selection_of(&[(2, 3), (usize::MAX - 1, usize::MAX)]);
        assert_eq!(selection.insert_index(0), 2);
        assert_eq!(selection.spans(), &[Span::new(3, 4), Span::new(usize::MAX, usize::MAX)]);

        // Inserting past a trimmed span still reports it.
        let mut selection = selection_of(&[(10, usize::MAX)]);
        assert_eq!(selection.insert_index(usize::MAX), 1);
        assert_eq!(selection.spans(), &[Span::new(10, usize::MAX - 1)]);
    }

    #[test]
    fn test_collect_merges_spans() {
        let selection: ListSelection = vec![Span::new(8, 4), Span::new(9, 12), Span::new(20, 20)]
            .into_iter()
            .collect();
        assert_eq!(selection.spans(), &[Span::new(4, 12), Span::new(20, 20)]);
    }

    #[test]
    fn test_display() {
        let selection = selection_of(&[(5, 7), (13, 15)]);
        insta::assert_snapshot!(selection.to_string(), @"[[5, 7], [13, 15]]");
        insta::assert_snapshot!(ListSelection::new().to_string(), @"[]");
    }
}
