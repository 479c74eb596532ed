//! Integration tests for the line breakers.
//!
//! These drive `GreedyBreaker` and `OptimalBreaker` directly with breadth
//! ranges, without measuring any items.

use nexus_flow::line_break::{breakpoints, fit_span};
use nexus_flow::{
    BreakItem, BreakerTuning, Flexibility, GreedyBreaker, LineBreaker, OptimalBreaker, WrappedItem,
};

fn rigid(breadths: &[f32], spacing: f32) -> Vec<BreakItem> {
    breadths.iter().map(|&breadth| BreakItem::rigid(breadth, spacing)).collect()
}

#[test]
fn test_flow() {
    let items = rigid(&[10.0, 20.0, 30.0, 40.0, 20.0, 30.0], 10.0);

    let lines = GreedyBreaker.wrap(&items, 80.0);

    assert_eq!(
        lines,
        vec![
            vec![
                WrappedItem::new(0, 10.0, 0.0),
                WrappedItem::new(1, 20.0, 10.0),
                WrappedItem::new(2, 30.0, 10.0),
            ],
            vec![WrappedItem::new(3, 40.0, 0.0), WrappedItem::new(4, 20.0, 10.0)],
            vec![WrappedItem::new(5, 30.0, 0.0)],
        ]
    );
}

#[test]
fn test_knuth_plass() {
    let items = rigid(&[10.0, 20.0, 30.0, 40.0, 20.0, 30.0], 10.0);

    let lines = OptimalBreaker::default().wrap(&items, 80.0);

    assert_eq!(
        lines,
        vec![
            vec![
                WrappedItem::new(0, 10.0, 0.0),
                WrappedItem::new(1, 20.0, 10.0),
                WrappedItem::new(2, 30.0, 10.0),
            ],
            vec![WrappedItem::new(3, 40.0, 0.0)],
            vec![WrappedItem::new(4, 20.0, 0.0), WrappedItem::new(5, 30.0, 10.0)],
        ]
    );
}

#[test]
fn test_three_items_wrap_after_two() {
    let items = rigid(&[50.0, 50.0, 50.0], 10.0);

    let greedy = GreedyBreaker.wrap(&items, 130.0);
    let optimal = OptimalBreaker::default().wrap(&items, 130.0);
    for lines in [greedy, optimal] {
        assert_eq!(breakpoints(&lines), vec![0, 2, 3]);
    }
}

#[test]
fn test_lines_fit_unless_single_item_overflows() {
    let items = rigid(&[12.0, 3.0, 30.0, 7.0, 7.0, 1.0, 15.0, 2.0, 9.0, 4.0], 2.0);
    let available = 16.0;

    let strategies: [&dyn LineBreaker; 2] = [&GreedyBreaker, &OptimalBreaker::default()];
    for breaker in strategies {
        for line in breaker.wrap(&items, available) {
            let minimum: f32 = line
                .iter()
                .map(|item| items[item.index].min + item.leading_space)
                .sum();
            assert!(line.len() == 1 || minimum <= available, "line {line:?} does not fit");
        }
    }
}

#[test]
fn test_greedy_closes_lines_only_when_full() {
    let items = rigid(&[12.0, 3.0, 30.0, 7.0, 7.0, 1.0, 15.0, 2.0, 9.0, 4.0], 2.0);
    let available = 16.0;
    let lines = GreedyBreaker.wrap(&items, available);

    for pair in lines.windows(2) {
        let used: f32 = pair[0].iter().map(|item| item.leading_space + item.breadth).sum();
        let next = &items[pair[1][0].index];
        assert!(used + next.spacing + next.min > available);
    }
}

#[test]
fn test_maximum_item_gets_its_own_line() {
    let mut items = rigid(&[1.0, 1.0, 1.0, 1.0], 1.0);
    items[1].max = f32::INFINITY;
    items[1].flexibility = Flexibility::Maximum;

    for lines in [GreedyBreaker.wrap(&items, 8.0), OptimalBreaker::default().wrap(&items, 8.0)] {
        assert_eq!(breakpoints(&lines), vec![0, 1, 2, 4]);
        assert_eq!(lines[1], vec![WrappedItem::new(1, 8.0, 0.0)]);
    }
}

#[test]
fn test_stretch_weight_discourages_shrunk_items() {
    // Two items that would like to be 6 wide but can shrink to 2.
    let squeezable = BreakItem {
        min: 2.0,
        ideal: 6.0,
        max: 6.0,
        ..BreakItem::rigid(2.0, 0.0)
    };
    let items = vec![squeezable; 2];

    let lenient = OptimalBreaker::new(BreakerTuning {
        stretch_weight: 0.0,
        ..BreakerTuning::default()
    });
    let strict = OptimalBreaker::new(BreakerTuning {
        stretch_weight: 10.0,
        ..BreakerTuning::default()
    });

    assert_eq!(breakpoints(&lenient.wrap(&items, 6.0)), vec![0, 2]);
    assert_eq!(breakpoints(&strict.wrap(&items, 6.0)), vec![0, 1, 2]);
}

#[test]
fn test_fit_span_shares_space_by_priority() {
    let low = BreakItem {
        max: 20.0,
        ..BreakItem::rigid(5.0, 0.0)
    };
    let high = BreakItem { priority: 1.0, ..low };

    let fit = fit_span(&[low, high], 30.0).expect("span should fit");
    assert_eq!(fit.sizes, vec![10.0, 20.0]);
    assert_eq!(fit.remaining, 0.0);
}
