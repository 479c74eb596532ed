//! Balanced line breaking by dynamic programming.
//!
//! `best[end]` is the cheapest way to lay out `items[..end]`. For every end
//! position the candidate line starts are scanned backward until the span
//! stops being feasible; once a span is infeasible, every longer span ending
//! at the same position is infeasible too.
//!
//! A line costs its squared slack, plus the weighted squared deviation of each
//! item from its ideal breadth, plus a bias that grows with the number of items
//! left from its start. The bias makes early lines prefer to be full.
//!
//! The backward scan keeps running sums in a [`SpanTally`], so pricing a
//! candidate line is O(1) and the whole search is O(n²). When the line has
//! room for every item's upper bound the cost is exact. Otherwise the
//! shortfall is charged evenly to the flexible items, which ignores priority
//! groups. The full water-fill only runs for the chosen lines.

use tracing::{debug, trace, warn};

use super::{
    fit_span, BreakItem, GreedyBreaker, LineBreaker, SpanFit, WrappedLine, FIT_TOLERANCE,
};
use crate::config::BreakerTuning;

/// Line breaker that minimizes total slack over all lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimalBreaker {
    tuning: BreakerTuning,
}

/// Best known way to end a line at some position.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    cost: f32,
    start: usize,
}

/// Running totals for `items[start..end]`, extended one item to the left at a time.
#[derive(Debug, Default)]
struct SpanTally {
    /// Sum of minimum breadths and inner spacing.
    minimum: f32,
    /// A line-filling item among `items[start + 1..end]`.
    tail_fills: bool,
    /// Total growth room, each item capped at the available breadth.
    headroom: f32,
    /// Items with any growth room.
    flexible: usize,
    /// Sum of `upper - ideal` over flexible items.
    flex_excess: f32,
    /// Sum of `(upper - ideal)²` over flexible items.
    flex_excess_sq: f32,
    /// Sum of `(upper - ideal)²` over rigid items.
    rigid_excess_sq: f32,
}

impl SpanTally {
    /// Extend the span with `items[start]`, where `items[start + 1..end]` is
    /// the current span. Returns `false` once the span can no longer be one line.
    fn extend(&mut self, items: &[BreakItem], start: usize, end: usize, available: f32) -> bool {
        let item = &items[start];
        if start + 1 < end {
            let next = &items[start + 1];
            if next.is_marker() {
                return false;
            }
            if !item.is_marker() {
                if next.line_break.should_start_new_line {
                    return false;
                }
                self.minimum += next.spacing;
            }
            self.tail_fills |= next.fills_line(available);
        }

        self.minimum += item.min;
        let marker_leads = item.is_marker() && start + 1 < end;
        let content = if marker_leads { end - start - 1 } else { end - start };
        let fills = self.tail_fills || (!marker_leads && item.fills_line(available));
        if content > 1 && (fills || self.minimum > available + FIT_TOLERANCE) {
            return false;
        }

        let upper = item.max.min(item.min + available.max(0.0));
        let headroom = (upper - item.min).max(0.0);
        let excess = upper - item.ideal;
        if headroom > 0.0 {
            self.headroom += headroom;
            self.flexible += 1;
            self.flex_excess += excess;
            self.flex_excess_sq += excess * excess;
        } else {
            self.rigid_excess_sq += excess * excess;
        }
        true
    }

    /// Unused breadth and squared deviation from ideal breadths.
    fn slack_and_stretch(&self, available: f32) -> (f32, f32) {
        let remaining = available - self.minimum;
        if self.flexible == 0 || remaining >= self.headroom {
            let slack = (remaining - self.headroom).max(0.0);
            return (slack, self.flex_excess_sq + self.rigid_excess_sq);
        }
        // Every flexible item gives up an equal share of the shortfall.
        let share = (self.headroom - remaining.max(0.0)) / self.flexible as f32;
        let flex = self.flex_excess_sq - 2.0 * share * self.flex_excess
            + self.flexible as f32 * share * share;
        (0.0, flex.max(0.0) + self.rigid_excess_sq)
    }
}

impl OptimalBreaker {
    pub fn new(tuning: BreakerTuning) -> Self {
        Self { tuning }
    }

    fn line_cost(&self, tally: &SpanTally, available: f32, items_left: usize) -> f32 {
        let (slack, stretch) = tally.slack_and_stretch(available);
        slack * slack + self.tuning.stretch_weight * stretch + self.tuning.bias * items_left as f32
    }

    fn solve(&self, items: &[BreakItem], available: f32) -> Vec<usize> {
        let count = items.len();
        let mut best: Vec<Option<Candidate>> = vec![None; count + 1];
        best[0] = Some(Candidate { cost: 0.0, start: 0 });

        for end in 1..=count {
            let mut tally = SpanTally::default();
            for start in (0..end).rev() {
                if !tally.extend(items, start, end, available) {
                    break;
                }
                let Some(previous) = best[start] else {
                    continue;
                };

                let cost = previous.cost + self.line_cost(&tally, available, count - start);
                if best[end].is_none_or(|current| cost < current.cost) {
                    best[end] = Some(Candidate { cost, start });
                }
            }
        }

        let mut breaks = vec![count];
        let mut end = count;
        while end > 0 {
            // Every single-item span is feasible, so each end has a predecessor.
            let start = best[end].map_or(end - 1, |candidate| candidate.start);
            breaks.push(start);
            end = start;
        }
        breaks.reverse();
        breaks
    }
}

impl LineBreaker for OptimalBreaker {
    fn wrap(&self, items: &[BreakItem], available: f32) -> Vec<WrappedLine> {
        if items.is_empty() {
            return Vec::new();
        }
        if !available.is_finite() {
            debug!(available, "unbounded breadth, breaking greedily");
            return GreedyBreaker.wrap(items, available);
        }
        if items.len() > self.tuning.max_optimal_items {
            warn!(
                items = items.len(),
                limit = self.tuning.max_optimal_items,
                "too many items for optimal line breaking, falling back to greedy"
            );
            return GreedyBreaker.wrap(items, available);
        }

        let breaks = self.solve(items, available);
        trace!(?breaks, available, "optimal breakpoints");

        breaks
            .windows(2)
            .map(|pair| {
                let (start, end) = (pair[0], pair[1]);
                let span = &items[start..end];
                fit_span(span, available)
                    .unwrap_or_else(|| SpanFit::at_minimum(span, available))
                    .into_line(start)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Flexibility, LineBreak};
    use crate::line_break::{breakpoints, WrappedItem};

    fn rigid_items(breadths: &[f32], spacing: f32) -> Vec<BreakItem> {
        breadths.iter().map(|&breadth| BreakItem::rigid(breadth, spacing)).collect()
    }

    #[test]
    fn test_balances_lines_instead_of_filling_greedily() {
        let items = rigid_items(&[10.0, 20.0, 30.0, 40.0, 20.0, 30.0], 10.0);

        let optimal = OptimalBreaker::default().wrap(&items, 80.0);
        let greedy = GreedyBreaker.wrap(&items, 80.0);

        assert_eq!(breakpoints(&optimal), vec![0, 3, 4, 6]);
        assert_eq!(breakpoints(&greedy), vec![0, 3, 5, 6]);
    }

    #[test]
    fn test_everything_fits_on_one_line() {
        let items = rigid_items(&[50.0, 50.0, 50.0], 10.0);
        let lines = OptimalBreaker::default().wrap(&items, 200.0);
        assert_eq!(breakpoints(&lines), vec![0, 3]);
    }

    #[test]
    fn test_oversized_item_overflows_alone() {
        let items = rigid_items(&[10.0, 200.0, 10.0], 5.0);
        let lines = OptimalBreaker::default().wrap(&items, 100.0);
        assert_eq!(breakpoints(&lines), vec![0, 1, 2, 3]);
        assert_eq!(lines[1], vec![WrappedItem::new(1, 200.0, 0.0)]);
    }

    #[test]
    fn test_line_filling_item_gets_whole_line() {
        let mut items = rigid_items(&[1.0, 1.0, 1.0, 1.0], 1.0);
        items[1].max = f32::INFINITY;
        items[1].flexibility = Flexibility::Maximum;
        let lines = OptimalBreaker::default().wrap(&items, 8.0);

        assert_eq!(breakpoints(&lines), vec![0, 1, 2, 4]);
        assert_eq!(lines[1], vec![WrappedItem::new(1, 8.0, 0.0)]);
    }

    #[test]
    fn test_hints_are_honored() {
        let mut items = rigid_items(&[10.0, 0.0, 10.0, 10.0, 10.0], 2.0);
        items[1].line_break = LineBreak::MARKER;
        items[4].line_break = LineBreak::START_NEW_LINE;
        let lines = OptimalBreaker::default().wrap(&items, 100.0);

        assert_eq!(breakpoints(&lines), vec![0, 1, 4, 5]);
        assert_eq!(lines[1][1].leading_space, 0.0);
        assert_eq!(lines[1][2].leading_space, 2.0);
    }

    #[test]
    fn test_unbounded_breadth_uses_a_single_line() {
        let items = rigid_items(&[10.0, 20.0, 30.0], 1.0);
        let lines = OptimalBreaker::default().wrap(&items, f32::INFINITY);
        assert_eq!(breakpoints(&lines), vec![0, 3]);
    }

    #[test]
    fn test_large_inputs_fall_back_to_greedy() {
        let tuning = BreakerTuning {
            max_optimal_items: 4,
            ..BreakerTuning::default()
        };
        let items = rigid_items(&[10.0, 20.0, 30.0, 40.0, 20.0, 30.0], 10.0);
        let lines = OptimalBreaker::new(tuning).wrap(&items, 80.0);
        assert_eq!(breakpoints(&lines), vec![0, 3, 5, 6]);
    }

    #[test]
    fn test_order_is_preserved() {
        let items = rigid_items(&[7.0, 3.0, 9.0, 1.0, 4.0, 6.0, 2.0, 8.0, 5.0], 1.0);
        let lines = OptimalBreaker::default().wrap(&items, 12.0);
        let indices: Vec<usize> = lines.iter().flatten().map(|item| item.index).collect();
        assert_eq!(indices, (0..items.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_many_items_at_the_limit_share_one_line() {
        let limit = BreakerTuning::default().max_optimal_items;
        let items = vec![BreakItem::rigid(1.0, 1.0); limit];

        let lines = OptimalBreaker::default().wrap(&items, 1.0e6);

        assert_eq!(breakpoints(&lines), vec![0, limit]);
        assert_eq!(lines[0][limit - 1].leading_space, 1.0);
    }

    #[test]
    fn test_tally_matches_water_fill_when_items_reach_their_bounds() {
        let flexible = BreakItem {
            max: 9.0,
            ideal: 7.0,
            ..BreakItem::rigid(5.0, 2.0)
        };
        let span = [BreakItem::rigid(4.0, 2.0), flexible, BreakItem::rigid(3.0, 2.0)];
        let available = 40.0;

        let mut tally = SpanTally::default();
        for start in (0..span.len()).rev() {
            assert!(tally.extend(&span, start, span.len(), available));
        }
        let fit = fit_span(&span, available).unwrap();
        let stretch: f32 = span
            .iter()
            .zip(&fit.sizes)
            .map(|(item, size)| (size - item.ideal) * (size - item.ideal))
            .sum();

        assert_eq!(tally.slack_and_stretch(available), (fit.remaining, stretch));
    }

    #[test]
    fn test_tally_rejects_spans_that_cannot_share_a_line() {
        let mut items = rigid_items(&[10.0, 10.0, 10.0], 2.0);
        items[1].line_break = LineBreak::START_NEW_LINE;

        let mut tally = SpanTally::default();
        assert!(tally.extend(&items, 2, 3, 100.0));
        assert!(tally.extend(&items, 1, 3, 100.0));
        assert!(!tally.extend(&items, 0, 3, 100.0));

        let mut tally = SpanTally::default();
        assert!(tally.extend(&items, 2, 3, 25.0));
        assert!(!tally.extend(&items, 1, 3, 21.0));
    }
}
