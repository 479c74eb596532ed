//! Greedy line breaking.
//!
//! Items are appended to the current line while their minimum breadths (plus
//! spacing) still fit and no hint asks for a break. Line membership is fixed
//! before any flexible growth happens.

use super::{fit_span, BreakItem, LineBreaker, SpanFit, WrappedLine, FIT_TOLERANCE};

/// First-fit line breaker.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyBreaker;

/// Running state of the line being filled.
struct OpenLine {
    start: usize,
    /// Minimum breadth of the line so far, spacing included.
    breadth: f32,
    /// Only a line-break marker so far.
    marker_only: bool,
    /// Holds an item that must be alone.
    filled: bool,
}

impl OpenLine {
    fn new(start: usize, item: &BreakItem, available: f32) -> Self {
        Self {
            start,
            breadth: item.min,
            marker_only: item.is_marker(),
            filled: item.fills_line(available),
        }
    }

    /// Whether `item` has to go on a new line.
    fn breaks_before(&self, item: &BreakItem, available: f32) -> bool {
        if item.is_marker() {
            return true;
        }
        if self.marker_only {
            // The item becomes the first content of the marker's line.
            return false;
        }
        item.line_break.should_start_new_line
            || self.filled
            || item.fills_line(available)
            || self.breadth + item.spacing + item.min > available + FIT_TOLERANCE
    }

    fn push(&mut self, item: &BreakItem, available: f32) {
        if self.marker_only {
            self.breadth += item.min;
        } else {
            self.breadth += item.spacing + item.min;
        }
        self.marker_only = false;
        self.filled |= item.fills_line(available);
    }
}

impl LineBreaker for GreedyBreaker {
    fn wrap(&self, items: &[BreakItem], available: f32) -> Vec<WrappedLine> {
        let mut lines = Vec::new();
        let Some(first) = items.first() else {
            return lines;
        };

        let mut open = OpenLine::new(0, first, available);
        for (index, item) in items.iter().enumerate().skip(1) {
            if open.breaks_before(item, available) {
                lines.push(resolve(items, open.start, index, available));
                open = OpenLine::new(index, item, available);
            } else {
                open.push(item, available);
            }
        }
        lines.push(resolve(items, open.start, items.len(), available));
        lines
    }
}

fn resolve(items: &[BreakItem], start: usize, end: usize, available: f32) -> WrappedLine {
    let span = &items[start..end];
    let fit = fit_span(span, available).unwrap_or_else(|| {
        tracing::debug!(start, end, "greedy line rejected by span fitting, keeping minimum sizes");
        SpanFit::at_minimum(span, available)
    });
    fit.into_line(start)
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
    fn test_empty_input_has_no_lines() {
        assert!(GreedyBreaker.wrap(&[], 100.0).is_empty());
    }

    #[test]
    fn test_fills_lines_in_order() {
        let items = rigid_items(&[10.0, 20.0, 30.0, 40.0, 20.0, 30.0], 10.0);
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
        assert_eq!(breakpoints(&lines), vec![0, 3, 5, 6]);
    }

    #[test]
    fn test_oversized_item_gets_its_own_line() {
        let items = rigid_items(&[10.0, 200.0, 10.0], 5.0);
        let lines = GreedyBreaker.wrap(&items, 100.0);
        assert_eq!(breakpoints(&lines), vec![0, 1, 2, 3]);
        assert_eq!(lines[1], vec![WrappedItem::new(1, 200.0, 0.0)]);
    }

    #[test]
    fn test_start_new_line_hint() {
        let mut items = rigid_items(&[10.0, 10.0, 10.0], 0.0);
        items[1].line_break = LineBreak::START_NEW_LINE;
        let lines = GreedyBreaker.wrap(&items, 100.0);
        assert_eq!(breakpoints(&lines), vec![0, 1, 3]);
    }

    #[test]
    fn test_marker_breaks_and_leads_next_line() {
        let mut items = rigid_items(&[10.0, 0.0, 10.0, 10.0], 2.0);
        items[1].line_break = LineBreak::MARKER;
        let lines = GreedyBreaker.wrap(&items, 100.0);

        assert_eq!(breakpoints(&lines), vec![0, 1, 4]);
        assert_eq!(
            lines[1],
            vec![
                WrappedItem::new(1, 0.0, 0.0),
                WrappedItem::new(2, 10.0, 0.0),
                WrappedItem::new(3, 10.0, 2.0),
            ]
        );
    }

    #[test]
    fn test_consecutive_markers_leave_an_empty_line() {
        let mut items = rigid_items(&[10.0, 0.0, 0.0, 10.0], 2.0);
        items[1].line_break = LineBreak::MARKER;
        items[2].line_break = LineBreak::MARKER;
        let lines = GreedyBreaker.wrap(&items, 100.0);

        assert_eq!(breakpoints(&lines), vec![0, 1, 2, 4]);
    }

    #[test]
    fn test_line_filling_item_stands_alone() {
        let mut items = rigid_items(&[1.0, 1.0, 1.0, 1.0], 1.0);
        items[1].max = f32::INFINITY;
        items[1].flexibility = Flexibility::Maximum;
        let lines = GreedyBreaker.wrap(&items, 8.0);

        assert_eq!(breakpoints(&lines), vec![0, 1, 2, 4]);
        assert_eq!(lines[1], vec![WrappedItem::new(1, 8.0, 0.0)]);
    }

    #[test]
    fn test_next_item_never_fits_on_a_closed_line() {
        let items = rigid_items(&[7.0, 3.0, 9.0, 1.0, 4.0, 6.0, 2.0, 8.0], 1.0);
        let available = 12.0;
        let lines = GreedyBreaker.wrap(&items, available);

        for pair in lines.windows(2) {
            let used: f32 = pair[0].iter().map(|item| item.leading_space + item.breadth).sum();
            let next = &items[pair[1][0].index];
            assert!(used + next.spacing + next.min > available);
        }
    }
}
