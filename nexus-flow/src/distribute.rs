//! Flexible space distribution within one line.
//!
//! Axis-agnostic math shared by both line breakers and the justification
//! step. Items start at their lower bound and are then offered leftover
//! space by priority group (highest first). Within a group the items with
//! the least headroom are served first and each is offered an equal share
//! of what is left, so no item is offered more than it can absorb and the
//! group uses all the space its members can take before the next group
//! sees any of it.

/// Growth bounds of one item on the breadth axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlexSlot {
    pub lower: f32,
    pub upper: f32,
    pub priority: f64,
}

impl FlexSlot {
    #[inline]
    pub fn headroom(&self) -> f32 {
        (self.upper - self.lower).max(0.0)
    }
}

/// Result of a water-filling pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Growth {
    /// Resolved breadth per slot, in input order.
    pub sizes: Vec<f32>,
    /// Space that could not be absorbed.
    pub remaining: f32,
}

/// Grow slots from their lower bound into `remaining` space.
///
/// A non-positive `remaining` leaves every slot at its lower bound.
pub fn grow_items(slots: &[FlexSlot], remaining: f32) -> Growth {
    let mut sizes: Vec<f32> = slots.iter().map(|slot| slot.lower).collect();
    if remaining <= 0.0 || slots.is_empty() {
        return Growth { sizes, remaining };
    }

    let mut order: Vec<usize> = (0..slots.len()).collect();
    order.sort_by(|&a, &b| {
        slots[b]
            .priority
            .total_cmp(&slots[a].priority)
            .then(slots[a].headroom().total_cmp(&slots[b].headroom()))
    });

    let mut remaining = remaining;
    for group in order.chunk_by(|&a, &b| slots[a].priority == slots[b].priority) {
        let mut left = group.len();
        for &index in group {
            let offer = remaining / left as f32;
            let grant = slots[index].headroom().min(offer).max(0.0);
            sizes[index] += grant;
            remaining -= grant;
            left -= 1;
        }
        if remaining <= 0.0 {
            break;
        }
    }

    Growth { sizes, remaining }
}

/// Spread `remaining` equally over the gaps after `first`.
///
/// `leading` holds the space before each item; entries up to and including
/// `first` start the line and are left alone. Returns the space that could
/// not be placed (all of it when there is no gap).
pub fn stretch_spaces(leading: &mut [f32], first: usize, remaining: f32) -> f32 {
    if remaining <= 0.0 || !remaining.is_finite() {
        return remaining;
    }
    let gaps = leading.len().saturating_sub(first + 1);
    if gaps == 0 {
        return remaining;
    }
    let share = remaining / gaps as f32;
    for space in leading.iter_mut().skip(first + 1) {
        *space += share;
    }
    0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(lower: f32, upper: f32) -> FlexSlot {
        FlexSlot { lower, upper, priority: 0.0 }
    }

    #[test]
    fn test_rigid_slots_do_not_grow() {
        let growth = grow_items(&[slot(10.0, 10.0), slot(20.0, 20.0)], 15.0);
        assert_eq!(growth.sizes, vec![10.0, 20.0]);
        assert_eq!(growth.remaining, 15.0);
    }

    #[test]
    fn test_equal_split_between_unbounded_slots() {
        let growth = grow_items(&[slot(10.0, f32::INFINITY), slot(10.0, f32::INFINITY)], 20.0);
        assert_eq!(growth.sizes, vec![20.0, 20.0]);
        assert_eq!(growth.remaining, 0.0);
    }

    #[test]
    fn test_small_headroom_is_filled_first_and_rest_goes_to_others() {
        // 30 to share: the capped slot takes 4, the other two split 26.
        let growth = grow_items(
            &[slot(0.0, f32::INFINITY), slot(0.0, 4.0), slot(0.0, f32::INFINITY)],
            30.0,
        );
        assert_eq!(growth.sizes, vec![13.0, 4.0, 13.0]);
        assert_eq!(growth.remaining, 0.0);
    }

    #[test]
    fn test_higher_priority_group_is_served_first() {
        let low = FlexSlot { lower: 0.0, upper: 100.0, priority: 0.0 };
        let high = FlexSlot { lower: 0.0, upper: 100.0, priority: 1.0 };

        let growth = grow_items(&[low, high], 60.0);
        assert_eq!(growth.sizes, vec![0.0, 60.0]);

        let growth = grow_items(&[low, high], 160.0);
        assert_eq!(growth.sizes, vec![60.0, 100.0]);
        assert_eq!(growth.remaining, 0.0);
    }

    #[test]
    fn test_unabsorbed_space_is_reported() {
        let growth = grow_items(&[slot(5.0, 8.0), slot(5.0, 6.0)], 10.0);
        assert_eq!(growth.sizes, vec![8.0, 6.0]);
        assert_eq!(growth.remaining, 6.0);
    }

    #[test]
    fn test_negative_space_keeps_lower_bounds() {
        let growth = grow_items(&[slot(5.0, 8.0)], -3.0);
        assert_eq!(growth.sizes, vec![5.0]);
        assert_eq!(growth.remaining, -3.0);
    }

    #[test]
    fn test_stretch_spaces_splits_between_gaps() {
        let mut leading = vec![0.0, 1.0, 1.0];
        let left = stretch_spaces(&mut leading, 0, 4.0);
        assert_eq!(leading, vec![0.0, 3.0, 3.0]);
        assert_eq!(left, 0.0);
    }

    #[test]
    fn test_stretch_spaces_skips_line_start_after_marker() {
        // A marker at 0 makes item 1 the first content item.
        let mut leading = vec![0.0, 0.0, 1.0];
        stretch_spaces(&mut leading, 1, 2.0);
        assert_eq!(leading, vec![0.0, 0.0, 3.0]);
    }

    #[test]
    fn test_stretch_spaces_without_gaps_leaves_slack() {
        let mut leading = vec![0.0];
        assert_eq!(stretch_spaces(&mut leading, 0, 7.0), 7.0);
        assert_eq!(leading, vec![0.0]);
    }
}
