//! Active-index bookkeeping. Every function here keeps the invariant that
//! the active index points at a selectable item.

use super::PromptError;
use super::choice::Item;

/// Indices of the first and last selectable items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub first: usize,
    pub last: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

pub fn compute_bounds<T>(items: &[Item<T>]) -> Result<Bounds, PromptError> {
    let first = items.iter().position(Item::is_selectable);
    let last = items.iter().rposition(Item::is_selectable);
    match (first, last) {
        (Some(first), Some(last)) => Ok(Bounds { first, last }),
        _ => Err(PromptError::NoSelectableChoices),
    }
}

/// First selectable item whose value equals `default`, else `bounds.first`.
pub fn resolve_initial_active<T: PartialEq>(
    items: &[Item<T>],
    default: Option<&T>,
    bounds: Bounds,
) -> usize {
    default
        .and_then(|default| {
            items
                .iter()
                .position(|item| item.as_choice().is_some_and(|c| &c.value == default))
        })
        .unwrap_or(bounds.first)
}

/// Step once in `direction`, skipping separators and wrapping around the
/// list. Without `loop_nav`, stepping past either bound is a no-op.
pub fn move_active<T>(
    items: &[Item<T>],
    current: usize,
    direction: Direction,
    bounds: Bounds,
    loop_nav: bool,
) -> usize {
    let pinned = match direction {
        Direction::Prev => current == bounds.first,
        Direction::Next => current == bounds.last,
    };
    if !loop_nav && pinned {
        return current;
    }

    let len = items.len();
    let mut next = current;
    loop {
        next = match direction {
            Direction::Prev => (next + len - 1) % len,
            Direction::Next => (next + 1) % len,
        };
        if items[next].is_selectable() {
            return next;
        }
    }
}

/// `position` is 1-based, as typed. Returns the new active index, or `None`
/// when the position is out of range or lands on a separator.
pub fn jump_to_numeric<T>(items: &[Item<T>], position: usize) -> Option<usize> {
    let index = position.checked_sub(1)?;
    items
        .get(index)
        .filter(|item| item.is_selectable())
        .map(|_| index)
}
