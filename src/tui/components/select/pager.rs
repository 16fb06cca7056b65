//! Picks which items are visible for a given active index.
//!
//! Only selectable items count toward `page_size`. A separator is shown
//! together with the selectable item it precedes; separators after the last
//! selectable item are shown with that item.

use super::choice::Item;

/// Row of the active item inside a clamped (non-looping) page.
fn finite_position(active: usize, total: usize, page_size: usize) -> usize {
    let middle = page_size / 2;
    if total <= page_size || active < middle {
        active
    } else if active >= total - middle {
        active + page_size - total
    } else {
        middle
    }
}

/// Indices into `items`, in display order.
pub fn visible_window<T>(items: &[Item<T>], active: usize, page_size: usize, loop_nav: bool) -> Vec<usize> {
    let page_size = page_size.max(1);
    let selectable: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.is_selectable())
        .map(|(i, _)| i)
        .collect();
    let total = selectable.len();
    let Some(k) = selectable.iter().position(|&i| i == active) else {
        return Vec::new();
    };

    let window: Vec<usize> = if total <= page_size {
        selectable.clone()
    } else if loop_nav {
        let start = (k + total - page_size / 2) % total;
        (0..page_size).map(|row| selectable[(start + row) % total]).collect()
    } else {
        let start = k - finite_position(k, total, page_size);
        selectable[start..start + page_size].to_vec()
    };

    let last_selectable = selectable[total - 1];
    let mut lines = Vec::with_capacity(window.len());
    for index in window {
        // leading separators back to the previous selectable item (or the top)
        let mut lead = index;
        while lead > 0 && !items[lead - 1].is_selectable() {
            lead -= 1;
        }
        lines.extend(lead..=index);
        if index == last_selectable {
            lines.extend(index + 1..items.len());
        }
    }
    lines
}
