//! Page arithmetic and stale-response guarding for catalog browsing

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Number of pages needed for `count` entries (ceiling division)
pub fn total_pages(count: u32, page_size: u32) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size) as usize
}

/// Bounded window of 1-based page numbers centered on `current`.
///
/// The window is clamped to `[1, total_pages]` and shifted (not shrunk) near
/// either edge, so it only gets shorter than `window` when there are fewer
/// pages than that.
pub fn page_window(current: usize, total_pages: usize, window: usize) -> Vec<usize> {
    if total_pages == 0 || window == 0 {
        return Vec::new();
    }

    let window = window.min(total_pages);
    let current = current.clamp(1, total_pages);

    let start = current
        .saturating_sub(window / 2)
        .max(1)
        .min(total_pages - window + 1);

    (start..start + window).collect()
}

/// Ticket identifying one page load
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// Issues monotonically increasing tokens for page loads.
///
/// In-flight requests are never cancelled. A caller that started a load
/// checks [`RequestTracker::is_current`] when the result arrives and drops
/// it if a newer load has been issued since.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    latest: Arc<AtomicU64>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load, superseding every earlier token
    pub fn issue(&self) -> RequestToken {
        RequestToken(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Whether no newer load has been issued after `token`
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::Acquire) == token.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(200, 20), 10);
        assert_eq!(total_pages(201, 20), 11);
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(10, 0), 0);
    }

    #[test]
    fn test_page_window_centered() {
        assert_eq!(page_window(5, 10, 5), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_page_window_clamped_at_edges() {
        assert_eq!(page_window(1, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(2, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(10, 10, 5), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(9, 10, 5), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_page_window_few_pages() {
        assert_eq!(page_window(2, 3, 5), vec![1, 2, 3]);
        assert!(page_window(1, 0, 5).is_empty());
    }

    #[test]
    fn test_page_window_out_of_range_current() {
        assert_eq!(page_window(42, 10, 5), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(0, 10, 5), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_request_tracker() {
        let tracker = RequestTracker::new();
        let first = tracker.issue();
        assert!(tracker.is_current(first));

        let second = tracker.issue();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
        assert!(second > first);
    }

    #[test]
    fn test_request_tracker_shared_between_clones() {
        let tracker = RequestTracker::new();
        let token = tracker.issue();
        tracker.clone().issue();
        assert!(!tracker.is_current(token));
    }
}
