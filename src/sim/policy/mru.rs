//! MRU (Most-Recently-Used) victim selection.
//!
//! Counter-intuitive for typical workloads, but MRU beats LRU on cyclic
//! access patterns larger than the frame set, where the most recently used
//! page is the least likely to be needed again soon.

use crate::common::PageId;
use crate::sim::frame_set::FrameSet;
use crate::sim::policy::recency::RecencyTable;

/// Pick the resident page with the largest last-use timestamp.
///
/// Same scan as LRU with the comparison flipped: only a strictly larger
/// timestamp replaces the candidate, so among equal maxima the page earliest
/// in the current frame ordering wins.
///
/// # Panics
/// Panics if the frame set is empty; selection only happens under a full set.
pub(crate) fn select_victim(frames: &FrameSet, recency: &RecencyTable) -> PageId {
    let mut victim: Option<(PageId, u64)> = None;

    for page in frames.iter() {
        let stamp = recency.stamp_of(page);
        match victim {
            Some((_, best)) if stamp <= best => {}
            _ => victim = Some((page, stamp)),
        }
    }

    victim
        .expect("victim selection on empty frame set")
        .0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(id: u32) -> PageId {
        PageId::new(id)
    }

    fn setup(pages: &[(u32, u64)]) -> (FrameSet, RecencyTable) {
        let mut frames = FrameSet::new(pages.len());
        let mut recency = RecencyTable::new();
        for &(page, stamp) in pages {
            frames.insert(pid(page));
            recency.touch(pid(page), stamp);
        }
        (frames, recency)
    }

    #[test]
    fn test_selects_newest_stamp() {
        let (frames, recency) = setup(&[(1, 5), (2, 2), (3, 8)]);
        assert_eq!(select_victim(&frames, &recency), pid(3));
    }

    #[test]
    fn test_tie_breaks_by_frame_order() {
        // Pages 1 and 3 share the maximum; 1 comes first in frame order.
        let (frames, recency) = setup(&[(1, 9), (2, 4), (3, 9)]);
        assert_eq!(select_victim(&frames, &recency), pid(1));
    }

    #[test]
    fn test_complementary_to_lru() {
        let (frames, recency) = setup(&[(1, 5), (2, 2), (3, 8)]);
        let mru = select_victim(&frames, &recency);
        let lru = super::super::lru::select_victim(&frames, &recency);
        assert_ne!(mru, lru);
    }
}
