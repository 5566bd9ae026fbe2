//! LRU (Least-Recently-Used) victim selection.

use crate::common::PageId;
use crate::sim::frame_set::FrameSet;
use crate::sim::policy::recency::RecencyTable;

/// Pick the resident page with the smallest last-use timestamp.
///
/// Scans the resident set in frame order and only replaces the candidate on
/// a strictly smaller timestamp, so among equal minima the page earliest in
/// the current frame ordering wins.
///
/// # Panics
/// Panics if the frame set is empty; selection only happens under a full set.
pub(crate) fn select_victim(frames: &FrameSet, recency: &RecencyTable) -> PageId {
    let mut victim: Option<(PageId, u64)> = None;

    for page in frames.iter() {
        let stamp = recency.stamp_of(page);
        match victim {
            Some((_, best)) if stamp >= best => {}
            _ => victim = Some((page, stamp)),
        }
    }

    victim
        .expect("victim selection on empty frame set")
        .0
}
