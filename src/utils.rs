use crate::types::{Track, TrackPair};

/// Lays tracks out in rows of two for side-by-side display.
///
/// Pair `k` holds the tracks at index `2k` and `2k + 1`. With an odd number of
/// tracks the last pair has no second track. Order is preserved and every track
/// appears exactly once, so the result has `ceil(len / 2)` pairs.
pub fn pair_up(tracks: &[Track]) -> Vec<TrackPair> {
    (0..tracks.len())
        .step_by(2)
        .map(|i| TrackPair {
            first: tracks[i].clone(),
            second: tracks.get(i + 1).cloned(),
        })
        .collect()
}
