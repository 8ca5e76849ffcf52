//! Reduces open/close position markers to well-formed, non-overlapping
//! ranges.
//!
//! The formatting pipeline records where formatted regions begin and end as
//! a flat marker list; nested and overlapping regions collapse into their
//! outermost extent. Ein Bereich beginnt beim Tiefenuebergang 0→1 und endet
//! bei 1→0.

use std::ops::Range;

use crate::{Error, Result};

/// One boundary marker of a formatted region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Open,
    Close,
}

/// Merges `(position, marker)` pairs into sorted, non-overlapping ranges.
///
/// Markers need not arrive sorted. At equal positions a close sorts before
/// an open, so touching regions stay separate. Returns
/// [`Error::UnbalancedMarkers`] for a close without a matching open or for
/// opens left dangling at the end.
pub fn merge_marked_ranges(markers: &[(usize, Marker)]) -> Result<Vec<Range<usize>>> {
    let mut sorted = markers.to_vec();
    sorted.sort_by_key(|(pos, marker)| (*pos, matches!(marker, Marker::Open)));

    let mut ranges = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for &(pos, marker) in &sorted {
        match marker {
            Marker::Open => {
                if depth == 0 {
                    start = pos;
                }
                depth += 1;
            }
            Marker::Close => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(Error::UnbalancedMarkers { position: pos })?;
                if depth == 0 {
                    ranges.push(start..pos);
                }
            }
        }
    }
    if depth != 0 {
        return Err(Error::UnbalancedMarkers { position: start });
    }
    Ok(ranges)
}
