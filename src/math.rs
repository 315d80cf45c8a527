/// Midpoint of `[lo, hi]` without overflowing on large indices.
#[inline]
pub fn midpoint(lo: usize, hi: usize) -> usize {
    lo + (hi - lo) / 2
}

/// One step below `index`, or `None` when the step would leave the sequence.
#[inline]
pub fn step_down(index: usize) -> Option<usize> {
    index.checked_sub(1)
}
