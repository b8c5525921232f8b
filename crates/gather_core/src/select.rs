/// Picks the item with the largest measurement.
///
/// Items are sorted ascending by measurement with a stable sort and the
/// last element wins. Among equal maxima this selects the one that a
/// stable ascending ordering places last, which downstream results
/// depend on bit-for-bit; do not replace with a plain `max_by_key`.
pub fn select_heaviest<T>(mut measured: Vec<(T, u64)>) -> Option<T> {
    measured.sort_by_key(|(_, weight)| *weight);
    measured.pop().map(|(item, _)| item)
}
