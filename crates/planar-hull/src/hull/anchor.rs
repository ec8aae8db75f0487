use super::types::Point;

/// Index of the lowest point; among equally low points the rightmost one.
///
/// That point is extremal in direction (-Y, then +X), so it is always a hull vertex.
/// `None` for an empty slice.
pub fn anchor_index(points: &[Point]) -> Option<usize> {
    let mut iter = points.iter().enumerate();
    let (mut best, mut low) = iter.next()?;
    for (i, p) in iter {
        if p.y < low.y || (p.y == low.y && p.x > low.x) {
            best = i;
            low = p;
        }
    }
    Some(best)
}

/// Swap the anchor into index 0. Returns the index it came from.
pub fn place_anchor(points: &mut [Point]) -> Option<usize> {
    let from = anchor_index(points)?;
    points.swap(0, from);
    Some(from)
}
