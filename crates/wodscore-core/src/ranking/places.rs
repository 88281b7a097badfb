/// Standard competition ranking ("1224") over an already sorted slice.
///
/// `tied(prev, next)` reports whether two neighbours compare equal.
pub fn competition_places<T>(sorted: &[T], mut tied: impl FnMut(&T, &T) -> bool) -> Vec<u32> {
    let mut places: Vec<u32> = Vec::with_capacity(sorted.len());
    for (i, item) in sorted.iter().enumerate() {
        let place = match (i.checked_sub(1), places.last()) {
            (Some(prev), Some(&last)) if tied(&sorted[prev], item) => last,
            _ => i as u32 + 1,
        };
        places.push(place);
    }
    places
}
