//! # Fixed-Point Scatter
//!
//! Set dressing for prefab-authored spawn points: every point gets one
//! pick, drawn uniformly from a palette. Unlike the composer's kill slots
//! there is no anti-repeat rule here — repeats are fine for clutter.

use crate::rng::RandomSource;

/// Assigns one palette entry to every spawn point, uniformly at random.
///
/// Returns one `(point, pick)` pair per spawn point, in input order. An
/// empty palette yields no placements.
pub fn scatter<R, T>(rng: &mut R, points: &[(f32, f32)], palette: &[T]) -> Vec<((f32, f32), T)>
where
    R: RandomSource,
    T: Copy,
{
    if palette.is_empty() {
        return Vec::new();
    }
    let len = u32::try_from(palette.len()).unwrap_or(u32::MAX);
    points
        .iter()
        .map(|point| {
            let pick = palette[rng.uniform(0, len) as usize];
            (*point, pick)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{SeededSource, SequenceSource};

    #[test]
    fn every_point_gets_exactly_one_pick() {
        let points = [(0.0, 0.0), (4.0, 1.0), (8.0, 2.0)];
        let palette = ['a', 'b', 'c', 'd'];
        let mut rng = SeededSource::new(7);
        let placed = scatter(&mut rng, &points, &palette);
        assert_eq!(placed.len(), points.len());
        for ((point, _), original) in placed.iter().zip(points.iter()) {
            assert_eq!(point, original);
        }
    }

    #[test]
    fn picks_follow_the_draws() {
        let points = [(0.0, 0.0), (1.0, 0.0)];
        let palette = [10u8, 20, 30];
        let mut rng = SequenceSource::new(vec![2, 0]);
        let placed = scatter(&mut rng, &points, &palette);
        assert_eq!(placed[0].1, 30);
        assert_eq!(placed[1].1, 10);
    }

    #[test]
    fn empty_palette_places_nothing() {
        let points = [(0.0, 0.0)];
        let palette: [u8; 0] = [];
        let mut rng = SeededSource::new(1);
        assert!(scatter(&mut rng, &points, &palette).is_empty());
    }
}
