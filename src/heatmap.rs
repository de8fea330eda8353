//! Movement heatmap: buckets drag history into a grid, weights dwell time
//! with exponential decay so recent movement dominates, normalizes against
//! the hottest cell, and maps intensity onto a yellow→red ramp.

use crate::geometry::PitchSpace;
use crate::model::Player;

/// Default grid resolution (cells per axis).
pub const GRID_SIZE: usize = 40;
/// Per-sample age decay; sample i of n contributes `0.95^(n - i)`.
const DECAY: f64 = 0.95;
/// Dwell time assumed for the final sample, which has no successor (ms).
const FALLBACK_DWELL_MS: f64 = 100.0;
/// Cells under this fraction of the maximum are treated as noise.
const NOISE_FLOOR: f64 = 0.05;

/// One renderable cell, in logical pitch coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeatCell {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Normalized weight in (0, 1]; 1 is the hottest cell on the board.
    pub intensity: f64,
}

/// Pure aggregation over every player's position history. Recomputing with
/// the same inputs always yields the same cells.
pub fn aggregate(players: &[Player], space: PitchSpace, grid_size: usize) -> Vec<HeatCell> {
    if grid_size == 0 {
        return Vec::new();
    }
    let mut grid = vec![0.0f64; grid_size * grid_size];

    for player in players {
        let n = player.history.len();
        for (i, sample) in player.history.iter().enumerate() {
            let dwell = match player.history.get(i + 1) {
                Some(next) => next.timestamp - sample.timestamp,
                None => FALLBACK_DWELL_MS,
            };
            let weight = dwell * DECAY.powi((n - i) as i32);
            let gx = (sample.x / space.width * grid_size as f64).floor() as isize;
            let gy = (sample.y / space.height * grid_size as f64).floor() as isize;
            if gx >= 0 && gy >= 0 && (gx as usize) < grid_size && (gy as usize) < grid_size {
                grid[gy as usize * grid_size + gx as usize] += weight;
            }
        }
    }

    let max_value = grid.iter().cloned().fold(0.0f64, f64::max);
    if max_value <= 0.0 {
        return Vec::new();
    }
    let floor = NOISE_FLOOR * max_value;
    let cell_w = space.width / grid_size as f64;
    let cell_h = space.height / grid_size as f64;

    let mut cells = Vec::new();
    for gy in 0..grid_size {
        for gx in 0..grid_size {
            let value = grid[gy * grid_size + gx];
            if value >= floor {
                cells.push(HeatCell {
                    x: gx as f64 * cell_w,
                    y: gy as f64 * cell_h,
                    width: cell_w,
                    height: cell_h,
                    intensity: value / max_value,
                });
            }
        }
    }
    cells
}

/// Gradient stops: (intensity, r, g, b, a).
const STOPS: [(f64, f64, f64, f64, f64); 4] = [
    (0.0, 255.0, 255.0, 0.0, 0.8),
    (0.3, 255.0, 165.0, 0.0, 0.9),
    (0.6, 255.0, 69.0, 0.0, 0.95),
    (1.0, 255.0, 0.0, 0.0, 1.0),
];

/// Piecewise-linear interpolation across the ramp, alpha included.
pub fn heat_color(intensity: f64) -> (u8, u8, u8, f64) {
    let t = intensity.clamp(0.0, 1.0);
    let mut lo = STOPS[0];
    let mut hi = STOPS[STOPS.len() - 1];
    for pair in STOPS.windows(2) {
        if t >= pair[0].0 && t <= pair[1].0 {
            lo = pair[0];
            hi = pair[1];
            break;
        }
    }
    let span = hi.0 - lo.0;
    let f = if span > 0.0 { (t - lo.0) / span } else { 0.0 };
    (
        (lo.1 + (hi.1 - lo.1) * f).round() as u8,
        (lo.2 + (hi.2 - lo.2) * f).round() as u8,
        (lo.3 + (hi.3 - lo.3) * f).round() as u8,
        lo.4 + (hi.4 - lo.4) * f,
    )
}

pub fn heat_css(intensity: f64) -> String {
    let (r, g, b, a) = heat_color(intensity);
    format!("rgba({r}, {g}, {b}, {a:.3})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::model::PositionSample;

    fn player_with_history(samples: &[(f64, f64, f64)]) -> Player {
        Player {
            id: 10,
            position: Point::new(50.0, 50.0),
            history: samples
                .iter()
                .map(|&(x, y, timestamp)| PositionSample { x, y, timestamp })
                .collect(),
        }
    }

    #[test]
    fn empty_history_yields_no_cells() {
        let p = player_with_history(&[]);
        assert!(aggregate(&[p], PitchSpace::PERCENT, GRID_SIZE).is_empty());
    }

    #[test]
    fn single_hot_cell_normalizes_to_one() {
        // Two samples 1000ms apart in the same cell: it is the only cell,
        // so its intensity is exactly 1.0.
        let p = player_with_history(&[(50.0, 50.0, 0.0), (50.2, 50.2, 1000.0)]);
        let cells = aggregate(&[p], PitchSpace::PERCENT, GRID_SIZE);
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].intensity, 1.0);
        // 50% of a 100-unit axis on a 40-cell grid is cell 20.
        assert_eq!(cells[0].x, 50.0);
        assert_eq!(cells[0].y, 50.0);
    }

    #[test]
    fn recent_samples_outweigh_old_ones() {
        // Equal dwell times in two different cells; the newer sample decays
        // less and must win normalization.
        let p = player_with_history(&[
            (10.0, 10.0, 0.0),
            (90.0, 90.0, 1000.0),
            (90.2, 90.2, 2000.0),
        ]);
        let cells = aggregate(&[p], PitchSpace::PERCENT, GRID_SIZE);
        let old = cells.iter().find(|c| c.x < 50.0).unwrap();
        let new = cells.iter().find(|c| c.x > 50.0).unwrap();
        assert_eq!(new.intensity, 1.0);
        assert!(old.intensity < new.intensity);
    }

    #[test]
    fn noise_floor_discards_faint_cells() {
        // One long dwell and one tiny dwell; the tiny cell sits far below
        // 5% of the max and is dropped.
        let p = player_with_history(&[
            (10.0, 10.0, 0.0),
            (10.0, 10.0, 100_000.0),
            (90.0, 90.0, 100_001.0),
        ]);
        let cells = aggregate(&[p], PitchSpace::PERCENT, GRID_SIZE);
        assert_eq!(cells.len(), 1);
        assert!(cells[0].x < 50.0);
    }

    #[test]
    fn aggregation_is_deterministic() {
        let p = player_with_history(&[(30.0, 70.0, 0.0), (60.0, 20.0, 500.0)]);
        let a = aggregate(std::slice::from_ref(&p), PitchSpace::PERCENT, GRID_SIZE);
        let b = aggregate(std::slice::from_ref(&p), PitchSpace::PERCENT, GRID_SIZE);
        assert_eq!(a, b);
    }

    #[test]
    fn out_of_range_samples_are_ignored() {
        let p = player_with_history(&[(150.0, 50.0, 0.0), (-3.0, 50.0, 100.0)]);
        assert!(aggregate(&[p], PitchSpace::PERCENT, GRID_SIZE).is_empty());
    }

    #[test]
    fn color_ramp_endpoints_and_midpoints() {
        assert_eq!(heat_color(0.0), (255, 255, 0, 0.8));
        assert_eq!(heat_color(1.0), (255, 0, 0, 1.0));
        let (r, g, b, a) = heat_color(0.3);
        assert_eq!((r, g, b), (255, 165, 0));
        assert!((a - 0.9).abs() < 1e-9);
        // Halfway between the 0.6 and 1.0 stops.
        let (_, g, _, _) = heat_color(0.8);
        assert_eq!(g, 35);
        // Out-of-range input clamps instead of panicking.
        assert_eq!(heat_color(7.0), heat_color(1.0));
        assert_eq!(heat_color(-1.0), heat_color(0.0));
    }

    #[test]
    fn css_formatting() {
        assert_eq!(heat_css(1.0), "rgba(255, 0, 0, 1.000)");
    }
}
