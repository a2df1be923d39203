//! contour.rs — iso-line extraction for the PES figure.
//!
//! Levels are geometrically spaced over the energy range so the contours
//! crowd around the well floor, and each level is traced over the grid one
//! cell at a time (marching squares, linear interpolation along cell edges).

/// One straight piece of an iso-line, in data coordinates.
pub type Segment = ((f64, f64), (f64, f64));

/// `n` contour levels spanning `[lo, hi]`, geometrically spaced: the i-th
/// level is `lo - 1 + (hi - lo + 1)^(i/(n-1))`.
pub fn contour_levels(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    let span = hi - lo;
    if n < 2 || !span.is_finite() || span <= 0.0 {
        return Vec::new();
    }
    let top = span + 1.0;
    (0..n)
        .map(|i| lo - 1.0 + top.powf(i as f64 / (n - 1) as f64))
        .collect()
}

/// Trace the `level` iso-line over the grid. `values[row][col]` pairs
/// `q2[row]` with `q1[col]`.
pub fn iso_segments(q1: &[f64], q2: &[f64], values: &[Vec<f64>], level: f64) -> Vec<Segment> {
    let mut segments = Vec::new();
    if q1.len() < 2 || q2.len() < 2 {
        return segments;
    }

    for r in 0..q2.len() - 1 {
        for c in 0..q1.len() - 1 {
            let v00 = values[r][c];
            let v10 = values[r][c + 1];
            let v11 = values[r + 1][c + 1];
            let v01 = values[r + 1][c];

            let mut mask = 0u8;
            if v00 >= level {
                mask |= 1;
            }
            if v10 >= level {
                mask |= 2;
            }
            if v11 >= level {
                mask |= 4;
            }
            if v01 >= level {
                mask |= 8;
            }
            if mask == 0 || mask == 0b1111 {
                continue;
            }

            let (x0, x1) = (q1[c], q1[c + 1]);
            let (y0, y1) = (q2[r], q2[r + 1]);
            let bottom = || (cross(x0, v00, x1, v10, level), y0);
            let top = || (cross(x0, v01, x1, v11, level), y1);
            let left = || (x0, cross(y0, v00, y1, v01, level));
            let right = || (x1, cross(y0, v10, y1, v11, level));

            match mask {
                0b0001 | 0b1110 => segments.push((left(), bottom())),
                0b0010 | 0b1101 => segments.push((bottom(), right())),
                0b0100 | 0b1011 => segments.push((right(), top())),
                0b1000 | 0b0111 => segments.push((top(), left())),
                0b0011 | 0b1100 => segments.push((left(), right())),
                0b0110 | 0b1001 => segments.push((bottom(), top())),
                0b0101 => {
                    // Saddle cell; the cell mean decides which diagonal
                    // pair of corners stays connected.
                    if (v00 + v10 + v11 + v01) * 0.25 >= level {
                        segments.push((bottom(), right()));
                        segments.push((top(), left()));
                    } else {
                        segments.push((left(), bottom()));
                        segments.push((right(), top()));
                    }
                }
                0b1010 => {
                    if (v00 + v10 + v11 + v01) * 0.25 >= level {
                        segments.push((left(), bottom()));
                        segments.push((right(), top()));
                    } else {
                        segments.push((bottom(), right()));
                        segments.push((top(), left()));
                    }
                }
                _ => unreachable!(),
            }
        }
    }
    segments
}

/// Position along `[a, b]` where the value crosses `level`.
fn cross(a: f64, va: f64, b: f64, vb: f64, level: f64) -> f64 {
    let dv = vb - va;
    if dv.abs() < f64::EPSILON {
        return 0.5 * (a + b);
    }
    let t = ((level - va) / dv).clamp(0.0, 1.0);
    a + t * (b - a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_span_the_range_and_increase() {
        let levels = contour_levels(-4.0, 16.0, 10);
        assert_eq!(levels.len(), 10);
        assert!((levels[0] - -4.0).abs() < 1e-12);
        assert!((levels[9] - 16.0).abs() < 1e-9);
        assert!(levels.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn degenerate_range_yields_no_levels() {
        assert!(contour_levels(2.0, 2.0, 10).is_empty());
    }

    #[test]
    fn plane_crossing_traces_a_vertical_line() {
        // v = q1, independent of q2: the level-1 contour is the q1 = 1 line.
        let q1 = [0.0, 1.0, 2.0];
        let q2 = [0.0, 1.0, 2.0];
        let values: Vec<Vec<f64>> = q2.iter().map(|_| q1.to_vec()).collect();

        let segments = iso_segments(&q1, &q2, &values, 1.0);
        assert_eq!(segments.len(), 2);
        for ((ax, _), (bx, _)) in segments {
            assert!((ax - 1.0).abs() < 1e-12);
            assert!((bx - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn flat_grid_has_no_segments() {
        let q1 = [0.0, 1.0];
        let q2 = [0.0, 1.0];
        let values = vec![vec![3.0, 3.0], vec![3.0, 3.0]];
        assert!(iso_segments(&q1, &q2, &values, 5.0).is_empty());
    }
}
