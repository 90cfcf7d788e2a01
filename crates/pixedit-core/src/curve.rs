//! Dense tone-curve maps built from sparse control points
//!
//! A curve map is a dense function from integer input value to integer
//! output value, defined for every x in `[0, end_x]` where `end_x` is
//! the last control point's x. The parametric curve fit (1000 steps)
//! can skip integer x values, especially near curve extrema, so the map
//! is completed by linear gap-filling between the nearest known
//! samples before use.
//!
//! X values are deliberately not forced into [0, 255]; callers choose
//! control points appropriate to their domain. Output y values are
//! clamped to a caller-supplied `[low, high]` bound.

use crate::error::{Error, Result};

/// Dense curve map: index is the input x, value is the output y.
pub type CurveMap = Vec<i32>;

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

fn end_x_of(points: &[(f32, f32)]) -> Result<usize> {
    if points.len() < 2 {
        return Err(Error::BadCurve(format!(
            "need at least two control points, got {}",
            points.len()
        )));
    }
    let end = points[points.len() - 1].0;
    if end < 0.0 {
        return Err(Error::BadCurve(format!(
            "last control point x must be >= 0, got {end}"
        )));
    }
    Ok(end.round() as usize)
}

/// Build a dense curve map from a Bezier curve.
///
/// Samples the curve at 1000 parametric steps using De Casteljau
/// reduction over the full control polygon, rounding each sample to
/// the nearest integer x and clamping y into `[low, high]`. Any
/// integer x the sweep skipped is filled by [`missing_values`]; the
/// final x is backfilled from its left neighbor when the parametric
/// sweep (which never reaches t = 1) missed it.
///
/// # Errors
///
/// Fewer than two control points is a fatal configuration error
/// ([`Error::BadCurve`]).
pub fn bezier(points: &[(f32, f32)], low: i32, high: i32) -> Result<CurveMap> {
    let end_x = end_x_of(points)?;
    let mut sparse: Vec<Option<i32>> = vec![None; end_x + 1];
    let mut work: Vec<(f32, f32)> = Vec::with_capacity(points.len());

    for i in 0..1000 {
        let t = i as f32 / 1000.0;
        work.clear();
        work.extend_from_slice(points);
        let mut n = work.len();
        while n > 1 {
            for j in 0..n - 1 {
                work[j] = (
                    lerp(work[j].0, work[j + 1].0, t),
                    lerp(work[j].1, work[j + 1].1, t),
                );
            }
            n -= 1;
        }
        let x = work[0].0.round();
        if x >= 0.0 && x as usize <= end_x {
            let y = work[0].1.round().clamp(low as f32, high as f32) as i32;
            sparse[x as usize] = Some(y);
        }
    }

    let missed_end = sparse[end_x].is_none();
    let mut curve = missing_values(&sparse, end_x);
    if missed_end && end_x > 0 {
        curve[end_x] = curve[end_x - 1];
    }
    Ok(curve)
}

/// Build a dense curve map from a piecewise Hermite curve.
///
/// Tangents are the half-differences of the surrounding control
/// points (finite-difference spline). Each segment is sampled once per
/// integer x it spans; skipped x values are gap-filled afterwards.
///
/// # Errors
///
/// Fewer than two control points is a fatal configuration error
/// ([`Error::BadCurve`]).
pub fn hermite(points: &[(f32, f32)], low: i32, high: i32) -> Result<CurveMap> {
    let end_x = end_x_of(points)?;
    let mut sparse: Vec<Option<i32>> = vec![None; end_x + 1];

    for i in 0..points.len() - 1 {
        let p0 = points[i];
        let p1 = points[i + 1];
        let span = p1.0 - p0.0;
        if span <= 0.0 {
            return Err(Error::BadCurve(format!(
                "control point x values must be strictly increasing near x = {}",
                p0.0
            )));
        }
        // The final segment steps to t = 1 inclusive so the curve
        // reaches the last control point.
        let step = if i == points.len() - 2 {
            1.0 / (span - 1.0).max(1.0)
        } else {
            1.0 / span
        };
        let prev = if i > 0 { points[i - 1] } else { p0 };
        let next = if i + 2 < points.len() { points[i + 2] } else { p1 };
        let m0 = ((p1.0 - prev.0) * 0.5, (p1.1 - prev.1) * 0.5);
        let m1 = ((next.0 - p0.0) * 0.5, (next.1 - p0.1) * 0.5);

        for j in 0..=span as i32 {
            let t = j as f32 * step;
            let t2 = t * t;
            let t3 = t2 * t;
            let fac0 = 2.0 * t3 - 3.0 * t2 + 1.0;
            let fac1 = t3 - 2.0 * t2 + t;
            let fac2 = -2.0 * t3 + 3.0 * t2;
            let fac3 = t3 - t2;
            let x = p0.0 * fac0 + m0.0 * fac1 + p1.0 * fac2 + m1.0 * fac3;
            let y = p0.1 * fac0 + m0.1 * fac1 + p1.1 * fac2 + m1.1 * fac3;
            let xr = x.round();
            if xr >= 0.0 && xr as usize <= end_x {
                sparse[xr as usize] = Some(y.round().clamp(low as f32, high as f32) as i32);
            }
        }
    }

    Ok(missing_values(&sparse, end_x))
}

/// Fill undefined entries of a sparse curve map by linear
/// interpolation between the nearest defined left/right neighbors.
///
/// An undefined run at the start takes the first defined value; an
/// undefined run at the end extends the last defined value.
pub fn missing_values(sparse: &[Option<i32>], end_x: usize) -> CurveMap {
    let mut ret = vec![0i32; end_x + 1];
    for i in 0..=end_x {
        if let Some(v) = sparse[i] {
            ret[i] = v;
            continue;
        }
        let right = sparse[i + 1..=end_x]
            .iter()
            .enumerate()
            .find_map(|(j, v)| v.map(|v| (i + 1 + j, v)));
        ret[i] = match (i.checked_sub(1), right) {
            (Some(li), Some((rj, rv))) => {
                let lv = ret[li] as f32;
                (lv + (rv as f32 - lv) / (rj - li) as f32 * (i - li) as f32).round() as i32
            }
            (Some(li), None) => ret[li],
            (None, Some((_, rv))) => rv,
            (None, None) => 0,
        };
    }
    ret
}
