//! Centripetal Catmull-Rom curve through a fixed list of control points.
//!
//! Queries come in two flavours: `point`/`tangent` take the raw spline
//! parameter, `point_at`/`tangent_at` take a fraction of the total arc length
//! so that equal steps in progress cover equal distances on the ground.

use anyhow::{bail, Result};
use glam::DVec3;

/// Number of samples in the cumulative arc length table
pub const ARC_LENGTH_DIVISIONS: usize = 200;

const TANGENT_DELTA: f64 = 1e-4;
const MIN_KNOT_SPACING: f64 = 1e-4;

#[derive(Debug, Clone)]
pub struct CatmullRomCurve {
    points: Vec<DVec3>,
    arc_lengths: Vec<f64>,
}

impl CatmullRomCurve {
    pub fn new(points: Vec<DVec3>) -> Result<Self> {
        if points.len() < 2 {
            bail!("a curve needs at least 2 control points, got {}", points.len());
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            bail!("control point {} is not finite: {:?}", index, points[index]);
        }

        let mut curve = Self {
            points,
            arc_lengths: Vec::new(),
        };
        curve.arc_lengths = curve.sample_arc_lengths();
        Ok(curve)
    }

    pub fn from_arrays(points: &[[f64; 3]]) -> Result<Self> {
        Self::new(points.iter().copied().map(DVec3::from_array).collect())
    }

    pub fn control_points(&self) -> &[DVec3] {
        &self.points
    }

    /// Approximate total arc length
    pub fn length(&self) -> f64 {
        self.arc_lengths[ARC_LENGTH_DIVISIONS]
    }

    /// Position at raw spline parameter `t` in [0, 1]
    pub fn point(&self, t: f64) -> DVec3 {
        let last = self.points.len() - 1;
        let scaled = last as f64 * t.clamp(0.0, 1.0);

        let mut index = scaled.floor() as usize;
        let mut weight = scaled - index as f64;
        if index >= last {
            index = last - 1;
            weight = 1.0;
        }

        // Control points are hit exactly
        if weight == 0.0 {
            return self.points[index];
        }
        if weight == 1.0 {
            return self.points[index + 1];
        }

        let p1 = self.points[index];
        let p2 = self.points[index + 1];
        let p0 = if index > 0 {
            self.points[index - 1]
        } else {
            p1 * 2.0 - p2
        };
        let p3 = if index + 2 <= last {
            self.points[index + 2]
        } else {
            p2 * 2.0 - p1
        };

        centripetal_segment(p0, p1, p2, p3, weight)
    }

    /// Unit direction of travel at raw spline parameter `t`
    pub fn tangent(&self, t: f64) -> DVec3 {
        let t1 = (t - TANGENT_DELTA).max(0.0);
        let t2 = (t + TANGENT_DELTA).min(1.0);

        (self.point(t2) - self.point(t1))
            .try_normalize()
            .or_else(|| (self.points[self.points.len() - 1] - self.points[0]).try_normalize())
            .unwrap_or(DVec3::Z)
    }

    /// Position at fraction `u` of the arc length
    pub fn point_at(&self, u: f64) -> DVec3 {
        self.point(self.arc_to_parameter(u))
    }

    /// Direction of travel at fraction `u` of the arc length
    pub fn tangent_at(&self, u: f64) -> DVec3 {
        self.tangent(self.arc_to_parameter(u))
    }

    /// Maps an arc length fraction onto the raw spline parameter.
    pub fn arc_to_parameter(&self, u: f64) -> f64 {
        let u = u.clamp(0.0, 1.0);
        let total = self.length();
        if total <= f64::EPSILON {
            return u;
        }

        let target = u * total;
        let index = self
            .arc_lengths
            .partition_point(|&length| length <= target)
            .saturating_sub(1);
        if index >= ARC_LENGTH_DIVISIONS {
            return 1.0;
        }

        let before = self.arc_lengths[index];
        let span = self.arc_lengths[index + 1] - before;
        let fraction = if span > 0.0 {
            (target - before) / span
        } else {
            0.0
        };

        (index as f64 + fraction) / ARC_LENGTH_DIVISIONS as f64
    }

    fn sample_arc_lengths(&self) -> Vec<f64> {
        let mut lengths = Vec::with_capacity(ARC_LENGTH_DIVISIONS + 1);
        let mut last = self.point(0.0);
        let mut sum = 0.0;
        lengths.push(sum);

        for step in 1..=ARC_LENGTH_DIVISIONS {
            let current = self.point(step as f64 / ARC_LENGTH_DIVISIONS as f64);
            sum += current.distance(last);
            lengths.push(sum);
            last = current;
        }

        lengths
    }
}

/// Non-uniform Catmull-Rom between `p1` and `p2` with knot spacing `|d|^0.5`
fn centripetal_segment(p0: DVec3, p1: DVec3, p2: DVec3, p3: DVec3, t: f64) -> DVec3 {
    let mut dt0 = p0.distance_squared(p1).powf(0.25);
    let mut dt1 = p1.distance_squared(p2).powf(0.25);
    let mut dt2 = p2.distance_squared(p3).powf(0.25);

    if dt1 < MIN_KNOT_SPACING {
        dt1 = 1.0;
    }
    if dt0 < MIN_KNOT_SPACING {
        dt0 = dt1;
    }
    if dt2 < MIN_KNOT_SPACING {
        dt2 = dt1;
    }

    let m1 = ((p1 - p0) / dt0 - (p2 - p0) / (dt0 + dt1) + (p2 - p1) / dt1) * dt1;
    let m2 = ((p2 - p1) / dt1 - (p3 - p1) / (dt1 + dt2) + (p3 - p2) / dt2) * dt1;

    hermite(p1, p2, m1, m2, t)
}

fn hermite(x0: DVec3, x1: DVec3, m0: DVec3, m1: DVec3, t: f64) -> DVec3 {
    let c2 = x0 * -3.0 + x1 * 3.0 - m0 * 2.0 - m1;
    let c3 = x0 * 2.0 - x1 * 2.0 + m0 + m1;
    let t2 = t * t;
    x0 + m0 * t + c2 * t2 + c3 * (t2 * t)
}
