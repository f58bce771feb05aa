/// Candidate-position generator: an Archimedean spiral walked outward from a
/// start point.
///
/// The sequence is deterministic, yields integer pixel positions inside the
/// canvas (out-of-bounds arcs are skipped, not terminated), and signals
/// exhaustion by ending once the spiral radius exceeds the larger canvas
/// dimension. Exhaustion is what triggers shrink-and-retry in the placement
/// engine, so the boundary must be generous enough that every reachable
/// canvas pixel gets visited first.
pub struct SpiralSearch {
    cx: f64,
    cy: f64,
    width: u32,
    height: u32,
    theta: f64,
    max_radius: f64,
    started: bool,
    last: Option<(u32, u32)>,
}

/// Angle advance per step, radians.
const ANGLE_STEP: f64 = 0.35;
/// Radius growth per radian of angle, pixels.
const RADIUS_GAIN: f64 = 1.8;

impl SpiralSearch {
    pub fn new(start: (u32, u32), width: u32, height: u32) -> SpiralSearch {
        SpiralSearch {
            cx: start.0 as f64,
            cy: start.1 as f64,
            width,
            height,
            theta: 0.0,
            max_radius: u32::max(width, height) as f64,
            started: false,
            last: None,
        }
    }
}

impl Iterator for SpiralSearch {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<(u32, u32)> {
        if !self.started {
            self.started = true;
            let start = (self.cx as u32, self.cy as u32);
            if start.0 < self.width && start.1 < self.height {
                self.last = Some(start);
                return Some(start);
            }
        }
        loop {
            self.theta += ANGLE_STEP;
            let radius = RADIUS_GAIN * self.theta;
            if radius > self.max_radius {
                return None;
            }
            let x = self.cx + radius * self.theta.cos();
            let y = self.cy + radius * self.theta.sin();
            if x < 0.0 || y < 0.0 {
                continue;
            }
            let point = (x as u32, y as u32);
            if point.0 >= self.width || point.1 >= self.height {
                continue;
            }
            if self.last == Some(point) {
                continue;
            }
            self.last = Some(point);
            return Some(point);
        }
    }
}
