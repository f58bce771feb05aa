/// Sampled anchors of the "twilight" colormap, evenly spaced over [0, 1].
///
/// Cyclic: light grey through blue to near-black, back up through red to
/// light grey. Intermediate values are linearly interpolated.
const TWILIGHT: [[u8; 3]; 13] = [
    [226, 217, 226],
    [181, 201, 216],
    [133, 175, 207],
    [103, 137, 198],
    [94, 92, 176],
    [78, 49, 128],
    [47, 20, 54],
    [99, 31, 57],
    [145, 54, 66],
    [181, 93, 86],
    [203, 139, 124],
    [219, 183, 180],
    [226, 217, 226],
];

/// Sample the twilight colormap at `t` in [0, 1]; values outside are clamped.
pub fn twilight(t: f64) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    let scaled = t * (TWILIGHT.len() - 1) as f64;
    let i = (scaled.floor() as usize).min(TWILIGHT.len() - 2);
    let frac = scaled - i as f64;
    let lo = TWILIGHT[i];
    let hi = TWILIGHT[i + 1];
    let mut out = [0u8; 3];
    for c in 0..3 {
        let v = lo[c] as f64 + (hi[c] as f64 - lo[c] as f64) * frac;
        out[c] = v.round() as u8;
    }
    out
}
