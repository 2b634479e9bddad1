// File: crates/colorline-core/src/grid.rs
// Summary: Tick layout helpers ("nice" steps of 1, 2, 5 or 10 times a power of ten).

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Round half towards positive infinity.
#[inline]
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Integer tick bounds and increment for an ascending `[start, stop]`.
///
/// A negative increment `-k` means ticks are `i / k`, which keeps
/// sub-unit steps exact (0.1 is `1 / 10`, not `1 * 0.1`).
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 { 10.0 } else if error >= E5 { 5.0 } else if error >= E2 { 2.0 } else { 1.0 };

    let (i1, i2, inc) = if power < 0.0 {
        let k = 10f64.powf(-power) / factor;
        let mut i1 = round_half_up(start * k);
        let mut i2 = round_half_up(stop * k);
        if i1 / k < start { i1 += 1.0; }
        if i2 / k > stop { i2 -= 1.0; }
        (i1, i2, -k)
    } else {
        let k = 10f64.powf(power) * factor;
        let mut i1 = round_half_up(start / k);
        let mut i2 = round_half_up(stop / k);
        if i1 * k < start { i1 += 1.0; }
        if i2 * k > stop { i2 -= 1.0; }
        (i1, i2, k)
    };
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Roughly `count` evenly spaced round values inside `[start, stop]`.
///
/// Order follows the direction of the interval. Equal bounds give one tick;
/// `count == 0` gives none.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || start.is_nan() || stop.is_nan() { return Vec::new(); }
    if start == stop { return vec![start]; }

    let reverse = stop < start;
    let (i1, i2, inc) = if reverse {
        tick_spec(stop, start, count as f64)
    } else {
        tick_spec(start, stop, count as f64)
    };
    if !(i2 >= i1) || !(i2 - i1).is_finite() { return Vec::new(); }

    let n = (i2 - i1) as usize + 1;
    let at = |i: f64| if inc < 0.0 { i / -inc } else { i * inc };
    if reverse {
        (0..n).map(|i| at(i2 - i as f64)).collect()
    } else {
        (0..n).map(|i| at(i1 + i as f64)).collect()
    }
}

/// Signed distance between adjacent ticks for the same arguments as [`ticks`].
/// Zero or non-finite for degenerate intervals.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let reverse = stop < start;
    let (_, _, inc) = if reverse {
        tick_spec(stop, start, count as f64)
    } else {
        tick_spec(start, stop, count as f64)
    };
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reverse { -step } else { step }
}
