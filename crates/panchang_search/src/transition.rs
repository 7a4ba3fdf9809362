//! Element boundary search.
//!
//! Every panchang element is a fixed-width segment of an angle that only
//! ever increases with time (elongation, Moon longitude, Sun + Moon, Sun
//! longitude). A boundary is found in two passes:
//!
//! 1. Coarse scan from the start time, accumulating the unwrapped angular
//!    progress `Σ (a_k − a_{k−1}) mod 360` until it covers the distance to
//!    the target. A 360° → 0° wrap is counted as forward motion, never as a
//!    jump back.
//! 2. Bisection of the last step down to the configured tolerance.
//!
//! Both directions return the later end of the final bracket, so a forward
//! search gives the first moment of the next segment and a backward search
//! gives the first moment of the current one.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

use panchang_vedic_base::{Element, normalize_360};

use crate::error::SearchError;

/// One second, in days.
pub const DEFAULT_TOLERANCE_DAYS: f64 = 1.0 / 86_400.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SearchDirection {
    Forward,
    Backward,
}

impl SearchDirection {
    fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }

    /// Angular progress from `from` to `to` when moving in this direction.
    fn progress(self, from: f64, to: f64) -> f64 {
        match self {
            Self::Forward => (to - from).rem_euclid(360.0),
            Self::Backward => (from - to).rem_euclid(360.0),
        }
    }
}

/// Limits for the boundary search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TransitionConfig {
    /// Final bracket width in days. Default: one second.
    pub tolerance_days: f64,
    /// Bisection cap. Default: 100.
    pub max_iterations: u32,
    /// Coarse-scan cap, in steps. Default: 400.
    pub max_scan_steps: u32,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            tolerance_days: DEFAULT_TOLERANCE_DAYS,
            max_iterations: 100,
            max_scan_steps: 400,
        }
    }
}

impl TransitionConfig {
    pub fn validate(&self) -> Result<(), SearchError> {
        if !(self.tolerance_days > 0.0 && self.tolerance_days < 1.0) {
            return Err(SearchError::InvalidConfig(format!(
                "tolerance_days must be in (0, 1), got {}",
                self.tolerance_days
            )));
        }
        if self.max_iterations == 0 {
            return Err(SearchError::InvalidConfig("max_iterations must be > 0".into()));
        }
        if self.max_scan_steps == 0 {
            return Err(SearchError::InvalidConfig("max_scan_steps must be > 0".into()));
        }
        Ok(())
    }
}

/// Coarse scan step for an element, in days.
///
/// About a quarter of the element's mean duration, and one day for the
/// month-long rashi.
pub fn coarse_step_days(element: Element) -> f64 {
    match element {
        Element::Rashi => 1.0,
        _ => 0.25,
    }
}

/// Find when `angle_fn` reaches `target_deg`, scanning from `jd_start`.
///
/// `angle_fn` must increase monotonically (modulo 360) and advance less
/// than 360° per `step_days`. Returns `jd_start` itself when the angle is
/// already exactly on the target.
pub fn find_angle_crossing<F>(
    jd_start: f64,
    angle_fn: F,
    target_deg: f64,
    direction: SearchDirection,
    step_days: f64,
    config: &TransitionConfig,
) -> Result<f64, SearchError>
where
    F: Fn(f64) -> Result<f64, SearchError>,
{
    if !(step_days > 0.0) || !jd_start.is_finite() {
        return Err(SearchError::InvalidInput(format!(
            "step {step_days} from JD {jd_start}"
        )));
    }
    let target = normalize_360(target_deg);
    let a0 = angle_fn(jd_start)?;
    let distance = direction.progress(a0, target);
    if distance == 0.0 {
        return Ok(jd_start);
    }

    let step = direction.sign() * step_days;
    let mut progress = 0.0;
    let mut t_prev = jd_start;
    let mut a_prev = a0;
    let mut bracket = None;
    for _ in 0..config.max_scan_steps {
        let t = t_prev + step;
        let a = angle_fn(t)?;
        let advance = direction.progress(a_prev, a);
        if progress + advance >= distance {
            bracket = Some((t_prev, a_prev, t));
            break;
        }
        progress += advance;
        t_prev = t;
        a_prev = a;
    }
    let Some((t_near, a_near, t_far)) = bracket else {
        let (lo, hi) = ordered(jd_start, t_prev);
        return Err(SearchError::NonConvergence {
            what: "angle crossing",
            lo,
            hi,
        });
    };

    // Remaining angle from the near end of the bracket to the target.
    let remaining = distance - progress;
    // `near` is the scan side that has not crossed yet.
    let mut near = t_near;
    let mut far = t_far;
    for iteration in 0..config.max_iterations {
        if (far - near).abs() <= config.tolerance_days {
            let (_, hi) = ordered(near, far);
            return Ok(hi);
        }
        let mid = 0.5 * (near + far);
        let crossed = match direction {
            SearchDirection::Forward => direction.progress(a_near, angle_fn(mid)?) >= remaining,
            SearchDirection::Backward => direction.progress(a_near, angle_fn(mid)?) > remaining,
        };
        if crossed {
            far = mid;
        } else {
            near = mid;
        }
        trace!(iteration, near, far, "bisection");
    }

    let (lo, hi) = ordered(near, far);
    Err(SearchError::NonConvergence {
        what: "angle crossing",
        lo,
        hi,
    })
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

fn check_index<F>(
    jd_start: f64,
    element: Element,
    angle_fn: &F,
    current_index: u8,
) -> Result<(), SearchError>
where
    F: Fn(f64) -> Result<f64, SearchError>,
{
    let (index, _) = element.locate(angle_fn(jd_start)?);
    if index == current_index {
        Ok(())
    } else {
        Err(SearchError::InvalidInput(format!(
            "{} index at JD {jd_start} is {index}, not {current_index}",
            element.name()
        )))
    }
}

/// End of the element segment `current_index` that contains `jd_start`.
///
/// The returned JD is the first resolved moment at which the index differs
/// from `current_index`.
pub fn find_transition<F>(
    jd_start: f64,
    element: Element,
    angle_fn: F,
    current_index: u8,
    config: &TransitionConfig,
) -> Result<f64, SearchError>
where
    F: Fn(f64) -> Result<f64, SearchError>,
{
    check_index(jd_start, element, &angle_fn, current_index)?;
    let target = f64::from(current_index) * element.span_deg();
    find_angle_crossing(
        jd_start,
        angle_fn,
        target,
        SearchDirection::Forward,
        coarse_step_days(element),
        config,
    )
    .map_err(|e| e.labelled(element.name()))
}

/// Start of the element segment `current_index` that contains `jd_start`.
pub fn find_element_start<F>(
    jd_start: f64,
    element: Element,
    angle_fn: F,
    current_index: u8,
    config: &TransitionConfig,
) -> Result<f64, SearchError>
where
    F: Fn(f64) -> Result<f64, SearchError>,
{
    check_index(jd_start, element, &angle_fn, current_index)?;
    let target = f64::from(current_index - 1) * element.span_deg();
    find_angle_crossing(
        jd_start,
        angle_fn,
        target,
        SearchDirection::Backward,
        coarse_step_days(element),
        config,
    )
    .map_err(|e| e.labelled(element.name()))
}
