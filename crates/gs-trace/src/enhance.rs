//! Derived trace columns.

use gs_core::haversine_pairwise;

use crate::{Trace, TraceConfig, TraceError, TraceResult};

/// m/s → km/h.
const MPS_TO_KMH: f64 = 3.6;

/// Computes elapsed time, displacement, and speed columns for a [`Trace`].
///
/// # Example
///
/// ```
/// use gs_trace::{Trace, TraceEnhancer};
///
/// let mut trace = Trace::new(
///     vec![0.0, 1_000.0, 2_000.0],
///     vec![0.0, 0.0, 0.0],
///     vec![0.0, 0.0001, 0.0002],
/// ).unwrap();
/// TraceEnhancer::default().enhance(&mut trace).unwrap();
/// assert_eq!(trace.dt().unwrap(), &[0.0, 1.0, 1.0]);
/// assert!(trace.speed().unwrap()[1] > 39.0); // ~11.1 m in 1 s
/// ```
#[derive(Clone, Debug, Default)]
pub struct TraceEnhancer {
    config: TraceConfig,
}

impl TraceEnhancer {
    pub fn new(config: TraceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    /// Fill `dt`, `dx`, and `speed`, in that order.
    pub fn enhance(&self, trace: &mut Trace) -> TraceResult<()> {
        self.calculate_dt(trace);
        self.calculate_dx(trace)?;
        self.calculate_speed(trace)
    }

    /// `dt[i]` = seconds between sample `i - 1` and sample `i`; `dt[0] = 0`.
    pub fn calculate_dt(&self, trace: &mut Trace) {
        let ts = trace.timestamps();
        let mut dt = Vec::with_capacity(ts.len());
        if !ts.is_empty() {
            dt.push(0.0);
        }
        dt.extend(ts.windows(2).map(|w| (w[1] - w[0]) / self.config.one_second));
        trace.dt = Some(dt);
    }

    /// `dx[i]` = metres between sample `i - 1` and sample `i`; `dx[0] = 0`.
    pub fn calculate_dx(&self, trace: &mut Trace) -> TraceResult<()> {
        let n = trace.len();
        if n < 2 {
            trace.dx = Some(vec![0.0; n]);
            return Ok(());
        }
        let (lats, lons) = (trace.lats(), trace.lons());
        let steps = haversine_pairwise(&lats[..n - 1], &lons[..n - 1], &lats[1..], &lons[1..])?;

        let mut dx = Vec::with_capacity(n);
        dx.push(0.0);
        dx.extend(steps);
        trace.dx = Some(dx);
        Ok(())
    }

    /// `speed[i]` = `dx[i] / dt[i]` in km/h where `dt[i] > 0`, otherwise 0.
    ///
    /// # Errors
    ///
    /// [`TraceError::MissingColumn`] if `dt` or `dx` has not been computed.
    pub fn calculate_speed(&self, trace: &mut Trace) -> TraceResult<()> {
        let dt = trace
            .dt()
            .ok_or_else(|| TraceError::MissingColumn(self.config.dt_col.clone()))?;
        let dx = trace
            .dx()
            .ok_or_else(|| TraceError::MissingColumn(self.config.dx_col.clone()))?;

        let speed = dx
            .iter()
            .zip(dt)
            .map(|(&dx, &dt)| if dt > 0.0 { dx / dt * MPS_TO_KMH } else { 0.0 })
            .collect();
        trace.speed = Some(speed);
        Ok(())
    }

    /// Upper whisker of the speed box plot: `Q3 + 1.5 * (Q3 - Q1)`.
    ///
    /// Speeds above it are implausible for the vehicle and usually come from
    /// GPS jumps.  Quartiles use linear interpolation between closest ranks.
    /// Returns `Ok(None)` for an empty trace.
    ///
    /// # Errors
    ///
    /// [`TraceError::MissingColumn`] if `speed` has not been computed.
    pub fn max_speed(&self, trace: &Trace) -> TraceResult<Option<f64>> {
        let speed = trace
            .speed()
            .ok_or_else(|| TraceError::MissingColumn(self.config.speed_col.clone()))?;

        let mut sorted: Vec<f64> = speed.iter().copied().filter(|v| v.is_finite()).collect();
        if sorted.is_empty() {
            return Ok(None);
        }
        sorted.sort_unstable_by(f64::total_cmp);

        let q1 = quantile_sorted(&sorted, 0.25);
        let q3 = quantile_sorted(&sorted, 0.75);
        Ok(Some(q3 + 1.5 * (q3 - q1)))
    }
}

/// Linear-interpolated quantile of a non-empty ascending slice.
fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}
