//! Per-segment results and profile queries.

use crate::error::{MarchError, MarchResult};
use wf_core::Real;
use wf_gradient::GradientModel;

/// Converged state of one segment, recorded at its lower depth.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentResult {
    /// 1-based segment index
    pub segment: usize,
    /// Depth at the lower end of the segment
    pub depth: Real,
    /// Converged outlet pressure
    pub pressure: Real,
    /// Average pressure the converged gradient was evaluated at
    pub avg_pressure: Real,
    /// Converged gradient
    pub gradient: Real,
    /// Fixed-point iterations used
    pub iterations: usize,
}

/// Ordered profile produced by a marching run.
///
/// Rows are in depth order and are only ever appended by the marcher.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResultTable {
    top_depth: Real,
    surface_pressure: Real,
    rows: Vec<SegmentResult>,
}

impl ResultTable {
    pub(crate) fn with_capacity(top_depth: Real, surface_pressure: Real, capacity: usize) -> Self {
        Self {
            top_depth,
            surface_pressure,
            rows: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, row: SegmentResult) {
        debug_assert!(self.rows.last().is_none_or(|prev| prev.depth < row.depth));
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[SegmentResult] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SegmentResult> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn top_depth(&self) -> Real {
        self.top_depth
    }

    pub fn surface_pressure(&self) -> Real {
        self.surface_pressure
    }

    /// Deepest row.
    pub fn bottomhole(&self) -> Option<&SegmentResult> {
        self.rows.last()
    }

    pub fn depths(&self) -> Vec<Real> {
        self.rows.iter().map(|r| r.depth).collect()
    }

    pub fn pressures(&self) -> Vec<Real> {
        self.rows.iter().map(|r| r.pressure).collect()
    }

    pub fn total_iterations(&self) -> usize {
        self.rows.iter().map(|r| r.iterations).sum()
    }

    /// Pressure at the top of segment `row` (0-based row index).
    pub fn inlet_pressure(&self, row: usize) -> Option<Real> {
        if row >= self.rows.len() {
            return None;
        }
        match row {
            0 => Some(self.surface_pressure),
            _ => Some(self.rows[row - 1].pressure),
        }
    }

    /// Depth at the top of segment `row` (0-based row index).
    pub fn inlet_depth(&self, row: usize) -> Option<Real> {
        if row >= self.rows.len() {
            return None;
        }
        match row {
            0 => Some(self.top_depth),
            _ => Some(self.rows[row - 1].depth),
        }
    }

    /// Pressure at an arbitrary depth, linear between grid points.
    pub fn pressure_at(&self, depth: Real) -> MarchResult<Real> {
        let bottom = self.bottomhole().map_or(self.top_depth, |r| r.depth);
        if !(depth >= self.top_depth && depth <= bottom) {
            return Err(MarchError::DepthOutOfRange {
                depth,
                top: self.top_depth,
                bottom,
            });
        }

        let mut upper = (self.top_depth, self.surface_pressure);
        for row in &self.rows {
            if depth <= row.depth {
                let frac = (depth - upper.0) / (row.depth - upper.0);
                return Ok(upper.1 + frac * (row.pressure - upper.1));
            }
            upper = (row.depth, row.pressure);
        }
        Ok(upper.1)
    }

    /// Largest relative self-consistency error over all rows.
    ///
    /// For each row the gradient is re-evaluated at the midpoint of its stored
    /// inlet and outlet pressures, and the resulting outlet pressure compared
    /// against the stored one. A converged table stays below its tolerance.
    pub fn max_consistency_error<M>(&self, model: &M) -> MarchResult<Real>
    where
        M: GradientModel + ?Sized,
    {
        let mut worst: Real = 0.0;
        let mut p_in = self.surface_pressure;
        let mut z_in = self.top_depth;
        for row in &self.rows {
            let p_avg = 0.5 * (p_in + row.pressure);
            let dp_dz = model
                .checked_gradient(p_avg)
                .map_err(|source| MarchError::Gradient {
                    segment: row.segment,
                    source,
                })?;
            let p_check = p_in + dp_dz * (row.depth - z_in);
            worst = worst.max(((row.pressure - p_check) / row.pressure).abs());
            p_in = row.pressure;
            z_in = row.depth;
        }
        Ok(worst)
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = &'a SegmentResult;
    type IntoIter = std::slice::Iter<'a, SegmentResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wf_gradient::FnGradient;

    fn row(segment: usize, depth: f64, pressure: f64) -> SegmentResult {
        SegmentResult {
            segment,
            depth,
            pressure,
            avg_pressure: pressure,
            gradient: 0.5,
            iterations: 2,
        }
    }

    fn sample() -> ResultTable {
        let mut table = ResultTable::with_capacity(0.0, 100.0, 2);
        table.push(row(1, 100.0, 150.0));
        table.push(row(2, 200.0, 200.0));
        table
    }

    #[test]
    fn accessors() {
        let table = sample();
        assert_eq!(table.len(), 2);
        assert_eq!(table.depths(), vec![100.0, 200.0]);
        assert_eq!(table.pressures(), vec![150.0, 200.0]);
        assert_eq!(table.total_iterations(), 4);
        assert_eq!(table.bottomhole().map(|r| r.pressure), Some(200.0));
        assert_eq!(table.iter().count(), 2);
        assert_eq!((&table).into_iter().count(), 2);
    }

    #[test]
    fn inlet_chain() {
        let table = sample();
        assert_eq!(table.inlet_pressure(0), Some(100.0));
        assert_eq!(table.inlet_pressure(1), Some(150.0));
        assert_eq!(table.inlet_pressure(2), None);
        assert_eq!(table.inlet_depth(1), Some(100.0));
    }

    #[test]
    fn interpolation() {
        let table = sample();
        assert_eq!(table.pressure_at(0.0).unwrap(), 100.0);
        assert_eq!(table.pressure_at(50.0).unwrap(), 125.0);
        assert_eq!(table.pressure_at(150.0).unwrap(), 175.0);
        assert_eq!(table.pressure_at(200.0).unwrap(), 200.0);
        assert!(matches!(
            table.pressure_at(200.1),
            Err(MarchError::DepthOutOfRange { .. })
        ));
        assert!(table.pressure_at(-1.0).is_err());
        assert!(table.pressure_at(f64::NAN).is_err());
    }

    #[test]
    fn consistency_of_exact_rows_is_zero() {
        let table = sample();
        let model = FnGradient::new("const", |_| 0.5);
        assert_eq!(table.max_consistency_error(&model).unwrap(), 0.0);

        let off = FnGradient::new("const", |_| 0.6);
        assert!(table.max_consistency_error(&off).unwrap() > 0.05);
    }

    #[test]
    fn empty_table() {
        let table = ResultTable::with_capacity(0.0, 100.0, 0);
        assert!(table.is_empty());
        assert_eq!(table.inlet_pressure(0), None);
        assert_eq!(table.pressure_at(0.0).unwrap(), 100.0);
    }
}
