// wf-core/src/units.rs

use uom::si::f64::{Length as UomLength, Pressure as UomPressure};

// Public canonical unit types (SI, f64)
pub type Length = UomLength;
pub type Pressure = UomPressure;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn psi(v: f64) -> Pressure {
    use uom::si::pressure::pound_force_per_square_inch;
    Pressure::new::<pound_force_per_square_inch>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn ft(v: f64) -> Length {
    use uom::si::length::foot;
    Length::new::<foot>(v)
}

/// Convert a gradient in psi/ft to Pa/m.
#[inline]
pub fn psi_per_ft_to_pa_per_m(v: f64) -> f64 {
    v * psi(1.0).value / ft(1.0).value
}

pub mod constants {
    /// Fresh water hydrostatic gradient, psi/ft.
    pub const FRESH_WATER_PSI_PER_FT: f64 = 0.433;
}
