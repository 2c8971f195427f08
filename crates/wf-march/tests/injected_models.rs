//! Marching with caller-supplied gradient models.

use wf_core::units::constants::FRESH_WATER_PSI_PER_FT;
use wf_core::units::{ft, psi, psi_per_ft_to_pa_per_m};
use wf_gradient::{GradientError, GradientModel, GradientResult};
use wf_march::{MarchConfig, MarchError, WellSpec, march};

/// Piecewise-linear gradient table, clamped at both ends.
struct TabulatedGradient {
    points: Vec<(f64, f64)>,
}

impl GradientModel for TabulatedGradient {
    fn name(&self) -> &str {
        "tabulated"
    }

    fn gradient(&self, p_avg: f64) -> GradientResult<f64> {
        let (first, last) = match (self.points.first(), self.points.last()) {
            (Some(f), Some(l)) => (*f, *l),
            _ => return Err(GradientError::InvalidArg { what: "empty table" }),
        };
        if p_avg <= first.0 {
            return Ok(first.1);
        }
        for w in self.points.windows(2) {
            let ((p0, g0), (p1, g1)) = (w[0], w[1]);
            if p_avg <= p1 {
                return Ok(g0 + (p_avg - p0) / (p1 - p0) * (g1 - g0));
            }
        }
        Ok(last.1)
    }
}

/// Refuses to evaluate above a pressure limit.
struct Limited;

impl GradientModel for Limited {
    fn gradient(&self, p_avg: f64) -> GradientResult<f64> {
        if p_avg > 1_000.0 {
            Err(GradientError::OutOfRange {
                what: "limited correlation",
                pressure: p_avg,
            })
        } else {
            Ok(0.35)
        }
    }
}

#[test]
fn tabulated_model_marches() {
    let model = TabulatedGradient {
        points: vec![(0.0, 0.10), (1_000.0, 0.30), (3_000.0, 0.40)],
    };
    let spec = WellSpec::new(150.0, 0.0, 8_000.0, 40, 1e-7, 0.1).unwrap();
    let table = march(&spec, &model, &MarchConfig::default()).unwrap();

    assert_eq!(table.len(), 40);
    let pressures = table.pressures();
    for w in pressures.windows(2) {
        assert!(w[1] > w[0]);
    }
    assert!(table.max_consistency_error(&model).unwrap() < spec.tolerance);
}

#[test]
fn boxed_trait_object_model() {
    let model: Box<dyn GradientModel> = Box::new(TabulatedGradient {
        points: vec![(0.0, 0.433)],
    });
    let spec = WellSpec::new(0.5, 0.0, 100.0, 4, 1e-9, 0.433).unwrap();
    let table = march(&spec, model.as_ref(), &MarchConfig::default()).unwrap();
    assert!((table.bottomhole().unwrap().pressure - 43.8).abs() < 1e-9);
}

#[test]
fn model_error_aborts_run_with_segment() {
    // 0.35 psi/ft crosses the 1000 psi limit around 2300 ft.
    let spec = WellSpec::new(200.0, 0.0, 5_000.0, 50, 1e-6, 0.35).unwrap();
    let err = march(&spec, &Limited, &MarchConfig::default()).unwrap_err();
    match err {
        MarchError::Gradient { segment, source } => {
            assert!(segment > 20 && segment < 25, "segment {segment}");
            assert!(matches!(source, GradientError::OutOfRange { .. }));
        }
        other => panic!("expected Gradient error, got {other}"),
    }
}

#[test]
fn si_units_hydrostatic_column() {
    let gradient = psi_per_ft_to_pa_per_m(FRESH_WATER_PSI_PER_FT);
    let spec = WellSpec::from_si(psi(100.0), ft(0.0), ft(1_000.0), 10, 1e-10, gradient).unwrap();
    let model = wf_gradient::FnGradient::new("fresh water", move |_| gradient);
    let table = march(&spec, &model, &MarchConfig::default()).unwrap();

    let bhp_psi = table.bottomhole().unwrap().pressure / psi(1.0).value;
    assert!((bhp_psi - (100.0 + FRESH_WATER_PSI_PER_FT * 1_000.0)).abs() < 1e-6);
}

#[cfg(feature = "serde")]
#[test]
fn spec_and_config_load_from_json() {
    let spec: WellSpec = serde_json::from_str(
        r#"{
            "surface_pressure": 200.0,
            "top_depth": 0.0,
            "bottom_depth": 9700.0,
            "segments": 30,
            "tolerance": 1e-5,
            "seed_gradient": 0.002
        }"#,
    )
    .unwrap();
    assert!(spec.validate().is_ok());

    let config: MarchConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, MarchConfig::default());

    let model = wf_gradient::PolynomialGradient::reference_cubic();
    let table = march(&spec, &model, &config).unwrap();
    let json = serde_json::to_string(&table).unwrap();
    assert!(json.contains("\"rows\""));
}
