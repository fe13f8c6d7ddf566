use std::fmt::Display;
use std::num::NonZeroU32;

use clap::ValueEnum;
use serde::{
    Deserialize,
    Serialize
};

use crate::math::curve::curve::Curve;
use crate::math::interpolation::sampleindexerror::SampleIndexError;

// ─────────────────────────────────────────────
// Partition
// ─────────────────────────────────────────────
//
// [lower, upper] split into n equal subintervals of width h. Node i sits at
// lower + i·h, except node n which is pinned to upper so that the last node
// never drifts past the end of the interval through rounding of n·h.

struct Partition {
    lower: f64,
    upper: f64,
    step: f64,
    count: u32
}

impl Partition {
    fn new(lower: f64, upper: f64, subdivisions: NonZeroU32) -> Partition {
        let count = subdivisions.get();
        Partition {
            lower,
            upper,
            step: (upper - lower) / (count as f64),
            count
        }
    }

    fn node(&self, i: u32) -> f64 {
        if i == self.count {
            self.upper
        } else {
            self.lower + (i as f64) * self.step
        }
    }
}

// ─────────────────────────────────────────────
// Rules
// ─────────────────────────────────────────────

fn left_riemann<C>(partition: &Partition, integrand: &C) -> Result<f64, SampleIndexError> where
    C: Curve + ?Sized {
    let mut sum = 0.0;
    for i in 0..partition.count {
        sum += integrand.value(partition.node(i))?;
    }
    Ok(sum * partition.step)
}

fn mid_riemann<C>(partition: &Partition, integrand: &C) -> Result<f64, SampleIndexError> where
    C: Curve + ?Sized {
    let half = partition.step / 2.0;
    let mut sum = 0.0;
    for i in 0..partition.count {
        sum += integrand.value(partition.node(i) + half)?;
    }
    Ok(sum * partition.step)
}

fn right_riemann<C>(partition: &Partition, integrand: &C) -> Result<f64, SampleIndexError> where
    C: Curve + ?Sized {
    let mut sum = 0.0;
    for i in 1..=partition.count {
        sum += integrand.value(partition.node(i))?;
    }
    Ok(sum * partition.step)
}

fn trapezoidal<C>(partition: &Partition, integrand: &C) -> Result<f64, SampleIndexError> where
    C: Curve + ?Sized {
    let mut sum = (integrand.value(partition.lower)? + integrand.value(partition.upper)?) / 2.0;
    for i in 1..partition.count {
        sum += integrand.value(partition.node(i))?;
    }
    Ok(sum * partition.step)
}

/// Composite Simpson with weights 1, 4, 2, 4, ..., 4, 1.
///
/// The weights only form the textbook rule when the subdivision count is
/// even. An odd count is still evaluated with the same weighting and yields a
/// less accurate value.
fn simpson<C>(partition: &Partition, integrand: &C) -> Result<f64, SampleIndexError> where
    C: Curve + ?Sized {
    let mut sum = 0.0;
    for i in 0..=partition.count {
        let y = integrand.value(partition.node(i))?;
        if i == 0 || i == partition.count {
            sum += y;
        } else if i % 2 == 1 {
            sum += 4.0 * y;
        } else {
            sum += 2.0 * y;
        }
    }
    Ok(partition.step * sum / 3.0)
}

// ─────────────────────────────────────────────
// QuadratureRule
// ─────────────────────────────────────────────

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum QuadratureRule {
    #[default]
    LeftRiemann,
    MidRiemann,
    RightRiemann,
    Trapezoidal,
    #[serde(alias = "simpsons")]
    #[value(alias = "simpsons")]
    Simpson,
}

impl QuadratureRule {
    pub const ALL: [QuadratureRule; 5] = [
        QuadratureRule::LeftRiemann,
        QuadratureRule::MidRiemann,
        QuadratureRule::RightRiemann,
        QuadratureRule::Trapezoidal,
        QuadratureRule::Simpson,
    ];

    /// Approximates the integral of `integrand` over `[lower, upper]` using
    /// `subdivisions` equal subintervals.
    ///
    /// The first point the integrand cannot evaluate aborts the whole
    /// approximation with that error.
    pub fn integrate<C>(&self,
                        lower: f64,
                        upper: f64,
                        subdivisions: NonZeroU32,
                        integrand: &C) -> Result<f64, SampleIndexError> where
        C: Curve + ?Sized {
        let partition = Partition::new(lower, upper, subdivisions);
        match self {
            QuadratureRule::LeftRiemann  => left_riemann(&partition, integrand),
            QuadratureRule::MidRiemann   => mid_riemann(&partition, integrand),
            QuadratureRule::RightRiemann => right_riemann(&partition, integrand),
            QuadratureRule::Trapezoidal  => trapezoidal(&partition, integrand),
            QuadratureRule::Simpson      => simpson(&partition, integrand),
        }
    }

    /// Whether `subdivisions` is a count this rule degrades on.
    pub fn is_degraded_by(&self, subdivisions: NonZeroU32) -> bool {
        *self == QuadratureRule::Simpson && subdivisions.get() % 2 == 1
    }

    pub fn name(&self) -> &'static str {
        match self {
            QuadratureRule::LeftRiemann  => "left-riemann",
            QuadratureRule::MidRiemann   => "mid-riemann",
            QuadratureRule::RightRiemann => "right-riemann",
            QuadratureRule::Trapezoidal  => "trapezoidal",
            QuadratureRule::Simpson      => "simpson",
        }
    }
}

impl Display for QuadratureRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn n(subdivisions: u32) -> NonZeroU32 {
        NonZeroU32::new(subdivisions).unwrap()
    }

    fn simple_curve(x: f64) -> f64 {
        4.0 * x - x * x
    }

    #[test]
    fn left() {
        let calc = QuadratureRule::LeftRiemann.integrate(0.0, 4.0, n(4), &simple_curve).unwrap();

        assert_relative_eq!(calc, 10.0);
    }

    #[test]
    fn mid() {
        let calc = QuadratureRule::MidRiemann.integrate(0.0, 4.0, n(4), &simple_curve).unwrap();

        assert_relative_eq!(calc, 11.0);
    }

    #[test]
    fn right() {
        let calc = QuadratureRule::RightRiemann.integrate(0.0, 4.0, n(4), &simple_curve).unwrap();

        assert_relative_eq!(calc, 10.0);
    }

    #[test]
    fn trap() {
        let calc = QuadratureRule::Trapezoidal.integrate(0.0, 4.0, n(4), &simple_curve).unwrap();

        assert_relative_eq!(calc, 10.0);
    }

    #[test]
    fn simpson_is_exact_for_quadratics() {
        let calc = QuadratureRule::Simpson.integrate(0.0, 4.0, n(4), &simple_curve).unwrap();

        assert_relative_eq!(calc, 32.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn constants_are_exact_for_every_rule() {
        let k = 2.5;
        let constant = |_x: f64| k;

        for rule in QuadratureRule::ALL {
            for subdivisions in [1, 2, 3, 7, 10, 100] {
                if rule.is_degraded_by(n(subdivisions)) {
                    continue;
                }
                let calc = rule.integrate(3.0, 4.0, n(subdivisions), &constant).unwrap();

                assert_relative_eq!(calc, k, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn linear_is_exact_for_trapezoidal_and_simpson() {
        let line = |x: f64| 3.0 * x - 1.0;
        // integral of 3x - 1 over [2, 3]
        let exact = 6.5;

        for subdivisions in [1, 2, 3, 4, 9, 50] {
            let trap = QuadratureRule::Trapezoidal.integrate(2.0, 3.0, n(subdivisions), &line).unwrap();
            let simp = QuadratureRule::Simpson.integrate(2.0, 3.0, n(subdivisions), &line).unwrap();

            assert_relative_eq!(trap, exact, epsilon = 1e-12);
            if subdivisions % 2 == 0 {
                assert_relative_eq!(simp, exact, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn odd_simpson_is_degraded_not_fatal() {
        let calc = QuadratureRule::Simpson.integrate(0.0, 4.0, n(3), &simple_curve);

        assert!(calc.is_ok());
        assert!(QuadratureRule::Simpson.is_degraded_by(n(3)));
        assert!(!QuadratureRule::Simpson.is_degraded_by(n(4)));
        assert!(!QuadratureRule::Trapezoidal.is_degraded_by(n(3)));
    }

    #[test]
    fn last_node_stays_inside_the_table() {
        use crate::math::interpolation::sampletable::SampleTable;

        let table = SampleTable::new(vec![0.0, 1.0, 4.0]).unwrap();

        for rule in QuadratureRule::ALL {
            for subdivisions in [1, 3, 7, 49, 97] {
                assert!(rule.integrate(1.0, 2.0, n(subdivisions), &table).is_ok());
            }
        }
    }

    #[test]
    fn index_errors_propagate() {
        use crate::math::interpolation::sampletable::SampleTable;

        let table = SampleTable::new(vec![0.0, 1.0]).unwrap();

        for rule in QuadratureRule::ALL {
            assert!(rule.integrate(1.0, 2.0, n(4), &table).is_err());
        }
    }

    #[test]
    fn names_match_serialized_form() {
        for rule in QuadratureRule::ALL {
            let json = serde_json::to_value(rule).unwrap();
            assert_eq!(json, rule.name());
            assert_eq!(serde_json::from_value::<QuadratureRule>(json).unwrap(), rule);
            assert_eq!(QuadratureRule::from_str(rule.name(), false).unwrap(), rule);
        }
        assert_eq!(serde_json::from_str::<QuadratureRule>("\"simpsons\"").unwrap(), QuadratureRule::Simpson);
        assert_eq!(QuadratureRule::from_str("simpsons", false).unwrap(), QuadratureRule::Simpson);
        assert!(serde_json::from_str::<QuadratureRule>("\"gauss\"").is_err());
        assert!(QuadratureRule::from_str("gauss", false).is_err());
    }
}
