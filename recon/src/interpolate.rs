use num_bigint::BigInt;
use num_traits::One;
use thiserror::Error;

use crate::fraction::Fraction;
use crate::share::Point;

/// Fatal arithmetic failures: the share set itself is inconsistent, so no
/// best-effort secret is ever produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpolationError {
    #[error("duplicate x-coordinate {x} among interpolation points")]
    DuplicatePoint { x: BigInt },
    #[error("secret is not an integer (residual fraction {num}/{den}); share set is corrupted or mixed")]
    NonIntegerResult { num: BigInt, den: BigInt },
}

/// Evaluates the degree-(k-1) polynomial through `points` at x = 0 and
/// returns its constant term.
///
/// Classic Lagrange form, with every basis term `y_i * l_i(0)` carried as an
/// exact fraction:
///
/// ```text
/// l_i(0) = prod_{j != i} (-x_j) / (x_i - x_j)
/// ```
///
/// Terms are folded into a running [Fraction] that is reduced after each
/// fold. A genuine share set leaves denominator 1; anything else is reported
/// as [InterpolationError::NonIntegerResult]. With a single point the inner
/// products are empty and the share value itself comes back unchanged.
pub fn interpolate_at_zero(points: &[Point]) -> Result<BigInt, InterpolationError> {
    let mut acc = Fraction::zero();

    for (i, pi) in points.iter().enumerate() {
        let mut num = pi.y.clone();
        let mut den = BigInt::one();
        for (j, pj) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            if pi.x == pj.x {
                return Err(InterpolationError::DuplicatePoint { x: pi.x.clone() });
            }
            num *= -&pj.x;
            den *= &pi.x - &pj.x;
        }
        acc = acc.add_term(num, den);
    }

    let (num, den) = acc.into_parts();
    if den.is_one() {
        Ok(num)
    } else {
        Err(InterpolationError::NonIntegerResult { num, den })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::{BigInt, RandBigInt};
    use rand::thread_rng;
    use std::str::FromStr;

    fn points(pairs: &[(i64, i64)]) -> Vec<Point> {
        pairs
            .iter()
            .map(|&(x, y)| Point::new(BigInt::from(x), BigInt::from(y)))
            .collect()
    }

    /// Plain polynomial evaluation, the independent oracle for the tests.
    fn eval(coeffs: &[BigInt], x: &BigInt) -> BigInt {
        let mut acc = BigInt::from(0);
        for c in coeffs.iter().rev() {
            acc = acc * x + c;
        }
        acc
    }

    #[test]
    fn recovers_quadratic_constant_term() {
        // y = x^2 + 3 sampled at x = 1, 2, 3
        let pts = points(&[(1, 4), (2, 7), (3, 12)]);
        assert_eq!(interpolate_at_zero(&pts).unwrap(), BigInt::from(3));
    }

    #[test]
    fn single_point_is_the_secret() {
        let pts = points(&[(5, 42)]);
        assert_eq!(interpolate_at_zero(&pts).unwrap(), BigInt::from(42));
    }

    #[test]
    fn handles_negative_coefficients() {
        // y = 2x^2 - 7x - 11
        let coeffs: Vec<BigInt> = [-11, -7, 2].iter().map(|&c| BigInt::from(c)).collect();
        let pts: Vec<Point> = (1..=3)
            .map(|x| {
                let x = BigInt::from(x);
                Point::new(x.clone(), eval(&coeffs, &x))
            })
            .collect();
        assert_eq!(interpolate_at_zero(&pts).unwrap(), BigInt::from(-11));
    }

    #[test]
    fn exact_for_values_past_machine_precision() {
        let secret = BigInt::from_str("987654321098765432109876543210987654321098765432109").unwrap();
        let coeffs = vec![secret.clone(), BigInt::from(17), BigInt::from(23), BigInt::from(5)];
        let pts: Vec<Point> = [2i64, 4, 9, 13]
            .iter()
            .map(|&x| {
                let x = BigInt::from(x);
                Point::new(x.clone(), eval(&coeffs, &x))
            })
            .collect();
        assert_eq!(interpolate_at_zero(&pts).unwrap(), secret);
    }

    #[test]
    fn any_threshold_subset_agrees() {
        let mut rng = thread_rng();
        let high: BigInt = BigInt::one() << 256usize;
        let low = -high.clone();
        let coeffs: Vec<BigInt> = (0..4).map(|_| rng.gen_bigint_range(&low, &high)).collect();

        let all: Vec<Point> = (1..=8i64)
            .map(|x| {
                let x = BigInt::from(x);
                Point::new(x.clone(), eval(&coeffs, &x))
            })
            .collect();

        for subset in [[0usize, 1, 2, 3], [4, 5, 6, 7], [0, 2, 5, 7], [1, 3, 4, 6]] {
            let pts: Vec<Point> = subset.iter().map(|&i| all[i].clone()).collect();
            assert_eq!(interpolate_at_zero(&pts).unwrap(), coeffs[0]);
        }
    }

    #[test]
    fn duplicate_x_is_rejected() {
        let pts = points(&[(1, 4), (2, 7), (2, 9)]);
        assert_eq!(
            interpolate_at_zero(&pts),
            Err(InterpolationError::DuplicatePoint { x: BigInt::from(2) })
        );
    }

    #[test]
    fn inconsistent_shares_surface_as_non_integer() {
        // no quadratic with an integer constant term passes through these
        let pts = points(&[(1, 0), (2, 0), (4, 1)]);
        assert_eq!(
            interpolate_at_zero(&pts),
            Err(InterpolationError::NonIntegerResult {
                num: BigInt::from(1),
                den: BigInt::from(3),
            })
        );
    }
}
