use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Exact rational accumulator for interpolation.
///
/// Always kept in lowest terms with a positive denominator; without the
/// reduction after every fold the numerator and denominator magnitudes grow
/// roughly with k! over ill-conditioned point sets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Fraction {
    num: BigInt,
    den: BigInt,
}

impl Fraction {
    pub(crate) fn zero() -> Self {
        Fraction { num: BigInt::zero(), den: BigInt::one() }
    }

    /// Builds `num/den` in canonical form: lowest terms, `den > 0`.
    /// `den` must be nonzero.
    fn reduced(num: BigInt, den: BigInt) -> Self {
        debug_assert!(!den.is_zero());
        let g = num.gcd(&den);
        let (mut num, mut den) = if g.is_one() { (num, den) } else { (num / &g, den / &g) };
        if den.is_negative() {
            num = -num;
            den = -den;
        }
        Fraction { num, den }
    }

    /// Folds `num/den` into the accumulator: (a/b) + (c/d) = (ad + cb)/(bd),
    /// reduced immediately.
    pub(crate) fn add_term(self, num: BigInt, den: BigInt) -> Self {
        Self::reduced(self.num * &den + num * &self.den, self.den * den)
    }

    /// Tears the fraction apart. The pair is canonical, so a denominator of
    /// one means the value is an integer.
    pub(crate) fn into_parts(self) -> (BigInt, BigInt) {
        (self.num, self.den)
    }
}
