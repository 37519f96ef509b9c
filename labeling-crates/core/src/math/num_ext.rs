//! Rounding divisions used when dividing bounds by (possibly negative) coefficients.

pub(crate) trait NumExt {
    /// Division with rounding up.
    fn div_ceil(self, other: Self) -> Self;

    /// Division with rounding down.
    ///
    /// Note this is different from truncating, which is rounding toward zero.
    fn div_floor(self, other: Self) -> Self;
}

impl NumExt for i64 {
    fn div_ceil(self, other: Self) -> Self {
        let d = self / other;
        let r = self % other;
        if (r > 0 && other > 0) || (r < 0 && other < 0) {
            d + 1
        } else {
            d
        }
    }

    fn div_floor(self, other: Self) -> Self {
        let d = self / other;
        let r = self % other;
        if (r > 0 && other < 0) || (r < 0 && other > 0) {
            d - 1
        } else {
            d
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NumExt;

    #[test]
    fn rounding_follows_the_sign_of_the_quotient() {
        assert_eq!(3, NumExt::div_ceil(7_i64, 3));
        assert_eq!(2, NumExt::div_floor(7_i64, 3));
        assert_eq!(-2, NumExt::div_ceil(-7_i64, 3));
        assert_eq!(-3, NumExt::div_floor(-7_i64, 3));
        assert_eq!(-2, NumExt::div_ceil(7_i64, -3));
        assert_eq!(-3, NumExt::div_floor(7_i64, -3));
        assert_eq!(2, NumExt::div_floor(6_i64, 3));
        assert_eq!(2, NumExt::div_ceil(6_i64, 3));
    }
}
