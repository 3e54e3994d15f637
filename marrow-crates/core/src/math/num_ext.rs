//! Rounding division for the signed arithmetic of affine views.

pub(crate) trait NumExt {
    /// Division rounding towards positive infinity.
    fn ceil_div(self, other: Self) -> Self;

    /// Division rounding towards negative infinity.
    ///
    /// Note this is different from truncating, which is rounding toward zero.
    fn floor_div(self, other: Self) -> Self;
}

impl NumExt for i32 {
    fn ceil_div(self, other: Self) -> Self {
        let quotient = self / other;
        let remainder = self % other;
        if (remainder > 0 && other > 0) || (remainder < 0 && other < 0) {
            quotient + 1
        } else {
            quotient
        }
    }

    fn floor_div(self, other: Self) -> Self {
        let quotient = self / other;
        let remainder = self % other;
        if (remainder > 0 && other < 0) || (remainder < 0 && other > 0) {
            quotient - 1
        } else {
            quotient
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_follows_the_sign_of_the_quotient() {
        assert_eq!(3, 7.ceil_div(3));
        assert_eq!(2, 7.floor_div(3));
        assert_eq!(-2, (-7).ceil_div(3));
        assert_eq!(-3, (-7).floor_div(3));
        assert_eq!(-2, 7.ceil_div(-3));
        assert_eq!(-3, 7.floor_div(-3));
        assert_eq!(4, 8.ceil_div(2));
        assert_eq!(4, 8.floor_div(2));
    }
}
