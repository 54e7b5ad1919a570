use crate::element::Element;

/// A lane-wise comparison. Floats compare with IEEE semantics, so every comparison
/// involving NaN is false except `!=`.
pub trait CompareOp<T: Element> {
    const SYMBOL: &'static str;

    fn test(lhs: T, rhs: T) -> bool;
}

macro_rules! compare_tags {
    ($($tag:ident => $symbol:literal, $op:tt;)*) => {$(
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $tag;

        impl<T: Element> CompareOp<T> for $tag {
            const SYMBOL: &'static str = $symbol;

            #[inline(always)]
            fn test(lhs: T, rhs: T) -> bool {
                lhs $op rhs
            }
        }
    )*};
}

compare_tags! {
    Equal => "==", ==;
    NotEqual => "!=", !=;
    Less => "<", <;
    LessEqual => "<=", <=;
    Greater => ">", >;
    GreaterEqual => ">=", >=;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_only_satisfies_not_equal() {
        let nan = f32::NAN;
        assert!(!Equal::test(nan, nan));
        assert!(NotEqual::test(nan, nan));
        assert!(!Less::test(nan, 1.0));
        assert!(!LessEqual::test(nan, 1.0));
        assert!(!Greater::test(nan, 1.0));
        assert!(!GreaterEqual::test(nan, 1.0));
    }

    #[test]
    fn test_signed_zeros_compare_equal() {
        assert!(Equal::test(0.0f64, -0.0));
        assert!(!Less::test(-0.0f64, 0.0));
    }

    #[test]
    fn test_integer_ordering() {
        assert!(Less::test(-1i8, 0));
        assert!(GreaterEqual::test(3u64, 3));
        assert!(!Greater::test(3u64, 3));
    }
}
