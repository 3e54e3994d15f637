//! Leveled assertions. Simple assertions are cheap and always on; moderate assertions re-run
//! propagation from scratch or scan whole domains and are only enabled in tests or with the
//! `debug-checks` feature.

#[cfg(any(test, feature = "debug-checks"))]
pub(crate) const MARROW_ASSERT_LEVEL_DEFINITION: u8 = MARROW_ASSERT_MODERATE;
#[cfg(not(any(test, feature = "debug-checks")))]
pub(crate) const MARROW_ASSERT_LEVEL_DEFINITION: u8 = MARROW_ASSERT_SIMPLE;

pub(crate) const MARROW_ASSERT_SIMPLE: u8 = 1;
pub(crate) const MARROW_ASSERT_MODERATE: u8 = 2;

macro_rules! marrow_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::MARROW_ASSERT_LEVEL_DEFINITION >= $crate::asserts::MARROW_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

macro_rules! marrow_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::MARROW_ASSERT_LEVEL_DEFINITION >= $crate::asserts::MARROW_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

pub(crate) use marrow_assert_moderate;
pub(crate) use marrow_assert_simple;
