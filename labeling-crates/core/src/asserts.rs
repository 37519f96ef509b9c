//! Assertion macros guarded by a compile-time level.
//!
//! The level is raised when running tests or when the `debug-checks` feature is enabled; the
//! moderate checks (such as domains only shrinking, or every reported objective improving on the
//! previous one) only run then.

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const LABELING_ASSERT_LEVEL_DEFINITION: u8 = LABELING_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const LABELING_ASSERT_LEVEL_DEFINITION: u8 = LABELING_ASSERT_MODERATE;

pub const LABELING_ASSERT_SIMPLE: u8 = 1;
pub const LABELING_ASSERT_MODERATE: u8 = 2;

#[macro_export]
#[doc(hidden)]
macro_rules! labeling_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::LABELING_ASSERT_LEVEL_DEFINITION >= $crate::asserts::LABELING_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! labeling_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::LABELING_ASSERT_LEVEL_DEFINITION >= $crate::asserts::LABELING_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}
