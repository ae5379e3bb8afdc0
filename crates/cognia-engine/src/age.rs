//! Chronological age at testing.

use cognia_core::models::classification::ExamineeAge;
use jiff::civil::Date;

/// Completed years and months between birth and testing.
///
/// Calendar-field subtraction with a day borrow: when the test
/// day-of-month has not reached the birth day-of-month, the running month
/// is incomplete and does not count. A test date before the birth date
/// yields (0, 0) rather than an error; such an entry is visibly wrong on
/// the form and the flat zero keeps the rest of the analysis running.
///
/// The result always satisfies `months <= 11`.
pub fn age_at_testing(birth: Date, test: Date) -> ExamineeAge {
    if test < birth {
        return ExamineeAge { years: 0, months: 0 };
    }

    let mut years = i32::from(test.year()) - i32::from(birth.year());
    let mut months = i32::from(test.month()) - i32::from(birth.month());
    if test.day() < birth.day() {
        months -= 1;
    }
    if months < 0 {
        years -= 1;
        months += 12;
    }

    // test >= birth guarantees both are non-negative after the borrow.
    ExamineeAge {
        years: years as u32,
        months: months as u32,
    }
}
