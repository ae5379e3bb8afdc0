//! Age arithmetic against the calendar cases the record form produces.

use cognia_core::models::classification::ExamineeAge;
use cognia_engine::age::age_at_testing;
use jiff::civil::date;

#[test]
fn day_not_yet_reached_borrows_a_month() {
    // Turns 9 on 2024-06-15; tested five days short of the birthday.
    let age = age_at_testing(date(2015, 6, 15), date(2024, 6, 10));
    assert_eq!(age, ExamineeAge { years: 8, months: 11 });
}

#[test]
fn birthday_itself_completes_the_year() {
    let age = age_at_testing(date(2015, 6, 15), date(2024, 6, 15));
    assert_eq!(age, ExamineeAge { years: 9, months: 0 });
}

#[test]
fn plain_case_without_borrow() {
    let age = age_at_testing(date(2015, 3, 10), date(2024, 7, 20));
    assert_eq!(age, ExamineeAge { years: 9, months: 4 });
}

#[test]
fn same_day_is_zero() {
    let age = age_at_testing(date(2020, 2, 29), date(2020, 2, 29));
    assert_eq!(age, ExamineeAge { years: 0, months: 0 });
}

#[test]
fn test_before_birth_falls_back_to_zero() {
    // Inverted entry on the form: flat zero, not a negative age and not
    // an error.
    let age = age_at_testing(date(2024, 6, 10), date(2015, 6, 15));
    assert_eq!(age, ExamineeAge { years: 0, months: 0 });
}

#[test]
fn one_day_short_of_the_first_month() {
    let age = age_at_testing(date(2023, 1, 15), date(2023, 2, 14));
    assert_eq!(age, ExamineeAge { years: 0, months: 0 });
}

#[test]
fn first_month_completes_on_the_same_day_number() {
    let age = age_at_testing(date(2023, 1, 15), date(2023, 2, 15));
    assert_eq!(age, ExamineeAge { years: 0, months: 1 });
}

#[test]
fn year_end_borrow() {
    // Born mid-December, tested early January: 0 years, 0 months at the
    // turn, then the month completes on the 15th.
    let age = age_at_testing(date(2022, 12, 15), date(2023, 1, 10));
    assert_eq!(age, ExamineeAge { years: 0, months: 0 });

    let age = age_at_testing(date(2022, 12, 15), date(2023, 1, 15));
    assert_eq!(age, ExamineeAge { years: 0, months: 1 });
}

#[test]
fn months_stay_in_range_across_a_full_year_of_test_dates() {
    let birth = date(2015, 6, 15);
    let mut test = date(2023, 1, 1);
    let end = date(2024, 1, 1);

    while test < end {
        let age = age_at_testing(birth, test);
        assert!(
            age.months <= 11,
            "months out of range at {test}: {}",
            age.months
        );
        assert!(age.years >= 7, "years collapsed at {test}: {}", age.years);
        test = test.tomorrow().unwrap();
    }
}
