use chrono::NaiveDate;
use date_spec::{DateSpecification, DayOfMonth, DayOfWeek, Result};

#[test]
fn business_calendar_rule() -> Result<()> {
    // Salary review day: the 3rd Friday of every month, unless it is the 15th.
    let third_friday = DateSpecification::monthly_floating(DayOfWeek::Friday, 3)?;
    let fifteenth = DateSpecification::monthly_day(DayOfMonth::new(15)?);
    let review_day = third_friday.and(fifteenth.not());

    let start = NaiveDate::from_ymd_opt(2024, 11, 1).unwrap();

    // Get review days for the next few months.
    let dates: Vec<NaiveDate> = review_day.iter(start, 60).take(3).collect();
    assert_eq!(
        dates,
        vec![
            NaiveDate::from_ymd_opt(2024, 12, 20).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 17).unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 21).unwrap(),
        ]
    );

    Ok(())
}
