// Shared schedule scenarios. Included by the generator's unit tests and by
// `tests/schedule_cases.rs`; the including module brings `NaiveDate`,
// `StudyTimeline`, `RecurrencePattern`, `FilterSet`, `NamingTemplate` and
// `generate_schedule` into scope.

pub struct ScheduleCase {
    pub name: &'static str,
    pub start_date: &'static str,
    pub start_day: u32,
    pub end_day: u32,
    pub pattern: &'static str,
    pub filters: &'static str,
    pub template: Option<&'static str>,
    pub expected: &'static [(u32, &'static str)],
}

#[expect(clippy::too_many_lines)]
pub fn schedule_cases() -> Vec<ScheduleCase> {
    vec![
        ScheduleCase {
            name: "weekly_monday_from_monday_start",
            start_date: "2024-01-01",
            start_day: 0,
            end_day: 13,
            pattern: r#"{"kind":"every_n_weeks","week_interval":1,"weekdays":[1]}"#,
            filters: "{}",
            template: None,
            expected: &[(0, ""), (7, "")],
        },
        ScheduleCase {
            name: "monthly_fixed_fifteenth",
            start_date: "2024-01-01",
            start_day: 0,
            end_day: 60,
            pattern: r#"{"kind":"every_n_months","month_interval":1,
                         "rule":{"kind":"fixed_day_of_month","day":15}}"#,
            filters: "{}",
            template: None,
            expected: &[(14, ""), (45, "")],
        },
        ScheduleCase {
            name: "skip_weekends_keeps_mondays",
            start_date: "2024-01-01",
            start_day: 0,
            end_day: 21,
            pattern: r#"{"kind":"every_n_days","interval":7}"#,
            filters: r#"{"skip_weekends":true}"#,
            template: None,
            expected: &[(0, ""), (7, ""), (14, ""), (21, "")],
        },
        ScheduleCase {
            name: "skip_weekends_drops_saturdays",
            start_date: "2024-01-06",
            start_day: 0,
            end_day: 21,
            pattern: r#"{"kind":"every_n_days","interval":7}"#,
            filters: r#"{"skip_weekends":true}"#,
            template: None,
            expected: &[],
        },
        ScheduleCase {
            name: "dose_names",
            start_date: "2024-01-01",
            start_day: 0,
            end_day: 14,
            pattern: r#"{"kind":"every_n_days","interval":7}"#,
            filters: "{}",
            template: Some("Dose {n} (Day {day})"),
            expected: &[
                (0, "Dose 1 (Day 0)"),
                (7, "Dose 2 (Day 7)"),
                (14, "Dose 3 (Day 14)"),
            ],
        },
        ScheduleCase {
            name: "last_friday_monthly_with_month_names",
            start_date: "2024-01-01",
            start_day: 0,
            end_day: 90,
            pattern: r#"{"kind":"every_n_months","month_interval":1,
                         "rule":{"kind":"nth_weekday","occurrence":"last","weekday":5}}"#,
            filters: "{}",
            template: Some("Visit M{month}"),
            expected: &[(25, "Visit M1"), (53, "Visit M2"), (88, "Visit M3")],
        },
        ScheduleCase {
            name: "mon_wed_fri_in_selected_weeks",
            start_date: "2024-01-01",
            start_day: 0,
            end_day: 27,
            pattern: r#"{"kind":"specific_weekdays","weekdays":[1,3,5]}"#,
            filters: r#"{"week_numbers":{"allowed_weeks":[2,4]}}"#,
            template: Some("W{week}#{n}"),
            expected: &[
                (7, "W2#1"),
                (9, "W2#2"),
                (11, "W2#3"),
                (21, "W4#4"),
                (23, "W4#5"),
                (25, "W4#6"),
            ],
        },
        ScheduleCase {
            name: "every_ten_days_in_february",
            start_date: "2024-01-01",
            start_day: 0,
            end_day: 100,
            pattern: r#"{"kind":"every_n_days","interval":10}"#,
            filters: r#"{"months":{"allowed_months":[2]}}"#,
            template: Some("{day}/{month}/{unknown}"),
            expected: &[(40, "40/2/{unknown}"), (50, "50/2/{unknown}")],
        },
        ScheduleCase {
            name: "biweekly_blocks_follow_study_weeks_mid_week_start",
            start_date: "2024-01-01",
            start_day: 2,
            end_day: 22,
            pattern: r#"{"kind":"every_n_weeks","week_interval":2,"weekdays":[1]}"#,
            filters: "{}",
            template: Some("Dose {n}"),
            expected: &[(14, "Dose 1")],
        },
        ScheduleCase {
            name: "thirty_first_never_in_february",
            start_date: "2024-01-01",
            start_day: 31,
            end_day: 59,
            pattern: r#"{"kind":"every_n_months","month_interval":1,
                         "rule":{"kind":"fixed_day_of_month","day":31}}"#,
            filters: "{}",
            template: Some("Dose {n}"),
            expected: &[],
        },
    ]
}

pub fn assert_case(case: &ScheduleCase) {
    let start = NaiveDate::parse_from_str(case.start_date, "%Y-%m-%d")
        .unwrap_or_else(|err| panic!("{}: bad start date: {err}", case.name));
    let timeline = StudyTimeline::new(start, case.start_day, case.end_day);
    let pattern: RecurrencePattern = serde_json::from_str(case.pattern)
        .unwrap_or_else(|err| panic!("{}: bad pattern: {err}", case.name));
    let filters: FilterSet = serde_json::from_str(case.filters)
        .unwrap_or_else(|err| panic!("{}: bad filters: {err}", case.name));
    let template = case.template.map(NamingTemplate::from);

    let events = generate_schedule(&timeline, &pattern, &filters, template.as_ref())
        .unwrap_or_else(|err| panic!("{}: generation failed: {err}", case.name));

    let actual: Vec<(u32, &str)> = events
        .iter()
        .map(|event| (event.offset_day, event.name.as_str()))
        .collect();
    assert_eq!(actual, case.expected, "case {}", case.name);
}
