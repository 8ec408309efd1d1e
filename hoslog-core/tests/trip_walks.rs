use hoslog_core::{
    ACTION_BREAK, ACTION_DROP_OFF, ACTION_PICKUP, ACTION_PRE_TRIP, ACTION_REFUEL,
    ACTION_SLEEPER_RESET_PART_1, ACTION_SLEEPER_RESET_PART_2, DayLog, DutyStatus, HosConfig,
    LogbookSimulator, estimate_trip_feasibility,
};

fn run_trip(total_dist: f64, total_time_mins: f64, pickup_time_mins: f64) -> Vec<DayLog> {
    let config = HosConfig::default();
    LogbookSimulator::new(total_dist, total_time_mins, &config).generate(pickup_time_mins)
}

fn assert_day_sums_to_24(days: &[DayLog]) {
    for (index, day) in days.iter().enumerate() {
        assert!(
            (day.summary_total() - 24.0).abs() < 1e-9,
            "day {index} sums to {} instead of 24",
            day.summary_total()
        );
    }
}

fn labeled_hours(day: &DayLog, label: &str) -> Vec<f64> {
    day.entries
        .iter()
        .filter(|entry| entry.action.as_deref() == Some(label))
        .map(|entry| entry.hour)
        .collect()
}

#[test]
fn short_trip_fits_one_day() {
    let config = HosConfig::default();
    let report = estimate_trip_feasibility(300.0, 300.0, 20.0, &config);
    assert!(report.feasible, "{}", report.message);

    let days = run_trip(300.0, 300.0, 0.0);
    assert_eq!(days.len(), 1);
    assert_day_sums_to_24(&days);

    let day = &days[0];
    assert!((day.driving_hrs - 5.0).abs() < 1e-9);
    assert!((day.on_duty_hrs - 1.5).abs() < 1e-9);
    assert!((day.off_duty_hrs - 17.5).abs() < 1e-9);
    assert!((day.sleeper_hrs - 0.0).abs() < 1e-9);

    let labels: Vec<_> = day
        .entries
        .iter()
        .filter_map(|entry| entry.action.as_deref())
        .collect();
    assert_eq!(labels, vec![ACTION_PRE_TRIP, ACTION_PICKUP, ACTION_DROP_OFF]);
}

#[test]
fn break_interrupts_work_after_eight_hours() {
    let days = run_trip(500.0, 600.0, 0.0);
    assert_eq!(days.len(), 1);
    assert_day_sums_to_24(&days);

    let day = &days[0];
    assert!((day.driving_hrs - 10.0).abs() < 1e-9);

    // Work starts at 6.5 and accumulates 8h (pre-trip, pickup, driving) by
    // 14.5; the labeled end of the break lands at 15.0.
    let breaks = labeled_hours(day, ACTION_BREAK);
    assert_eq!(breaks.len(), 1);
    assert!((breaks[0] - 15.0).abs() < 1e-9);
    assert!(breaks[0] >= 8.0);

    let break_index = day
        .entries
        .iter()
        .position(|entry| entry.action.as_deref() == Some(ACTION_BREAK))
        .unwrap();
    let start = &day.entries[break_index - 1];
    assert_eq!(start.status, DutyStatus::OffDuty);
    assert!((start.hour - 14.5).abs() < 1e-9);
}

#[test]
fn cross_country_trip_spans_four_days() {
    let days = run_trip(2000.0, 2400.0, 0.0);
    assert_eq!(days.len(), 4);
    assert_day_sums_to_24(&days);

    let driving: Vec<f64> = days.iter().map(|day| day.driving_hrs).collect();
    assert_eq!(driving, vec![11.0, 11.0, 11.0, 7.0]);
    let sleeper: Vec<f64> = days.iter().map(|day| day.sleeper_hrs).collect();
    assert_eq!(sleeper, vec![5.0, 12.0, 12.5, 0.5]);
    let opened_at: Vec<f64> = days.iter().map(|day| day.total_time_traveled_mins).collect();
    assert_eq!(opened_at, vec![0.0, 660.0, 1320.0, 1980.0]);

    for day in &days {
        assert!(day.driving_hrs <= HosConfig::default_max_driving_time() + 1e-9);
    }
}

#[test]
fn sleeper_split_carries_labels_across_midnight() {
    let days = run_trip(2000.0, 2400.0, 0.0);

    let boundary = days[0].entries.last().unwrap();
    assert!((boundary.hour - 24.0).abs() < 1e-9);
    assert_eq!(boundary.status, DutyStatus::Sleeper);
    assert_eq!(
        boundary.action.as_deref(),
        Some(ACTION_SLEEPER_RESET_PART_1)
    );

    let next_day = &days[1].entries;
    assert!((next_day[0].hour - 0.0).abs() < 1e-9);
    assert_eq!(next_day[0].status, DutyStatus::Sleeper);
    assert_eq!(next_day[0].action, None);
    assert!((next_day[1].hour - 5.0).abs() < 1e-9);
    assert_eq!(
        next_day[1].action.as_deref(),
        Some(ACTION_SLEEPER_RESET_PART_2)
    );
}

#[test]
fn refuel_stop_appears_once_the_threshold_is_crossed() {
    let days = run_trip(2000.0, 2400.0, 0.0);

    // 50 mph for 19 driving hours crosses 980 miles early on day two.
    let refuels_day_one = labeled_hours(&days[0], ACTION_REFUEL);
    assert!(refuels_day_one.is_empty());
    let refuels_day_two = labeled_hours(&days[1], ACTION_REFUEL);
    assert_eq!(refuels_day_two.len(), 1);
    assert!((refuels_day_two[0] - 15.0).abs() < 1e-9);
}

#[test]
fn driving_blocks_carry_single_start_markers() {
    let days = run_trip(300.0, 300.0, 0.0);
    let day = &days[0];

    // Ten contiguous driving steps: one start marker plus one entry per step.
    let driving_entries: Vec<_> = day
        .entries
        .iter()
        .filter(|entry| entry.status == DutyStatus::Driving)
        .collect();
    assert_eq!(driving_entries.len(), 11);
    assert!((driving_entries[0].hour - 7.5).abs() < 1e-9);
    assert!((driving_entries[10].hour - 12.5).abs() < 1e-9);
}

#[test]
fn zero_trip_round_trips_through_the_wire_shape() {
    let days = run_trip(0.0, 0.0, 0.0);
    assert!(!days.is_empty());

    let value = serde_json::to_value(&days).unwrap();
    let first = &value[0];
    assert!((first["timeSpentInDriving"].as_f64().unwrap() - 0.0).abs() < 1e-9);
    assert!(!first["logbook"].as_array().unwrap().is_empty());

    let back: Vec<DayLog> = serde_json::from_value(value).unwrap();
    assert_eq!(back, days);

    let labels: Vec<_> = days[0]
        .entries
        .iter()
        .filter_map(|entry| entry.action.as_deref())
        .collect();
    assert_eq!(labels, vec![ACTION_PRE_TRIP, ACTION_DROP_OFF]);
}
