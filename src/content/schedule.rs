use chrono::{Datelike, NaiveDate};

use crate::types::content::{DaySchedule, ScheduledWorkout};

pub static DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub static SUGGESTIONS: [&str; 3] = [
    "Add a lunch break walk",
    "Schedule morning mobility",
    "Try a new routine",
];

static MONDAY: [ScheduledWorkout; 2] = [
    ScheduledWorkout { id: 1, time: "7:00 AM", title: "Gentle Morning Flow", duration: "15 min", completed: true },
    ScheduledWorkout { id: 2, time: "12:30 PM", title: "Lunch Break Walk", duration: "10 min", completed: false },
];

static TUESDAY: [ScheduledWorkout; 2] = [
    ScheduledWorkout { id: 3, time: "12:00 PM", title: "Desk Warrior Relief", duration: "12 min", completed: false },
    ScheduledWorkout { id: 4, time: "6:00 PM", title: "Hip Mobility", duration: "18 min", completed: false },
];

static WEDNESDAY: [ScheduledWorkout; 1] = [
    ScheduledWorkout { id: 5, time: "8:00 AM", title: "Core Stability", duration: "20 min", completed: false },
];

static THURSDAY: [ScheduledWorkout; 1] = [
    ScheduledWorkout { id: 6, time: "12:15 PM", title: "Mindful Movement", duration: "15 min", completed: false },
];

static FRIDAY: [ScheduledWorkout; 2] = [
    ScheduledWorkout { id: 7, time: "7:30 AM", title: "Energy Flow", duration: "15 min", completed: false },
    ScheduledWorkout { id: 8, time: "5:30 PM", title: "Post-Work Unwind", duration: "10 min", completed: false },
];

/// Days are numbered from Sunday = 0.
pub fn workouts_for_day(day: u8) -> &'static [ScheduledWorkout] {
    match day {
        1 => &MONDAY,
        2 => &TUESDAY,
        3 => &WEDNESDAY,
        4 => &THURSDAY,
        5 => &FRIDAY,
        _ => &[],
    }
}

pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// `None` for a day outside 0..=6.
pub fn day_schedule(day: u8, today: NaiveDate) -> Option<DaySchedule> {
    let day_name = *DAY_NAMES.get(day as usize)?;

    Some(DaySchedule {
        day,
        day_name,
        is_today: weekday_index(today) == day,
        workouts: workouts_for_day(day),
        suggestions: &SUGGESTIONS,
    })
}
