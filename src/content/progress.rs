use std::str::FromStr;

use crate::types::content::{Achievement, DayActivity, PeriodStats, ProgressReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Week,
    Month,
    Year,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::Week => "This Week",
            Period::Month => "This Month",
            Period::Year => "This Year",
        }
    }

    pub fn stats(&self) -> PeriodStats {
        match self {
            Period::Week => PeriodStats { workouts: 4, minutes: 68, streak: 3, goal: 5 },
            Period::Month => PeriodStats { workouts: 16, minutes: 280, streak: 8, goal: 20 },
            Period::Year => PeriodStats { workouts: 89, minutes: 1420, streak: 12, goal: 150 },
        }
    }
}

impl FromStr for Period {
    type Err = ();

    fn from_str(s: &str) -> Result<Period, Self::Err> {
        match s {
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            "year" => Ok(Period::Year),
            _ => Err(()),
        }
    }
}

pub static ACHIEVEMENTS: [Achievement; 4] = [
    Achievement {
        id: 1,
        title: "First Steps",
        description: "Completed your first workout",
        earned: true,
        earned_label: Some("2 weeks ago"),
        progress: None,
    },
    Achievement {
        id: 2,
        title: "Consistency Champion",
        description: "7 days in a row",
        earned: true,
        earned_label: Some("1 week ago"),
        progress: None,
    },
    Achievement {
        id: 3,
        title: "Mobility Master",
        description: "10 mobility sessions",
        earned: true,
        earned_label: Some("3 days ago"),
        progress: None,
    },
    Achievement {
        id: 4,
        title: "Goal Crusher",
        description: "Reached monthly goal",
        earned: false,
        earned_label: None,
        progress: Some(80),
    },
];

pub static WEEKLY_ACTIVITY: [DayActivity; 7] = [
    DayActivity { day: "Mon", completed: true, duration: 15 },
    DayActivity { day: "Tue", completed: true, duration: 20 },
    DayActivity { day: "Wed", completed: false, duration: 0 },
    DayActivity { day: "Thu", completed: true, duration: 12 },
    DayActivity { day: "Fri", completed: true, duration: 18 },
    DayActivity { day: "Sat", completed: false, duration: 0 },
    DayActivity { day: "Sun", completed: false, duration: 0 },
];

/// Percentage of the goal reached, rounded down and capped at 100.
pub fn goal_progress(stats: &PeriodStats) -> u8 {
    if stats.goal == 0 {
        return 100;
    }

    let percent = u64::from(stats.workouts) * 100 / u64::from(stats.goal);
    percent.min(100) as u8
}

pub fn progress_report(period: Period) -> ProgressReport {
    let stats = period.stats();

    ProgressReport {
        period: period.as_str(),
        label: period.label(),
        goal_progress: goal_progress(&stats),
        stats,
        achievements: &ACHIEVEMENTS,
        weekly_activity: &WEEKLY_ACTIVITY,
    }
}
