use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Workout {
    pub id: &'static str,
    pub title: &'static str,
    pub duration: &'static str,
    pub level: &'static str,
    pub category: &'static str,
    pub focus: &'static str,
    pub description: &'static str,
    pub accessibility: &'static str,
    pub sessions: Option<&'static str>,
    pub featured: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkoutFilter {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ScheduledWorkout {
    pub id: u32,
    pub time: &'static str,
    pub title: &'static str,
    pub duration: &'static str,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DaySchedule {
    pub day: u8,
    pub day_name: &'static str,
    pub is_today: bool,
    pub workouts: &'static [ScheduledWorkout],
    pub suggestions: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PeriodStats {
    pub workouts: u32,
    pub minutes: u32,
    pub streak: u32,
    pub goal: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Achievement {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub earned: bool,
    pub earned_label: Option<&'static str>,
    pub progress: Option<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayActivity {
    pub day: &'static str,
    pub completed: bool,
    pub duration: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgressReport {
    pub period: &'static str,
    pub label: &'static str,
    pub stats: PeriodStats,
    pub goal_progress: u8,
    pub achievements: &'static [Achievement],
    pub weekly_activity: &'static [DayActivity],
}
