use crate::types::content::{Workout, WorkoutFilter};

pub static FILTERS: [WorkoutFilter; 5] = [
    WorkoutFilter { id: "all", label: "All Workouts" },
    WorkoutFilter { id: "programs", label: "GZ Programs" },
    WorkoutFilter { id: "quick", label: "Quick (10-15min)" },
    WorkoutFilter { id: "mobility", label: "Mobility" },
    WorkoutFilter { id: "beginner", label: "Beginner Friendly" },
];

// signature programs first, then single sessions
pub static WORKOUTS: [Workout; 9] = [
    Workout {
        id: "strong-is-sexy",
        title: "Strong is Sexy",
        duration: "12 weeks",
        level: "All Levels",
        category: "programs",
        focus: "Full Body Strength",
        description: "Complete transformation program building confidence and strength",
        accessibility: "Progressive modifications included",
        sessions: Some("3-4x per week"),
        featured: true,
    },
    Workout {
        id: "thick-thighs",
        title: "Thick Thighs Save Lives",
        duration: "6 weeks",
        level: "Beginner to Intermediate",
        category: "programs",
        focus: "Lower Body & Mobility",
        description: "Celebrate and strengthen your lower body with targeted training",
        accessibility: "Chair modifications available",
        sessions: Some("3x per week"),
        featured: true,
    },
    Workout {
        id: "bringing-sexy-back",
        title: "Bringing Sexy Back",
        duration: "8 weeks",
        level: "Intermediate to Advanced",
        category: "programs",
        focus: "Pull-up Progression",
        description: "Master the pull-up with progressive strength building",
        accessibility: "Band-assisted options provided",
        sessions: Some("2-3x per week"),
        featured: true,
    },
    Workout {
        id: "1",
        title: "Desk Warrior Relief",
        duration: "12 min",
        level: "Beginner",
        category: "quick",
        focus: "Neck, Shoulders, Back",
        description: "Perfect for those long office days",
        accessibility: "Can be done seated",
        sessions: None,
        featured: false,
    },
    Workout {
        id: "2",
        title: "Gentle Hip Mobility",
        duration: "18 min",
        level: "All Levels",
        category: "mobility",
        focus: "Hips, Lower Back",
        description: "Restore movement after sitting",
        accessibility: "Modifications provided",
        sessions: None,
        featured: false,
    },
    Workout {
        id: "3",
        title: "Morning Energy Flow",
        duration: "15 min",
        level: "Beginner",
        category: "quick",
        focus: "Full Body Wake-Up",
        description: "Start your day with intention",
        accessibility: "Chair options available",
        sessions: None,
        featured: false,
    },
    Workout {
        id: "4",
        title: "Post-Injury Recovery",
        duration: "25 min",
        level: "Recovery",
        category: "mobility",
        focus: "Gentle Rehabilitation",
        description: "Carefully designed for healing bodies",
        accessibility: "Extra gentle movements",
        sessions: None,
        featured: false,
    },
    Workout {
        id: "5",
        title: "Lunchtime Walk Guide",
        duration: "10 min",
        level: "All Levels",
        category: "quick",
        focus: "Mindful Movement",
        description: "Make the most of your break",
        accessibility: "Outdoor or indoor options",
        sessions: None,
        featured: false,
    },
    Workout {
        id: "6",
        title: "Core Stability Builder",
        duration: "20 min",
        level: "Intermediate",
        category: "strength",
        focus: "Core, Balance",
        description: "Build strength progressively",
        accessibility: "Modify as needed",
        sessions: None,
        featured: false,
    },
];

/// `all` (or no filter) lists everything. Otherwise a workout matches on its
/// category, or when its level mentions the filter ("beginner" picks up
/// "Beginner to Intermediate").
pub fn filter_workouts(filter: Option<&str>) -> Vec<&'static Workout> {
    let filter = filter.map(str::trim).unwrap_or("all").to_lowercase();
    if filter.is_empty() || filter == "all" {
        return WORKOUTS.iter().collect();
    }

    WORKOUTS
        .iter()
        .filter(|workout| workout.category == filter || workout.level.to_lowercase().contains(&filter))
        .collect()
}

pub fn featured_programs() -> Vec<&'static Workout> {
    WORKOUTS.iter().filter(|workout| workout.featured).collect()
}
