use serde::{Deserialize, Serialize};

use super::TableRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineEntry {
    #[serde(rename = "Usuario")]
    pub username: String,
    #[serde(rename = "Día")]
    pub day: String,
    #[serde(rename = "Ejercicio")]
    pub exercise: String,
}

impl RoutineEntry {
    pub fn new(username: &str, day: &str, exercise: &str) -> Self {
        Self {
            username: username.to_string(),
            day: day.to_string(),
            exercise: exercise.to_string(),
        }
    }

    pub fn matches(&self, username: &str, day: &str, exercise: &str) -> bool {
        self.username == username && self.day == day && self.exercise == exercise
    }
}

impl TableRow for RoutineEntry {
    const HEADERS: &'static [&'static str] = &["Usuario", "Día", "Ejercicio"];
}

#[derive(Debug, Deserialize)]
pub struct RoutineExerciseForm {
    pub day: String,
    pub exercise: String,
}

/// Push/pull/legs split given to every user whose routine is empty.
pub const DEFAULT_ROUTINE: &[(&str, &[&str])] = &[
    (
        "Día 1",
        &[
            "Barbell Bench Press",
            "Incline Barbell Bench Press",
            "Chest Fly (Machine)",
            "Machine Shoulder Press",
            "Dumbbell Lateral Raise",
            "Triceps Pushdown",
            "Cable Overhead Triceps Extension",
        ],
    ),
    (
        "Día 2",
        &[
            "Barbell Squat",
            "Hip Thrust (Barbell)",
            "Leg Press",
            "Leg Extension",
            "Bulgarian Split Squat",
            "Seated Calf Raise",
        ],
    ),
    (
        "Día 3",
        &[
            "Deadlift (Barbell)",
            "Lat Pulldown (Wide Grip)",
            "Seated Row (Cable)",
            "Straight Arm Pulldown",
            "Incline Dumbbell Curl",
            "Cable Curl",
            "Hammer Curl",
        ],
    ),
    (
        "Día 4",
        &[
            "Goblet Squat to Press",
            "Romanian Deadlift (Dumbbells)",
            "Seated Row (Cable)",
            "Lat Pulldown (Medium Grip)",
            "Dumbbell Shrug",
            "Face Pull",
            "Crunch Machine",
            "Cable Woodchopper",
        ],
    ),
    (
        "Día 5",
        &[
            "Step-up (Dumbbell)",
            "Lying Leg Curl (Machine)",
            "Hip Thrust (Barbell)",
            "Seated Leg Curl (Machine)",
            "Reverse Lunge (Dumbbell)",
            "Seated Calf Raise",
            "Crunch Machine",
            "Cable Woodchopper",
        ],
    ),
];

/// Expand the default routine into entries owned by `username`.
pub fn default_entries(username: &str) -> Vec<RoutineEntry> {
    DEFAULT_ROUTINE
        .iter()
        .flat_map(|(day, exercises)| {
            exercises
                .iter()
                .map(move |exercise| RoutineEntry::new(username, day, exercise))
        })
        .collect()
}
