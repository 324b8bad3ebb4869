use crate::errors::TrackerError;
use crate::models::{Category, HabitInput, Priority, TaskInput};
use crate::streak::parse_date;
use crate::tracker::Tracker;
use chrono::{Datelike, NaiveDate};

pub const QUOTES: [&str; 5] = [
    "The secret of getting ahead is getting started.",
    "Success is the sum of small efforts repeated day in and day out.",
    "Don't watch the clock; do what it does. Keep going.",
    "The only way to do great work is to love what you do.",
    "Believe you can and you're halfway there.",
];

/// Same quote for the whole day.
pub fn daily_quote(today: NaiveDate) -> &'static str {
    let idx = today.num_days_from_ce().rem_euclid(QUOTES.len() as i32) as usize;
    QUOTES[idx]
}

struct SampleTask {
    title: &'static str,
    description: &'static str,
    priority: Priority,
    due_date: &'static str,
    created_at: &'static str,
    completed: bool,
}

struct SampleHabit {
    name: &'static str,
    description: &'static str,
    category: Category,
    completed_dates: &'static [&'static str],
}

const SAMPLE_TASKS: [SampleTask; 3] = [
    SampleTask {
        title: "Complete project proposal",
        description: "Finish the Q1 project proposal for the marketing campaign",
        priority: Priority::High,
        due_date: "2025-08-18",
        created_at: "2025-08-16",
        completed: false,
    },
    SampleTask {
        title: "Buy groceries",
        description: "Get milk, bread, and vegetables for the week",
        priority: Priority::Medium,
        due_date: "2025-08-17",
        created_at: "2025-08-16",
        completed: false,
    },
    SampleTask {
        title: "Review team feedback",
        description: "Go through the feedback from last week's presentation",
        priority: Priority::Low,
        due_date: "2025-08-20",
        created_at: "2025-08-15",
        completed: true,
    },
];

const SAMPLE_HABITS: [SampleHabit; 3] = [
    SampleHabit {
        name: "Drink 8 glasses of water",
        description: "Stay hydrated throughout the day",
        category: Category::Health,
        completed_dates: &["2025-08-12", "2025-08-13", "2025-08-14", "2025-08-15", "2025-08-16"],
    },
    SampleHabit {
        name: "30 minutes exercise",
        description: "Do cardio or strength training",
        category: Category::Fitness,
        completed_dates: &["2025-08-14", "2025-08-15", "2025-08-16"],
    },
    SampleHabit {
        name: "Read for 20 minutes",
        description: "Read books or educational content",
        category: Category::Learning,
        completed_dates: &[
            "2025-08-09",
            "2025-08-10",
            "2025-08-11",
            "2025-08-12",
            "2025-08-13",
            "2025-08-14",
            "2025-08-15",
            "2025-08-16",
        ],
    },
];

/// Builds the sample tracker. Streaks are derived for `today`, so they read
/// 5, 3 and 8 only when today is 2025-08-16.
pub fn sample_tracker(today: NaiveDate) -> Result<Tracker, TrackerError> {
    let mut tracker = Tracker::default();

    for sample in &SAMPLE_TASKS {
        let created_at = parse_date(sample.created_at)?;
        let id = tracker
            .add_task(
                TaskInput {
                    title: sample.title.to_string(),
                    description: sample.description.to_string(),
                    priority: sample.priority,
                    due_date: Some(sample.due_date.to_string()),
                },
                created_at,
            )?
            .id;
        if sample.completed {
            tracker.toggle_task(id, created_at)?;
        }
    }

    for sample in &SAMPLE_HABITS {
        let dates = sample
            .completed_dates
            .iter()
            .map(|value| parse_date(value))
            .collect::<Result<Vec<_>, _>>()?;
        tracker.insert_habit(
            HabitInput {
                name: sample.name.to_string(),
                description: sample.description.to_string(),
                category: sample.category,
                frequency: "daily".to_string(),
            },
            dates,
            today,
        )?;
    }

    Ok(tracker)
}
