use crate::streak::HabitRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Health,
    Fitness,
    Learning,
    Productivity,
    Mindfulness,
    #[default]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
    pub created_at: NaiveDate,
    pub completed_on: Option<NaiveDate>,
}

#[derive(Debug, Clone)]
pub struct Habit {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub record: HabitRecord,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaskInput {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub due_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HabitInput {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default = "default_frequency")]
    pub frequency: String,
}

fn default_frequency() -> String {
    "daily".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HabitAction {
    MarkCompleted,
    Unmark,
    Toggle,
}

/// A typed habit mutation. `date` defaults to today.
#[derive(Debug, Clone, Deserialize)]
pub struct HabitCommand {
    pub action: HabitAction,
    pub habit_id: u64,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PriorityFilter {
    #[default]
    All,
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct TaskFilter {
    #[serde(default)]
    pub status: StatusFilter,
    #[serde(default)]
    pub priority: PriorityFilter,
}

#[derive(Debug, Serialize)]
pub struct HabitResponse {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub frequency: String,
    pub streak: u32,
    pub completed_today: bool,
    pub completed_dates: Vec<NaiveDate>,
}

impl HabitResponse {
    pub fn from_habit(habit: &Habit, today: NaiveDate) -> Self {
        Self {
            id: habit.id,
            name: habit.name.clone(),
            description: habit.description.clone(),
            category: habit.category,
            frequency: default_frequency(),
            streak: habit.record.streak(),
            completed_today: habit.record.completed_today(today),
            completed_dates: habit.record.completed_dates().iter().copied().collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub date: NaiveDate,
    pub tasks_completed: usize,
    pub tasks_total: usize,
    pub habits_completed_today: usize,
    pub habits_total: usize,
    pub longest_streak: u32,
    pub productivity_score: u32,
    pub task_progress: u32,
    pub today_tasks: Vec<Task>,
    pub quote: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DailyPoint {
    pub date: String,
    pub weekday: String,
    pub tasks_completed: usize,
    pub habits_completed: usize,
}

#[derive(Debug, Serialize)]
pub struct HabitStreakPoint {
    pub id: u64,
    pub name: String,
    pub category: Category,
    pub streak: u32,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub last_7_days: Vec<DailyPoint>,
    pub habit_streaks: Vec<HabitStreakPoint>,
}
