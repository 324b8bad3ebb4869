use crate::models::{DailyPoint, DashboardResponse, HabitStreakPoint, StatsResponse};
use crate::seed::daily_quote;
use crate::tracker::Tracker;
use chrono::{Duration, NaiveDate};

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

pub fn build_dashboard_at(tracker: &Tracker, today: NaiveDate) -> DashboardResponse {
    let tasks_total = tracker.tasks().len();
    let tasks_completed = tracker.tasks().iter().filter(|task| task.completed).count();

    let habits_total = tracker.habits().len();
    let habits_completed_today = tracker
        .habits()
        .iter()
        .filter(|habit| habit.record.completed_today(today))
        .count();

    let longest_streak = tracker
        .habits()
        .iter()
        .map(|habit| habit.record.streak())
        .max()
        .unwrap_or(0);

    let task_score = percent(tasks_completed, tasks_total);
    let habit_score = percent(habits_completed_today, habits_total);

    DashboardResponse {
        date: today,
        tasks_completed,
        tasks_total,
        habits_completed_today,
        habits_total,
        longest_streak,
        productivity_score: ((task_score + habit_score) / 2.0).round() as u32,
        task_progress: task_score.round() as u32,
        today_tasks: tracker.today_tasks(today).into_iter().cloned().collect(),
        quote: daily_quote(today),
    }
}

pub fn build_stats_at(tracker: &Tracker, today: NaiveDate) -> StatsResponse {
    let mut last_7_days = Vec::with_capacity(7);
    for offset in (0..7).rev() {
        let date = today - Duration::days(offset);
        let tasks_completed = tracker
            .tasks()
            .iter()
            .filter(|task| task.completed_on == Some(date))
            .count();
        let habits_completed = tracker
            .habits()
            .iter()
            .filter(|habit| habit.record.is_completed_on(date))
            .count();

        last_7_days.push(DailyPoint {
            date: date.to_string(),
            weekday: date.format("%a").to_string(),
            tasks_completed,
            habits_completed,
        });
    }

    let mut habit_streaks: Vec<HabitStreakPoint> = tracker
        .habits()
        .iter()
        .map(|habit| HabitStreakPoint {
            id: habit.id,
            name: habit.name.clone(),
            category: habit.category,
            streak: habit.record.streak(),
        })
        .collect();
    habit_streaks.sort_by(|a, b| b.streak.cmp(&a.streak).then_with(|| a.name.cmp(&b.name)));

    StatsResponse {
        last_7_days,
        habit_streaks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, HabitInput, Priority, TaskInput};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 16).unwrap()
    }

    fn habit(name: &str) -> HabitInput {
        HabitInput {
            name: name.to_string(),
            description: String::new(),
            category: Category::Fitness,
            frequency: "daily".to_string(),
        }
    }

    fn task(title: &str) -> TaskInput {
        TaskInput {
            title: title.to_string(),
            description: String::new(),
            priority: Priority::Medium,
            due_date: None,
        }
    }

    #[test]
    fn empty_tracker_dashboard_is_zeroed() {
        let dashboard = build_dashboard_at(&Tracker::default(), today());
        assert_eq!(dashboard.tasks_total, 0);
        assert_eq!(dashboard.habits_total, 0);
        assert_eq!(dashboard.longest_streak, 0);
        assert_eq!(dashboard.productivity_score, 0);
        assert_eq!(dashboard.task_progress, 0);
        assert!(dashboard.today_tasks.is_empty());
        assert!(!dashboard.quote.is_empty());
    }

    #[test]
    fn dashboard_scores_tasks_and_habits() {
        let t = today();
        let mut tracker = Tracker::default();
        let done = tracker.add_task(task("a"), t).unwrap().id;
        tracker.add_task(task("b"), t).unwrap();
        tracker.add_task(task("c"), t).unwrap();
        tracker.toggle_task(done, t).unwrap();

        tracker
            .insert_habit(habit("Run"), [t, t - Duration::days(1), t - Duration::days(2)], t)
            .unwrap();
        tracker.insert_habit(habit("Read"), [t - Duration::days(1)], t).unwrap();

        let dashboard = build_dashboard_at(&tracker, t);
        assert_eq!(dashboard.tasks_completed, 1);
        assert_eq!(dashboard.tasks_total, 3);
        assert_eq!(dashboard.habits_completed_today, 1);
        assert_eq!(dashboard.longest_streak, 3);
        assert_eq!(dashboard.task_progress, 33);
        // (33.33 + 50) / 2 rounds to 42
        assert_eq!(dashboard.productivity_score, 42);
        assert_eq!(dashboard.today_tasks.len(), 2);
    }

    #[test]
    fn stats_last_7_days_counts_completions() {
        let t = today();
        let mut tracker = Tracker::default();
        let id = tracker.add_task(task("a"), t).unwrap().id;
        tracker.toggle_task(id, t).unwrap();
        tracker
            .insert_habit(habit("Run"), [t, t - Duration::days(2), t - Duration::days(9)], t)
            .unwrap();

        let stats = build_stats_at(&tracker, t);
        assert_eq!(stats.last_7_days.len(), 7);
        assert_eq!(stats.last_7_days[0].date, "2025-08-10");

        let last = &stats.last_7_days[6];
        assert_eq!(last.date, "2025-08-16");
        assert_eq!(last.weekday, "Sat");
        assert_eq!(last.tasks_completed, 1);
        assert_eq!(last.habits_completed, 1);

        let total: usize = stats.last_7_days.iter().map(|day| day.habits_completed).sum();
        assert_eq!(total, 2);
    }

    #[test]
    fn habit_streaks_sorted_descending() {
        let t = today();
        let mut tracker = Tracker::default();
        tracker.insert_habit(habit("Water"), [t], t).unwrap();
        tracker
            .insert_habit(habit("Read"), [t, t - Duration::days(1)], t)
            .unwrap();
        tracker.insert_habit(habit("Stretch"), [t], t).unwrap();

        let names: Vec<_> = build_stats_at(&tracker, t)
            .habit_streaks
            .into_iter()
            .map(|point| point.name)
            .collect();
        assert_eq!(names, vec!["Read", "Stretch", "Water"]);
    }
}
