use crate::errors::TrackerError;
use crate::models::{
    Habit, HabitAction, HabitCommand, HabitInput, Priority, PriorityFilter, StatusFilter, Task,
    TaskFilter, TaskInput,
};
use crate::streak::{parse_date, HabitRecord};
use chrono::NaiveDate;
use tracing::info;

const TODAY_TASK_LIMIT: usize = 5;

/// Every task and habit known to the process. Ids are never reused.
#[derive(Debug, Clone)]
pub struct Tracker {
    tasks: Vec<Task>,
    habits: Vec<Habit>,
    next_task_id: u64,
    next_habit_id: u64,
}

impl Default for Tracker {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            habits: Vec::new(),
            next_task_id: 1,
            next_habit_id: 1,
        }
    }
}

struct ValidTask {
    title: String,
    description: String,
    due_date: Option<NaiveDate>,
}

fn validate_task(input: &TaskInput) -> Result<ValidTask, TrackerError> {
    let title = input.title.trim();
    if title.is_empty() {
        return Err(TrackerError::MissingTitle);
    }

    let due_date = match input.due_date.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(value) => Some(parse_date(value)?),
    };

    Ok(ValidTask {
        title: title.to_string(),
        description: input.description.trim().to_string(),
        due_date,
    })
}

fn validate_habit(input: &HabitInput) -> Result<(String, String), TrackerError> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(TrackerError::MissingName);
    }

    let frequency = input.frequency.trim();
    if !frequency.eq_ignore_ascii_case("daily") {
        return Err(TrackerError::UnsupportedFrequency(frequency.to_string()));
    }

    Ok((name.to_string(), input.description.trim().to_string()))
}

impl Tracker {
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn task(&self, id: u64) -> Result<&Task, TrackerError> {
        self.tasks
            .iter()
            .find(|task| task.id == id)
            .ok_or(TrackerError::TaskNotFound(id))
    }

    pub fn habit(&self, id: u64) -> Result<&Habit, TrackerError> {
        self.habits
            .iter()
            .find(|habit| habit.id == id)
            .ok_or(TrackerError::HabitNotFound(id))
    }

    fn task_mut(&mut self, id: u64) -> Result<&mut Task, TrackerError> {
        self.tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(TrackerError::TaskNotFound(id))
    }

    fn habit_mut(&mut self, id: u64) -> Result<&mut Habit, TrackerError> {
        self.habits
            .iter_mut()
            .find(|habit| habit.id == id)
            .ok_or(TrackerError::HabitNotFound(id))
    }

    pub fn add_task(&mut self, input: TaskInput, today: NaiveDate) -> Result<&Task, TrackerError> {
        let valid = validate_task(&input)?;
        let id = self.next_task_id;
        self.next_task_id += 1;

        self.tasks.push(Task {
            id,
            title: valid.title,
            description: valid.description,
            priority: input.priority,
            due_date: valid.due_date,
            completed: false,
            created_at: today,
            completed_on: None,
        });
        info!(task_id = id, "task added");

        self.task(id)
    }

    pub fn update_task(&mut self, id: u64, input: TaskInput) -> Result<&Task, TrackerError> {
        let valid = validate_task(&input)?;
        let task = self.task_mut(id)?;
        task.title = valid.title;
        task.description = valid.description;
        task.priority = input.priority;
        task.due_date = valid.due_date;
        info!(task_id = id, "task updated");

        self.task(id)
    }

    pub fn toggle_task(&mut self, id: u64, today: NaiveDate) -> Result<&Task, TrackerError> {
        let task = self.task_mut(id)?;
        task.completed = !task.completed;
        task.completed_on = task.completed.then_some(today);
        info!(task_id = id, completed = task.completed, "task toggled");

        self.task(id)
    }

    pub fn delete_task(&mut self, id: u64) -> Result<(), TrackerError> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return Err(TrackerError::TaskNotFound(id));
        }
        info!(task_id = id, "task deleted");
        Ok(())
    }

    pub fn filtered_tasks(&self, filter: TaskFilter) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| match filter.status {
                StatusFilter::All => true,
                StatusFilter::Completed => task.completed,
                StatusFilter::Pending => !task.completed,
            })
            .filter(|task| match filter.priority {
                PriorityFilter::All => true,
                PriorityFilter::Low => task.priority == Priority::Low,
                PriorityFilter::Medium => task.priority == Priority::Medium,
                PriorityFilter::High => task.priority == Priority::High,
            })
            .collect()
    }

    /// Tasks due today plus pending tasks without a due date.
    pub fn today_tasks(&self, today: NaiveDate) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| {
                task.due_date == Some(today) || (!task.completed && task.due_date.is_none())
            })
            .take(TODAY_TASK_LIMIT)
            .collect()
    }

    pub fn add_habit(&mut self, input: HabitInput, today: NaiveDate) -> Result<&Habit, TrackerError> {
        let (name, description) = validate_habit(&input)?;
        let id = self.next_habit_id;
        self.next_habit_id += 1;

        self.habits.push(Habit {
            id,
            name,
            description,
            category: input.category,
            record: HabitRecord::new(today),
        });
        info!(habit_id = id, "habit added");

        self.habit(id)
    }

    /// Seeds a habit with existing completions.
    pub fn insert_habit(
        &mut self,
        input: HabitInput,
        dates: impl IntoIterator<Item = NaiveDate>,
        today: NaiveDate,
    ) -> Result<&Habit, TrackerError> {
        let id = self.add_habit(input, today)?.id;
        let habit = self.habit_mut(id)?;
        habit.record = HabitRecord::with_dates(dates, today);
        Ok(habit)
    }

    pub fn update_habit(&mut self, id: u64, input: HabitInput) -> Result<&Habit, TrackerError> {
        let (name, description) = validate_habit(&input)?;
        let habit = self.habit_mut(id)?;
        habit.name = name;
        habit.description = description;
        habit.category = input.category;
        info!(habit_id = id, "habit updated");

        self.habit(id)
    }

    pub fn delete_habit(&mut self, id: u64) -> Result<(), TrackerError> {
        let before = self.habits.len();
        self.habits.retain(|habit| habit.id != id);
        if self.habits.len() == before {
            return Err(TrackerError::HabitNotFound(id));
        }
        info!(habit_id = id, "habit deleted");
        Ok(())
    }

    pub fn apply(&mut self, command: HabitCommand, today: NaiveDate) -> Result<&Habit, TrackerError> {
        let day = match command.date.as_deref() {
            Some(value) => parse_date(value)?,
            None => today,
        };

        let habit = self.habit_mut(command.habit_id)?;
        habit.record.refresh(today);
        match command.action {
            HabitAction::MarkCompleted => habit.record.mark_completed(day, today)?,
            HabitAction::Unmark => habit.record.unmark(day, today),
            HabitAction::Toggle => {
                habit.record.toggle(day, today)?;
            }
        }
        info!(
            habit_id = habit.id,
            action = ?command.action,
            %day,
            streak = habit.record.streak(),
            "habit command applied"
        );

        Ok(habit)
    }

    pub fn refresh_streaks(&mut self, today: NaiveDate) {
        for habit in &mut self.habits {
            habit.record.refresh(today);
        }
    }
}
