use crate::models::{DayMark, Habit, HabitData, HabitId};
use chrono::{NaiveDate, Utc};
use std::fmt;
use uuid::Uuid;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    NotFound(HabitId),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "habit not found: {id}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl HabitData {
    pub fn create(
        &mut self,
        name: impl Into<String>,
        start_date: NaiveDate,
        goal: impl Into<String>,
    ) -> Habit {
        let now = Utc::now();
        let habit = Habit {
            id: Uuid::new_v4(),
            name: name.into(),
            start_date,
            goal: goal.into(),
            status: Default::default(),
            created_at: now,
            updated_at: now,
        };
        self.habits.push(habit.clone());
        habit
    }

    pub fn list(&self) -> &[Habit] {
        &self.habits
    }

    pub fn get(&self, id: HabitId) -> StoreResult<&Habit> {
        self.habits
            .iter()
            .find(|habit| habit.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Overwrites any earlier mark for `date`.
    pub fn mark_date(&mut self, id: HabitId, date: NaiveDate, done: bool) -> StoreResult<DayMark> {
        let habit = self
            .habits
            .iter_mut()
            .find(|habit| habit.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let mark = DayMark::from_done(done);
        habit.status.insert(date, mark);
        habit.updated_at = Utc::now();
        Ok(mark)
    }

    pub fn delete(&mut self, id: HabitId) -> StoreResult<Habit> {
        let index = self
            .habits
            .iter()
            .position(|habit| habit.id == id)
            .ok_or(StoreError::NotFound(id))?;
        Ok(self.habits.remove(index))
    }
}
