use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use uuid::Uuid;

pub type HabitId = Uuid;

/// Explicit mark recorded for a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayMark {
    Done,
    Missed,
}

impl DayMark {
    pub fn from_done(done: bool) -> Self {
        if done { Self::Done } else { Self::Missed }
    }
}

/// Persisted habit record. `status` keys serialize as `YYYY-MM-DD`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: HabitId,
    pub name: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub status: BTreeMap<NaiveDate, DayMark>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Habit {
    pub fn mark(&self, date: NaiveDate) -> Option<DayMark> {
        self.status.get(&date).copied()
    }

    pub fn is_done(&self, date: NaiveDate) -> bool {
        self.mark(date) == Some(DayMark::Done)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HabitData {
    pub habits: Vec<Habit>,
}

/// Display state of one habit on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayState {
    Disabled,
    Done,
    Missed,
    Today,
    Future,
}

#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub year: Option<String>,
    pub month: Option<String>,
}

/// `startDay` arrives either as a number or as a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DayInput {
    Number(i64),
    Fraction(f64),
    Text(String),
}

impl DayInput {
    pub fn parse(&self) -> Option<i64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Fraction(value) if value.is_finite() => Some(value.trunc() as i64),
            Self::Fraction(_) => None,
            Self::Text(text) => parse_leading_int(text),
        }
    }
}

/// Reads an optional sign and the leading run of digits, ignoring whatever
/// follows, so `"3abc"` is 3 and `"1.5"` is 1.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let value: i64 = rest[..digits].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// A JSON number with no fractional part that fits in `i32`; anything else is `None`.
pub fn integral(value: &Value) -> Option<i32> {
    if let Some(int) = value.as_i64() {
        return i32::try_from(int).ok();
    }
    let float = value.as_f64()?;
    if float.fract() != 0.0 || float < f64::from(i32::MIN) || float > f64::from(i32::MAX) {
        return None;
    }
    Some(float as i32)
}

/// JavaScript truthiness: `null`, `false`, `0`, `NaN` and `""` are false.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHabitRequest {
    pub name: Option<String>,
    pub start_day: Option<DayInput>,
    pub year: Option<Value>,
    pub month: Option<Value>,
    pub goal: Option<String>,
}

impl CreateHabitRequest {
    pub fn year(&self) -> Option<i32> {
        self.year.as_ref().and_then(integral)
    }

    pub fn month(&self) -> Option<i32> {
        self.month.as_ref().and_then(integral)
    }
}

#[derive(Debug, Deserialize)]
pub struct MarkRequest {
    pub date: Option<String>,
    pub done: Option<Value>,
}

impl MarkRequest {
    /// Absent or falsy `done` marks the day missed.
    pub fn done(&self) -> bool {
        self.done.as_ref().is_some_and(truthy)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitMonthView {
    pub id: HabitId,
    pub name: String,
    pub goal: String,
    pub start_date: NaiveDate,
    pub start_day: u32,
    pub days: BTreeMap<String, DayState>,
    pub progress: u8,
    pub streak: u32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthResponse {
    pub year: i32,
    pub month: u32,
    pub days_in_month: u32,
    pub habits: Vec<HabitMonthView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub year: i32,
    pub month: u32,
    pub done: u32,
    pub missed: u32,
    pub pending: u32,
    pub habit_count: usize,
    pub average_progress: u8,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OkResponse {
    pub ok: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub deleted: bool,
}
