use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::TableRow;
use crate::error::{AppError, Result};

pub const MIN_EXERTION: i32 = 1;
pub const MAX_EXERTION: i32 = 10;
pub const DEFAULT_EXERTION: i32 = 7;
/// How many set slots the train form offers per exercise.
pub const MAX_SETS_PER_EXERCISE: i32 = 6;
pub const WEIGHT_STEP_LB: f64 = 0.5;

/// Deserialize free-text notes, treating a missing field as empty.
fn deserialize_notes<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetLog {
    #[serde(rename = "Usuario")]
    pub username: String,
    #[serde(rename = "Fecha")]
    pub date: NaiveDate,
    #[serde(rename = "Día")]
    pub day: String,
    #[serde(rename = "Ejercicio")]
    pub exercise: String,
    #[serde(rename = "Serie")]
    pub set_number: i32,
    #[serde(rename = "Reps")]
    pub reps: i32,
    #[serde(rename = "Peso (lb)")]
    pub weight_lb: f64,
    #[serde(rename = "RPE")]
    pub exertion: i32,
    #[serde(rename = "Notas", default, deserialize_with = "deserialize_notes")]
    pub notes: String,
}

impl SetLog {
    /// Check the numeric ranges a logged set must satisfy.
    pub fn validate(&self) -> Result<()> {
        if self.set_number < 1 {
            return Err(AppError::Validation(
                "Set number must be at least 1".to_string(),
            ));
        }
        if self.reps < 1 {
            return Err(AppError::Validation("Reps must be at least 1".to_string()));
        }
        if !self.weight_lb.is_finite() || self.weight_lb < 0.0 {
            return Err(AppError::Validation(
                "Weight must be zero or more".to_string(),
            ));
        }
        if !(MIN_EXERTION..=MAX_EXERTION).contains(&self.exertion) {
            return Err(AppError::Validation(format!(
                "RPE must be between {} and {}",
                MIN_EXERTION, MAX_EXERTION
            )));
        }
        Ok(())
    }
}

impl TableRow for SetLog {
    const HEADERS: &'static [&'static str] = &[
        "Usuario",
        "Fecha",
        "Día",
        "Ejercicio",
        "Serie",
        "Reps",
        "Peso (lb)",
        "RPE",
        "Notas",
    ];
}

/// Train form submission. Numeric fields arrive as raw text so that a
/// malformed value becomes a validation message instead of a rejected form.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateSetLog {
    pub date: String,
    pub day: String,
    pub exercise: String,
    pub set_number: String,
    pub reps: String,
    pub weight_lb: String,
    pub exertion: String,
    #[serde(deserialize_with = "deserialize_notes")]
    pub notes: String,
    pub rest: Option<String>,
}

fn parse_field<T: FromStr>(value: &str, message: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::Validation(message.to_string()))
}

impl CreateSetLog {
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        self.date.trim().parse().ok()
    }

    /// Requested rest duration, if the field holds a whole number.
    pub fn rest_seconds(&self) -> Option<u32> {
        self.rest.as_deref().and_then(|r| r.trim().parse().ok())
    }

    pub fn into_set_log(self, username: &str) -> Result<SetLog> {
        Ok(SetLog {
            username: username.to_string(),
            date: parse_field(&self.date, "Date must be YYYY-MM-DD")?,
            set_number: parse_field(&self.set_number, "Set number must be a whole number")?,
            reps: parse_field(&self.reps, "Reps must be a whole number")?,
            weight_lb: parse_field(&self.weight_lb, "Weight must be a number")?,
            exertion: parse_field(&self.exertion, "RPE must be a whole number")?,
            day: self.day,
            exercise: self.exercise,
            notes: self.notes,
        })
    }
}

/// One point of an exercise's weight-over-time chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressPoint {
    pub date: NaiveDate,
    pub weight_lb: f64,
}

impl From<&SetLog> for ProgressPoint {
    fn from(log: &SetLog) -> Self {
        Self {
            date: log.date,
            weight_lb: log.weight_lb,
        }
    }
}
