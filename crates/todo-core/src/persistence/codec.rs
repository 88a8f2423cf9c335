//! Task List Codec
//!
//! The slot holds a compact JSON array of `{"title":..,"completed":..}`.

use serde::Serialize;
use tracing::warn;

use crate::domain::{DomainResult, Task, TaskRecord};

/// Borrowed mirror of `TaskRecord` so encoding never clones titles
#[derive(Serialize)]
struct RecordRef<'a> {
    title: &'a str,
    completed: bool,
}

pub fn encode(tasks: &[Task]) -> DomainResult<String> {
    let records: Vec<RecordRef<'_>> = tasks
        .iter()
        .map(|t| RecordRef {
            title: &t.title,
            completed: t.completed,
        })
        .collect();
    Ok(serde_json::to_string(&records)?)
}

pub fn decode(raw: &str) -> DomainResult<Vec<TaskRecord>> {
    Ok(serde_json::from_str(raw)?)
}

/// Records to start from given the raw slot value. Missing or invalid data yields an empty list.
pub fn load_records(raw: Option<&str>) -> Vec<TaskRecord> {
    match raw.map(decode) {
        Some(Ok(records)) => records,
        Some(Err(err)) => {
            warn!(error = %err, "discarding unreadable task list");
            Vec::new()
        }
        None => Vec::new(),
    }
}
