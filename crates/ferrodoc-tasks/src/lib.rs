//! # ferrodoc Tasks
//!
//! Declarative task-list descriptors: a name, a [`Priority`], a retry count,
//! a weekly [`Schedule`] and two stored callbacks.
//!
//! This crate only describes tasks. There is no scheduler, executor or retry
//! loop behind it; consumers decide what to do with the descriptors.
//!
//! ```
//! use ferrodoc_tasks::{Priority, Schedule, Weekday, tasks};
//!
//! let list = tasks(|t| {
//!     t.task(|task| {
//!         task.name("Backup")
//!             .priority(Priority::High)
//!             .schedule(
//!                 Schedule::range_on(Weekday::Monday..=Weekday::Friday, "12:00")?
//!                     + Schedule::mid_day(Weekday::Saturday),
//!             );
//!         Ok(())
//!     })?;
//!     Ok(())
//! })?;
//!
//! assert_eq!(list[0].schedule().len(), 6);
//! # Ok::<(), ferrodoc_tasks::TaskError>(())
//! ```

use std::path::Path;

pub mod error;
pub mod schedule;
pub mod task;

pub use error::{Result, TaskError};
pub use schedule::{Schedule, ScheduleMoment, TimeOfDay, Weekday};
pub use task::{Priority, Task, TaskBuilder, TaskRecord, TasksBuilder, tasks};

/// Parses a JSON array of task records into tasks with no-op callbacks.
pub fn load_records(json: &str) -> Result<Vec<Task>> {
    let records: Vec<TaskRecord> = serde_json::from_str(json)?;
    let tasks = records
        .into_iter()
        .map(Task::try_from)
        .collect::<Result<Vec<_>>>()?;
    log::info!("Loaded {} task records", tasks.len());
    Ok(tasks)
}

/// Reads and parses a JSON task list from disk.
pub fn load_records_file(path: &Path) -> Result<Vec<Task>> {
    let content = std::fs::read_to_string(path)?;
    log::info!("Reading task records from {:?}", path);
    load_records(&content)
}
