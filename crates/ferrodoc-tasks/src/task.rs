//! Task descriptors and their builders.
//!
//! A [`Task`] records what should run and when, but nothing in this crate
//! schedules, dispatches or retries it. `retries` is stored for consumers.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TaskError};
use crate::schedule::Schedule;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Default,
    High,
    Max,
}

pub type Action = Arc<dyn Fn() + Send + Sync>;
pub type FailureHandler = Arc<dyn Fn(&(dyn StdError + 'static)) + Send + Sync>;

#[derive(Clone)]
pub struct Task {
    name: String,
    priority: Priority,
    retries: u32,
    schedule: Schedule,
    action: Action,
    on_failure: FailureHandler,
}

impl Task {
    pub fn builder() -> TaskBuilder {
        TaskBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn retries(&self) -> u32 {
        self.retries
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Invokes the stored action once on the caller's thread.
    pub fn run_action(&self) {
        (self.action)()
    }

    /// Hands `error` to the stored failure handler.
    pub fn report_failure(&self, error: &(dyn StdError + 'static)) {
        (self.on_failure)(error)
    }

    /// The serializable part of the task, without its callbacks.
    pub fn record(&self) -> TaskRecord {
        TaskRecord {
            name: self.name.clone(),
            priority: self.priority,
            retries: self.retries,
            schedule: self.schedule.clone(),
        }
    }
}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .field("retries", &self.retries)
            .field("schedule", &self.schedule)
            .finish_non_exhaustive()
    }
}

/// Plain-data view of a [`Task`], used for JSON input and output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub name: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub retries: u32,
    #[serde(default)]
    pub schedule: Schedule,
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskError;

    /// Builds a task with no-op callbacks.
    fn try_from(record: TaskRecord) -> Result<Self> {
        let mut builder = Task::builder();
        builder
            .name(record.name)
            .priority(record.priority)
            .retries(record.retries)
            .schedule(record.schedule);
        builder.build()
    }
}

pub struct TaskBuilder {
    name: String,
    priority: Priority,
    retries: u32,
    schedule: Schedule,
    action: Action,
    on_failure: FailureHandler,
}

impl Default for TaskBuilder {
    fn default() -> Self {
        Self {
            name: String::new(),
            priority: Priority::Default,
            retries: 0,
            schedule: Schedule::new(),
            action: Arc::new(|| {}),
            on_failure: Arc::new(|_: &(dyn StdError + 'static)| {}),
        }
    }
}

impl TaskBuilder {
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn priority(&mut self, priority: Priority) -> &mut Self {
        self.priority = priority;
        self
    }

    pub fn retries(&mut self, retries: u32) -> &mut Self {
        self.retries = retries;
        self
    }

    pub fn schedule(&mut self, schedule: Schedule) -> &mut Self {
        self.schedule = schedule;
        self
    }

    pub fn action(&mut self, action: impl Fn() + Send + Sync + 'static) -> &mut Self {
        self.action = Arc::new(action);
        self
    }

    pub fn on_failure(
        &mut self,
        handler: impl Fn(&(dyn StdError + 'static)) + Send + Sync + 'static,
    ) -> &mut Self {
        self.on_failure = Arc::new(handler);
        self
    }

    pub fn build(self) -> Result<Task> {
        if self.name.trim().is_empty() {
            return Err(TaskError::EmptyName);
        }
        log::debug!(
            "Built task '{}' ({:?}, {} retries, {} moments)",
            self.name,
            self.priority,
            self.retries,
            self.schedule.len()
        );
        Ok(Task {
            name: self.name,
            priority: self.priority,
            retries: self.retries,
            schedule: self.schedule,
            action: self.action,
            on_failure: self.on_failure,
        })
    }
}

/// Collects tasks in declaration order.
#[derive(Debug, Default)]
pub struct TasksBuilder {
    tasks: Vec<Task>,
}

impl TasksBuilder {
    pub fn task(
        &mut self,
        init: impl FnOnce(&mut TaskBuilder) -> Result<()>,
    ) -> Result<&mut Self> {
        let mut builder = Task::builder();
        init(&mut builder)?;
        self.tasks.push(builder.build()?);
        Ok(self)
    }

    pub fn build(self) -> Vec<Task> {
        self.tasks
    }
}

/// Builds a task list in one expression.
pub fn tasks(init: impl FnOnce(&mut TasksBuilder) -> Result<()>) -> Result<Vec<Task>> {
    let mut builder = TasksBuilder::default();
    init(&mut builder)?;
    Ok(builder.build())
}
