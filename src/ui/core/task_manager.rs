use super::actions::Action;
use crate::backend::{Backend, BackendError, CreateTaskArgs, TaskId, UpdateTaskArgs};
use crate::constants::{
    ERROR_ADD_FAILED, ERROR_CLEAR_FAILED, ERROR_DELETE_FAILED, ERROR_FETCH_FAILED, ERROR_TOGGLE_FAILED,
    ERROR_UPDATE_FAILED,
};
use futures::future::join_all;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type JobId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: Instant,
}

/// A job whose future has completed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishedJob {
    pub id: JobId,
    pub description: String,
    pub elapsed: Duration,
}

/// Runs remote operations off the event loop and reports their outcome as
/// actions on an unbounded channel.
pub struct TaskManager {
    tasks: HashMap<JobId, BackgroundTask>,
    next_job_id: JobId,
    action_sender: mpsc::UnboundedSender<Action>,
    backend: Arc<dyn Backend>,
}

impl TaskManager {
    pub fn new(backend: Arc<dyn Backend>) -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_job_id: 1,
                action_sender: tx,
                backend,
            },
            rx,
        )
    }

    /// Spawn a remote operation. On success the returned action is sent; on
    /// failure the detailed error is logged and `error_message` is reported.
    pub fn spawn_operation<Fut>(&mut self, description: String, error_message: &'static str, operation: Fut) -> JobId
    where
        Fut: Future<Output = Result<Action, BackendError>> + Send + 'static,
    {
        let job_id = self.next_job_id;
        self.next_job_id += 1;

        let action_sender = self.action_sender.clone();
        let desc_for_task = description.clone();

        let handle = tokio::spawn(async move {
            let action = match operation.await {
                Ok(action) => action,
                Err(e) => {
                    log::error!("{} failed: {}", desc_for_task, e);
                    Action::OperationFailed(error_message.to_string())
                }
            };
            let _ = action_sender.send(action);
        });

        let task = BackgroundTask {
            handle,
            description,
            started_at: Instant::now(),
        };

        self.tasks.insert(job_id, task);
        job_id
    }

    pub fn spawn_fetch(&mut self) -> JobId {
        let backend = Arc::clone(&self.backend);
        self.spawn_operation("Fetch tasks".to_string(), ERROR_FETCH_FAILED, async move {
            let tasks = backend.list_tasks().await?;
            Ok(Action::TasksFetched(tasks))
        })
    }

    pub fn spawn_create(&mut self, title: String) -> JobId {
        let backend = Arc::clone(&self.backend);
        let description = format!("Create task '{}'", title);
        self.spawn_operation(description, ERROR_ADD_FAILED, async move {
            let task = backend.create_task(CreateTaskArgs::new(title)).await?;
            Ok(Action::TaskCreated(task))
        })
    }

    pub fn spawn_toggle(&mut self, id: TaskId, args: UpdateTaskArgs) -> JobId {
        let backend = Arc::clone(&self.backend);
        let description = format!("Toggle task {}", id);
        self.spawn_operation(description, ERROR_TOGGLE_FAILED, async move {
            let task = backend.update_task(&id, args).await?;
            Ok(Action::TaskUpdated(task))
        })
    }

    pub fn spawn_rename(&mut self, id: TaskId, title: String) -> JobId {
        let backend = Arc::clone(&self.backend);
        let description = format!("Rename task {}", id);
        self.spawn_operation(description, ERROR_UPDATE_FAILED, async move {
            let args = UpdateTaskArgs {
                title: Some(title),
                completed: None,
            };
            let task = backend.update_task(&id, args).await?;
            Ok(Action::EditSaved(task))
        })
    }

    pub fn spawn_delete(&mut self, id: TaskId) -> JobId {
        let backend = Arc::clone(&self.backend);
        let description = format!("Delete task {}", id);
        self.spawn_operation(description, ERROR_DELETE_FAILED, async move {
            backend.delete_task(&id).await?;
            Ok(Action::TaskDeleted(id))
        })
    }

    /// Delete every id concurrently. The batch only counts as done when all
    /// deletes succeed; otherwise the first error is reported.
    pub fn spawn_clear(&mut self, ids: Vec<TaskId>) -> JobId {
        let backend = Arc::clone(&self.backend);
        let description = format!("Clear {} completed tasks", ids.len());
        self.spawn_operation(description, ERROR_CLEAR_FAILED, async move {
            let results = join_all(ids.iter().map(|id| backend.delete_task(id))).await;

            let mut first_error = None;
            for (id, result) in ids.iter().zip(results) {
                if let Err(e) = result {
                    log::warn!("Delete of task {} failed during clear: {}", id, e);
                    first_error.get_or_insert(e);
                }
            }

            match first_error {
                Some(e) => Err(e),
                None => Ok(Action::CompletedCleared(ids)),
            }
        })
    }

    /// Drop bookkeeping for finished tasks, reporting how long each one ran
    pub fn cleanup_finished_tasks(&mut self) -> Vec<FinishedJob> {
        let finished: Vec<JobId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        finished
            .into_iter()
            .filter_map(|id| {
                self.tasks.remove(&id).map(|task| FinishedJob {
                    id,
                    description: task.description,
                    elapsed: task.started_at.elapsed(),
                })
            })
            .collect()
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
