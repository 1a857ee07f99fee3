#![allow(dead_code)]

use async_trait::async_trait;
use checklist::backend::{Backend, BackendError, CreateTaskArgs, Task, TaskId, UpdateTaskArgs};
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Mutex;

/// One recorded remote call
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Create(CreateTaskArgs),
    Update(TaskId, UpdateTaskArgs),
    Delete(TaskId),
}

/// In-memory stand-in for the task server
pub struct FakeBackend {
    tasks: Mutex<Vec<Task>>,
    calls: Mutex<Vec<Call>>,
    failing_deletes: Mutex<Vec<TaskId>>,
    fail_everything: AtomicBool,
    next_id: AtomicI64,
}

impl FakeBackend {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Mutex::new(tasks),
            calls: Mutex::new(Vec::new()),
            failing_deletes: Mutex::new(Vec::new()),
            fail_everything: AtomicBool::new(false),
            next_id: AtomicI64::new(100),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn server_tasks(&self) -> Vec<Task> {
        self.tasks.lock().unwrap().clone()
    }

    pub fn fail_delete_of(&self, id: TaskId) {
        self.failing_deletes.lock().unwrap().push(id);
    }

    pub fn fail_everything(&self) {
        self.fail_everything.store(true, Ordering::SeqCst);
    }

    fn record(&self, call: Call) -> Result<(), BackendError> {
        self.calls.lock().unwrap().push(call);
        if self.fail_everything.load(Ordering::SeqCst) {
            return Err(BackendError::Network("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl Backend for FakeBackend {
    fn backend_type(&self) -> &str {
        "fake"
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, BackendError> {
        self.record(Call::List)?;
        Ok(self.server_tasks())
    }

    async fn create_task(&self, args: CreateTaskArgs) -> Result<Task, BackendError> {
        self.record(Call::Create(args.clone()))?;
        let task = Task {
            id: TaskId::Number(self.next_id.fetch_add(1, Ordering::SeqCst)),
            title: args.title,
            completed: args.completed,
        };
        self.tasks.lock().unwrap().push(task.clone());
        Ok(task)
    }

    async fn update_task(&self, id: &TaskId, args: UpdateTaskArgs) -> Result<Task, BackendError> {
        self.record(Call::Update(id.clone(), args.clone()))?;
        let mut tasks = self.tasks.lock().unwrap();
        let task = tasks.iter_mut().find(|t| &t.id == id).ok_or(BackendError::Status {
            status: 404,
            body: "Not found".to_string(),
        })?;
        if let Some(title) = args.title {
            task.title = title;
        }
        if let Some(completed) = args.completed {
            task.completed = completed;
        }
        Ok(task.clone())
    }

    async fn delete_task(&self, id: &TaskId) -> Result<(), BackendError> {
        self.record(Call::Delete(id.clone()))?;
        if self.failing_deletes.lock().unwrap().contains(id) {
            return Err(BackendError::Status {
                status: 500,
                body: "Internal Server Error".to_string(),
            });
        }
        self.tasks.lock().unwrap().retain(|t| &t.id != id);
        Ok(())
    }
}

pub fn task(id: i64, title: &str, completed: bool) -> Task {
    Task {
        id: TaskId::Number(id),
        title: title.to_string(),
        completed,
    }
}

/// Three tasks, the middle one pending
pub fn sample_tasks() -> Vec<Task> {
    vec![
        task(1, "Write report", true),
        task(2, "Buy milk", false),
        task(3, "Call plumber", true),
    ]
}
