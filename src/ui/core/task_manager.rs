use super::actions::Action;
use crate::media;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// Runs work off the event loop and reports results back as [`Action`]s
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Read an image file in the background.
    ///
    /// Sends [`Action::ImageLoaded`] with the raw bytes, or
    /// [`Action::ImageLoadFailed`]. Decoding happens on the event loop.
    pub fn spawn_image_load(&mut self, path: PathBuf, max_bytes: usize) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();
        let description = format!("Load image {}", path.display());

        let handle = tokio::spawn(async move {
            let action = match media::read_image_file(&path, max_bytes).await {
                Ok(bytes) => Action::ImageLoaded { path, bytes },
                Err(e) => Action::ImageLoadFailed {
                    path,
                    error: e.to_string(),
                },
            };
            let _ = action_sender.send(action);
        });

        log::debug!("Task {}: {}", task_id, description);
        self.tasks.insert(
            task_id,
            BackgroundTask {
                id: task_id,
                handle,
                description,
                started_at: std::time::Instant::now(),
            },
        );
        task_id
    }

    /// Forget tasks that have finished, returning their ids
    pub fn cleanup_finished_tasks(&mut self) -> Vec<TaskId> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        for id in &finished {
            if let Some(task) = self.tasks.remove(id) {
                log::debug!(
                    "Task {}: '{}' finished after {:?}",
                    task.id,
                    task.description,
                    task.started_at.elapsed()
                );
            }
        }
        finished
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}
