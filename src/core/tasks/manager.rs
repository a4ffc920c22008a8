use std::sync::{
    mpsc,
    Arc,
};

use tokio::runtime::Runtime;
use tracing::debug;

use super::TaskResult;
use crate::core::{
    fetch::Activation,
    http::PokemonSource,
    PokedetailError,
};

type RepaintCallback = Arc<dyn Fn() + Send + Sync>;

/// Runs network work off the UI thread. Results come back through a channel
/// the UI drains once per frame.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    source: Arc<dyn PokemonSource>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
    repaint: Option<RepaintCallback>,
}

impl TaskManager {
    pub fn new(source: Arc<dyn PokemonSource>) -> Result<Self, PokedetailError> {
        let runtime = Arc::new(Runtime::new()?);

        let (sender, receiver) = mpsc::channel();

        Ok(Self { runtime, source, receiver, sender, repaint: None })
    }

    /// Called after every result is queued, typically `egui::Context::request_repaint`.
    pub fn set_repaint_callback(&mut self, callback: impl Fn() + Send + Sync + 'static) {
        self.repaint = Some(Arc::new(callback));
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Option<RepaintCallback>) {
        (self.sender.clone(), self.repaint.clone())
    }

    /// Issues exactly one request for the activation. Superseded requests are
    /// not aborted; the controller drops their results by generation.
    pub fn fetch_pokemon(&self, activation: Activation) {
        let (sender, repaint) = self.task_context();
        let source = self.source.clone();

        self.runtime.spawn(async move {
            let Activation { generation, identifier } = activation;
            let result = source.fetch_pokemon(&identifier).await;

            let task = TaskResult::PokemonFetched { generation, identifier, result };
            debug!(task = task.task_type(), generation, "Task finished");

            let _ = sender.send(task);
            if let Some(repaint) = repaint {
                repaint();
            }
        });
    }

    #[cfg(test)]
    pub(crate) fn wait_for_result(&self, timeout: std::time::Duration) -> Option<TaskResult> {
        self.receiver.recv_timeout(timeout).ok()
    }
}
