//! Background animation file reads
//!
//! Reads and parses description files on a dedicated thread so the event
//! loop never blocks on disk. Every request carries the [`LoadTicket`] it was
//! issued under; the controller decides whether a result is still wanted.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::debug;

use crate::animation::AnimationDescription;
use crate::controller::LoadTicket;
use crate::error::Result;

/// A file read queued on the worker.
#[derive(Debug, Clone)]
pub struct LoadRequest {
    pub ticket: LoadTicket,
    pub path: PathBuf,
}

/// Outcome of one file read.
#[derive(Debug)]
pub struct LoadResult {
    /// Ticket the read was requested under
    pub ticket: LoadTicket,
    /// The file that was read
    pub path: PathBuf,
    /// Parsed description, or the reason it could not be read
    pub result: Result<AnimationDescription>,
}

/// Worker loop that processes read requests.
///
/// Exits when the request channel is closed (all senders dropped).
pub fn worker_loop(
    request_rx: Receiver<LoadRequest>,
    result_tx: Sender<LoadResult>,
    loader: impl Fn(&PathBuf) -> Result<AnimationDescription>,
) {
    while let Ok(LoadRequest { ticket, path }) = request_rx.recv() {
        debug!(generation = ticket.generation(), path = %path.display(), "reading animation");
        let result = loader(&path);
        // Ignore send errors (main thread may have exited)
        let _ = result_tx.send(LoadResult {
            ticket,
            path,
            result,
        });
    }
}

/// Handle to the background reader thread.
pub struct FileLoader {
    request_tx: Option<Sender<LoadRequest>>,
    result_rx: Receiver<LoadResult>,
    worker: Option<JoinHandle<()>>,
}

impl FileLoader {
    /// Spawn a reader that parses files with [`AnimationDescription::parse`].
    pub fn spawn() -> Self {
        Self::spawn_with(|path: &PathBuf| AnimationDescription::parse(path))
    }

    /// Spawn a reader with a custom load function.
    pub fn spawn_with<L>(loader: L) -> Self
    where
        L: Fn(&PathBuf) -> Result<AnimationDescription> + Send + 'static,
    {
        let (request_tx, request_rx) = mpsc::channel();
        let (result_tx, result_rx) = mpsc::channel();
        let worker = thread::spawn(move || worker_loop(request_rx, result_tx, loader));

        Self {
            request_tx: Some(request_tx),
            result_rx,
            worker: Some(worker),
        }
    }

    /// Queue a read of `path` under `ticket`.
    pub fn request(&self, ticket: LoadTicket, path: impl Into<PathBuf>) {
        if let Some(tx) = &self.request_tx {
            let _ = tx.send(LoadRequest {
                ticket,
                path: path.into(),
            });
        }
    }

    /// Next finished read, if one is ready.
    pub fn try_recv(&self) -> Option<LoadResult> {
        self.result_rx.try_recv().ok()
    }

    /// Wait up to `timeout` for the next finished read.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<LoadResult> {
        match self.result_rx.recv_timeout(timeout) {
            Ok(result) => Some(result),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }
}

impl Drop for FileLoader {
    fn drop(&mut self) {
        // Closing the request channel ends the worker loop
        self.request_tx.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
