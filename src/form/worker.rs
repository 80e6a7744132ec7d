//! Background submit worker.
//!
//! The UI thread never blocks on the network. Submissions go to a dedicated
//! thread that owns a single-threaded tokio runtime; outcomes come back over
//! a channel that the event loop drains each iteration. Dropping the worker
//! abandons any request still in flight.

use super::state::{ContactForm, Submission};
use super::transport::{SubmitResponse, SubmitTransport, TransportError};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tokio::sync::oneshot;
use tracing::{debug, error, info};

type Outcome = Result<SubmitResponse, TransportError>;

/// Owns the worker thread. Dropping it closes the channel and joins.
pub struct SubmitWorker {
    commands: Option<Sender<Submission>>,
    /// Dropped to cancel the request in flight.
    shutdown: Option<oneshot::Sender<()>>,
    outcomes: Receiver<Outcome>,
    handle: Option<JoinHandle<()>>,
}

impl SubmitWorker {
    /// Start the worker thread.
    ///
    /// # Errors
    ///
    /// Fails if the tokio runtime or the thread cannot be created.
    pub fn spawn(transport: Arc<dyn SubmitTransport>) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let (command_tx, command_rx) = mpsc::channel::<Submission>();
        let (outcome_tx, outcome_rx) = mpsc::channel::<Outcome>();
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        let handle = thread::Builder::new()
            .name("folio-submit".to_string())
            .spawn(move || {
                info!("submit worker started");
                while let Ok(submission) = command_rx.recv() {
                    let outcome = runtime.block_on(async {
                        tokio::select! {
                            outcome = transport.submit(&submission) => Some(outcome),
                            _ = &mut shutdown_rx => None,
                        }
                    });
                    let Some(outcome) = outcome else {
                        info!("submit abandoned on shutdown");
                        break;
                    };
                    if outcome_tx.send(outcome).is_err() {
                        debug!("outcome receiver gone, discarding result");
                        break;
                    }
                }
                info!("submit worker stopped");
            })?;

        Ok(Self {
            commands: Some(command_tx),
            shutdown: Some(shutdown_tx),
            outcomes: outcome_rx,
            handle: Some(handle),
        })
    }

    /// Begin a submit on `form` and hand the payload to the worker.
    ///
    /// Returns true if a request was dispatched. Nothing is sent while the
    /// form is already sending or fails validation.
    pub fn submit(&self, form: &mut ContactForm) -> bool {
        let Some(submission) = form.begin_submit() else {
            return false;
        };
        let sent = self
            .commands
            .as_ref()
            .is_some_and(|tx| tx.send(submission).is_ok());
        if !sent {
            error!("submit worker is gone");
            form.complete_submit(Err(TransportError::WorkerStopped));
        }
        sent
    }

    /// Apply any finished outcomes to `form`. Returns true if one was applied.
    pub fn poll(&self, form: &mut ContactForm) -> bool {
        let mut applied = false;
        loop {
            match self.outcomes.try_recv() {
                Ok(outcome) => applied |= form.complete_submit(outcome),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if form.complete_submit(Err(TransportError::WorkerStopped)) {
                        error!("submit worker exited with a request in flight");
                        applied = true;
                    }
                    break;
                }
            }
        }
        applied
    }
}

impl Drop for SubmitWorker {
    fn drop(&mut self) {
        self.commands.take();
        self.shutdown.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                error!("submit worker panicked");
            }
        }
    }
}

impl std::fmt::Debug for SubmitWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmitWorker")
            .field("running", &self.commands.is_some())
            .finish()
    }
}
