//! Event loop for a [`SelectionWatcher`].
//!
//! The watcher runs on a single task and processes one event at a time, like
//! a UI event loop. Hosts post events through a cloneable [`WatcherHandle`];
//! delays the watcher asks for become timer tasks that post their event back
//! into the same queue when they fire.
//!
//! The loop ends once every handle is dropped and no timer is pending, and
//! hands the watcher back to the caller.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, trace};

use crate::host::{Clock, HostPage, PrivilegeLayer};
use crate::managers::selection_watcher::{
    Disposition, HostFault, ScheduledEvent, SelectionWatcher, WatcherEvent,
};
use crate::types::affordance::EventOrigin;

struct Envelope {
    event: WatcherEvent,
    reply: Option<oneshot::Sender<Disposition>>,
}

/// Sending side of a watcher's event queue.
#[derive(Clone)]
pub struct WatcherHandle {
    tx: mpsc::UnboundedSender<Envelope>,
}

impl WatcherHandle {
    /// Posts an event without waiting. Returns `false` if the loop has ended.
    pub fn send(&self, event: WatcherEvent) -> bool {
        self.tx.send(Envelope { event, reply: None }).is_ok()
    }

    /// Posts an event and waits for the watcher to process it.
    ///
    /// Returns `None` if the loop ended before answering.
    pub async fn dispatch(&self, event: WatcherEvent) -> Option<Disposition> {
        let (reply, answer) = oneshot::channel();
        self.tx
            .send(Envelope {
                event,
                reply: Some(reply),
            })
            .ok()?;
        answer.await.ok()
    }

    /// A selection gesture ended (mouse released).
    pub fn selection_ended(&self, origin: EventOrigin) -> bool {
        self.send(WatcherEvent::SelectionEnded(origin))
    }

    /// The affordance was clicked. The host must stop the click from
    /// propagating when the answer is [`Disposition::Consumed`].
    pub async fn activate(&self) -> Option<Disposition> {
        self.dispatch(WatcherEvent::Activate).await
    }

    /// The host detected that our privileges were revoked.
    pub fn context_invalidated(&self) -> bool {
        self.send(WatcherEvent::HostFault(HostFault::ContextInvalidated))
    }
}

/// Owns a watcher and its event queues.
pub struct WatcherDriver<P: HostPage, R: PrivilegeLayer, C: Clock> {
    watcher: SelectionWatcher<P, R, C>,
    rx: mpsc::UnboundedReceiver<Envelope>,
    timer_tx: mpsc::UnboundedSender<WatcherEvent>,
    timer_rx: mpsc::UnboundedReceiver<WatcherEvent>,
    pending_timers: usize,
    handles_closed: bool,
}

impl<P: HostPage, R: PrivilegeLayer, C: Clock> WatcherDriver<P, R, C> {
    pub fn new(watcher: SelectionWatcher<P, R, C>) -> (Self, WatcherHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        let (timer_tx, timer_rx) = mpsc::unbounded_channel();
        let driver = Self {
            watcher,
            rx,
            timer_tx,
            timer_rx,
            pending_timers: 0,
            handles_closed: false,
        };
        (driver, WatcherHandle { tx })
    }

    /// Processes events until all handles are dropped and no timer is pending.
    ///
    /// Pending timers keep the loop alive so a save attempt in flight always
    /// gets to release its lock. Timers are spawned on the ambient tokio
    /// runtime; the loop itself must be awaited (or spawned locally) by the host.
    pub async fn run(mut self) -> SelectionWatcher<P, R, C> {
        debug!("selection watcher started");
        loop {
            let envelope = tokio::select! {
                biased;
                Some(event) = self.timer_rx.recv(), if self.pending_timers > 0 => {
                    self.pending_timers -= 1;
                    Envelope { event, reply: None }
                }
                msg = self.rx.recv(), if !self.handles_closed => match msg {
                    Some(envelope) => envelope,
                    None => {
                        self.handles_closed = true;
                        continue;
                    }
                },
                else => break,
            };

            trace!(event = ?envelope.event, "watcher event");
            let disposition = self.watcher.handle(envelope.event).await;
            if let Some(reply) = envelope.reply {
                let _ = reply.send(disposition);
            }
            for scheduled in self.watcher.drain_scheduled() {
                self.start_timer(scheduled);
            }
        }
        debug!("selection watcher stopped");
        self.watcher
    }

    fn start_timer(&mut self, scheduled: ScheduledEvent) {
        let tx = self.timer_tx.clone();
        self.pending_timers += 1;
        tokio::spawn(async move {
            tokio::time::sleep(scheduled.after).await;
            let _ = tx.send(scheduled.event);
        });
    }
}
