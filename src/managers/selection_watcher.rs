//! Selection Watcher for Highlight Saver.
//!
//! Turns end-of-selection signals into a floating "save" affordance and hands
//! activated selections to the [`PersistenceGateway`]. The watcher owns all
//! session state: the affordance lifecycle and the save lock that keeps one
//! page from starting overlapping saves.
//!
//! Delays are never slept inline. Each one is pushed to an outbox as a
//! [`ScheduledEvent`]; whoever drives the watcher feeds the event back in
//! once the delay has elapsed (see `watcher_driver`).
//!
//! ```text
//! Hidden -> Shown -> Saving -> Success -> Hidden
//!                          \-> Error   -> Hidden
//! Shown -> Hidden          (new selection, privilege loss, click elsewhere)
//! ```

use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::host::{Clock, HostPage, PrivilegeLayer};
use crate::services::affordance_renderer::{compute_position, stylesheet, view_for};
use crate::services::persistence_gateway::PersistenceGateway;
use crate::types::affordance::{AffordancePosition, AffordanceState, EventOrigin};
use crate::types::errors::{RenderError, SaveError};
use crate::types::highlight::{CaptureStamp, PageSnapshot, SavedHighlight};
use crate::types::settings::SaverConfig;

/// Asynchronous failures the host reports outside of any store call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostFault {
    /// The host announced that our privileges were revoked.
    ContextInvalidated,
}

/// Inputs the watcher reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatcherEvent {
    /// A selection gesture finished (mouse released) somewhere on the page.
    SelectionEnded(EventOrigin),
    /// The debounce after `SelectionEnded` elapsed; the selection is final.
    SelectionSettled,
    /// The user activated the affordance.
    Activate,
    /// The success/error display interval of a save attempt elapsed.
    Dismiss { attempt: u64 },
    /// The grace period after a save attempt elapsed.
    ReleaseLock { attempt: u64 },
    HostFault(HostFault),
}

/// An event to be delivered back to the watcher after `after` has elapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledEvent {
    pub after: Duration,
    pub event: WatcherEvent,
}

/// What the host should do with the originating input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Let the event continue through the page.
    Passthrough,
    /// Stop propagation and prevent the default action.
    Consumed,
}

/// The save lock. Exists from activation until the attempt's grace period ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveAttempt {
    pub id: u64,
}

/// The affordance currently on screen and the text it will save.
#[derive(Debug, Clone, PartialEq)]
struct ShownAffordance {
    text: String,
    position: AffordancePosition,
}

/// Watches selections on one page and saves them on request.
pub struct SelectionWatcher<P: HostPage, R: PrivilegeLayer, C: Clock> {
    page: P,
    gateway: PersistenceGateway<R>,
    clock: C,
    config: SaverConfig,
    state: AffordanceState,
    affordance: Option<ShownAffordance>,
    saving: Option<SaveAttempt>,
    attempts: u64,
    outbox: Vec<ScheduledEvent>,
}

impl<P: HostPage, R: PrivilegeLayer, C: Clock> SelectionWatcher<P, R, C> {
    pub fn new(page: P, gateway: PersistenceGateway<R>, clock: C, config: SaverConfig) -> Self {
        Self {
            page,
            gateway,
            clock,
            config,
            state: AffordanceState::Hidden,
            affordance: None,
            saving: None,
            attempts: 0,
            outbox: Vec::new(),
        }
    }

    pub fn state(&self) -> &AffordanceState {
        &self.state
    }

    /// True while a save attempt holds the lock.
    pub fn is_saving(&self) -> bool {
        self.saving.is_some()
    }

    pub fn current_attempt(&self) -> Option<SaveAttempt> {
        self.saving
    }

    /// Text the visible affordance would save, captured when it was shown.
    pub fn captured_text(&self) -> Option<&str> {
        self.affordance.as_ref().map(|a| a.text.as_str())
    }

    /// Takes every event scheduled since the last call.
    pub fn drain_scheduled(&mut self) -> Vec<ScheduledEvent> {
        std::mem::take(&mut self.outbox)
    }

    fn schedule(&mut self, after: Duration, event: WatcherEvent) {
        self.outbox.push(ScheduledEvent { after, event });
    }

    /// Processes one event.
    pub async fn handle(&mut self, event: WatcherEvent) -> Disposition {
        match event {
            WatcherEvent::SelectionEnded(origin) => {
                self.on_selection_ended(origin);
                Disposition::Passthrough
            }
            WatcherEvent::SelectionSettled => {
                self.on_selection_settled();
                Disposition::Passthrough
            }
            WatcherEvent::Activate => self.on_activate().await,
            WatcherEvent::Dismiss { attempt } => {
                self.on_dismiss(attempt);
                Disposition::Passthrough
            }
            WatcherEvent::ReleaseLock { attempt } => {
                self.on_release_lock(attempt);
                Disposition::Passthrough
            }
            WatcherEvent::HostFault(fault) => {
                self.on_host_fault(fault);
                Disposition::Passthrough
            }
        }
    }

    fn on_selection_ended(&mut self, origin: EventOrigin) {
        if origin.is_own_ui() {
            debug!(?origin, "ignoring selection end from own affordance");
            return;
        }
        if self.is_saving() {
            debug!("ignoring selection end while saving");
            return;
        }
        let debounce = self.config.timing.debounce();
        self.schedule(debounce, WatcherEvent::SelectionSettled);
    }

    fn on_selection_settled(&mut self) {
        // A save may have started during the debounce.
        if self.is_saving() {
            return;
        }

        self.remove_affordance();

        let Some(selection) = self.page.selection() else {
            return;
        };
        let text = selection.trimmed();
        let Some(rect) = selection.rect else {
            return;
        };
        if text.is_empty() {
            return;
        }

        if !self.gateway.is_context_valid() {
            debug!("privileges unavailable; not offering to save");
            return;
        }

        let position = compute_position(&rect, &self.page.viewport(), &self.config.layout);
        let shown = ShownAffordance {
            text: text.to_string(),
            position,
        };
        match self.mount(&shown) {
            Ok(()) => {
                debug!(
                    chars = shown.text.chars().count(),
                    top = position.top,
                    left = position.left,
                    "affordance shown"
                );
                self.state = AffordanceState::Shown;
                self.affordance = Some(shown);
            }
            Err(e) => {
                error!(error = %e, "failed to show affordance");
                self.page.remove_affordance();
                self.cleanup_isolated_root();
            }
        }
    }

    fn mount(&mut self, shown: &ShownAffordance) -> Result<(), RenderError> {
        if !self.page.has_isolated_root() {
            self.page.attach_isolated_root()?;
        }
        match view_for(&AffordanceState::Shown, shown.position) {
            Some(view) => self.page.mount_affordance(&view, &stylesheet()),
            None => Ok(()),
        }
    }

    /// Redraws the visible affordance for the current state. Failures are logged only.
    fn redraw(&mut self) {
        let Some(position) = self.affordance.as_ref().map(|a| a.position) else {
            return;
        };
        if let Some(view) = view_for(&self.state, position) {
            if let Err(e) = self.page.update_affordance(&view) {
                warn!(error = %e, state = ?self.state, "failed to redraw affordance");
            }
        }
    }

    fn remove_affordance(&mut self) {
        if self.affordance.take().is_some() {
            self.page.remove_affordance();
        }
        self.state = AffordanceState::Hidden;
        self.cleanup_isolated_root();
    }

    /// Drops our record of an affordance the host already took away.
    fn forget_affordance(&mut self) {
        self.affordance = None;
        self.state = AffordanceState::Hidden;
    }

    /// Detaches the isolated root once it holds nothing else.
    fn cleanup_isolated_root(&mut self) {
        if self.page.has_isolated_root() && self.page.isolated_child_count() == 0 {
            self.page.detach_isolated_root();
        }
    }

    fn affordance_present(&self) -> bool {
        self.affordance.is_some() && self.page.has_isolated_root()
    }

    /// Clicks on a visible affordance never reach the page, whatever its
    /// state; only a click on the idle affordance starts a save.
    async fn on_activate(&mut self) -> Disposition {
        let Some(text) = self.affordance.as_ref().map(|a| a.text.clone()) else {
            return Disposition::Passthrough;
        };
        if !self.is_saving() && matches!(self.state, AffordanceState::Shown) {
            self.save(&text).await;
        }
        Disposition::Consumed
    }

    /// Runs one save attempt for `text`. Never fails outward: every error ends
    /// in the affordance's error state.
    async fn save(&mut self, text: &str) {
        self.attempts += 1;
        let attempt = SaveAttempt { id: self.attempts };
        self.saving = Some(attempt);

        self.page.clear_selection();

        if !self.gateway.is_context_valid() {
            self.fail(attempt, SaveError::PrivilegeInvalidated);
            return;
        }

        let page = PageSnapshot {
            url: self.page.url(),
            title: self.page.title(),
        };
        let stamp = CaptureStamp {
            id: self.clock.now_millis(),
            date: self.clock.locale_date(),
        };
        let item = SavedHighlight::capture(text, page, stamp);

        self.state = AffordanceState::Saving;
        self.redraw();

        match self.gateway.append(item).await {
            Ok(total) => self.succeed(attempt, total),
            Err(e) => self.fail(attempt, e),
        }
    }

    fn succeed(&mut self, attempt: SaveAttempt, total: usize) {
        info!(attempt = attempt.id, total, "save completed");
        if self.affordance_present() {
            self.state = AffordanceState::Success;
            self.redraw();
            let delay = self.config.timing.success_display();
            self.schedule(delay, WatcherEvent::Dismiss { attempt: attempt.id });
        } else {
            self.forget_affordance();
            self.schedule_release(attempt);
        }
    }

    fn fail(&mut self, attempt: SaveAttempt, err: SaveError) {
        match &err {
            SaveError::PrivilegeInvalidated => {
                warn!(attempt = attempt.id, "save aborted: extension reloaded")
            }
            other => error!(attempt = attempt.id, error = %other, "save failed"),
        }
        if self.affordance_present() {
            self.state = AffordanceState::Error(err);
            self.redraw();
            let delay = self.config.timing.error_display();
            self.schedule(delay, WatcherEvent::Dismiss { attempt: attempt.id });
        } else {
            self.forget_affordance();
            self.schedule_release(attempt);
        }
    }

    fn schedule_release(&mut self, attempt: SaveAttempt) {
        let delay = self.config.timing.lock_release();
        self.schedule(delay, WatcherEvent::ReleaseLock { attempt: attempt.id });
    }

    fn on_dismiss(&mut self, attempt: u64) {
        self.remove_affordance();
        // Releasing is keyed on the attempt; a stale id does nothing there.
        self.schedule_release(SaveAttempt { id: attempt });
    }

    fn on_release_lock(&mut self, attempt: u64) {
        if self.saving.map(|a| a.id) == Some(attempt) {
            self.saving = None;
            debug!(attempt, "save lock released");
        }
    }

    /// A save runs to completion inside one `handle` call, so a fault never
    /// arrives mid-save; revocation during a save surfaces through the store
    /// call's `ContextInvalidated` result instead.
    fn on_host_fault(&mut self, fault: HostFault) {
        match fault {
            HostFault::ContextInvalidated => {
                if self.saving.is_none() && matches!(self.state, AffordanceState::Shown) {
                    debug!("privileges revoked; hiding affordance");
                    self.remove_affordance();
                }
            }
        }
    }
}
