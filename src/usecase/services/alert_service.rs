use std::collections::HashMap;
use std::time::Duration;

use crate::domain::entities::alert::{AlertBoard, AlertId};

/// Something that can stop a pending timer.
pub trait CancelHandle {
    fn cancel(self);
}

/// Tracks one timer per auto-closing alert.
pub struct AlertScheduler<H: CancelHandle> {
    pending: HashMap<AlertId, H>,
}

impl<H: CancelHandle> Default for AlertScheduler<H> {
    fn default() -> Self {
        Self {
            pending: HashMap::new(),
        }
    }
}

impl<H: CancelHandle> AlertScheduler<H> {
    /// Starts a timer for every auto-closing alert on the board that has none yet.
    pub fn schedule_pending<F>(&mut self, board: &AlertBoard, mut start: F) -> usize
    where
        F: FnMut(AlertId, Duration) -> H,
    {
        let mut started = 0;
        for (id, delay) in board.auto_closing() {
            if self.pending.contains_key(&id) {
                continue;
            }
            self.pending.insert(id, start(id, delay));
            started += 1;
        }
        started
    }

    /// Manual dismissal; stops the timer if one is running.
    pub fn cancel(&mut self, id: AlertId) -> bool {
        match self.pending.remove(&id) {
            Some(handle) => {
                handle.cancel();
                true
            }
            None => false,
        }
    }

    /// The timer for `id` fired on its own.
    pub fn complete(&mut self, id: AlertId) {
        self.pending.remove(&id);
    }

    #[allow(dead_code)]
    pub fn is_pending(&self, id: AlertId) -> bool {
        self.pending.contains_key(&id)
    }

    #[allow(dead_code)]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

/// Close the alert whose timer fired. A no-op if it was already closed.
pub fn close_on_timer<H: CancelHandle>(
    board: &mut AlertBoard,
    scheduler: &mut AlertScheduler<H>,
    id: AlertId,
) -> bool {
    scheduler.complete(id);
    board.dismiss(id)
}

/// Close an alert from its close button.
pub fn close_manually<H: CancelHandle>(
    board: &mut AlertBoard,
    scheduler: &mut AlertScheduler<H>,
    id: AlertId,
) -> bool {
    scheduler.cancel(id);
    board.dismiss(id)
}
