//! Synchronous event bus with cascading dispatch.
//!
//! [`EventBus::publish`] enqueues an event and drains the queue before it
//! returns. Handlers run in subscription order for every dequeued event and
//! may return follow-up events, which join the tail of the same queue. The
//! bus takes `&mut self` for the whole drain and handlers only see match
//! state, so a nested drain cannot start.

use std::collections::VecDeque;

use tracing::{error, warn};

use super::events::MatchEvent;
use super::match_state::MatchState;
use crate::error::Result;

/// Reacts to published events.
///
/// Returned events are queued behind everything already pending. A fatal
/// error (see [`crate::MatchError::is_fatal`]) stops the drain and is
/// returned from `publish`; any other error is logged and dispatch goes on.
pub trait EventHandler: Send {
    fn name(&self) -> &str;

    fn handle(&mut self, event: &MatchEvent, state: &mut MatchState) -> Result<Vec<MatchEvent>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

struct Subscription {
    id: HandlerId,
    handler: Box<dyn EventHandler>,
}

pub struct EventBus {
    subscriptions: Vec<Subscription>,
    queue: VecDeque<MatchEvent>,
    log: Vec<MatchEvent>,
    next_id: u64,
    next_seq: u64,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.subscriptions.iter().map(|s| s.handler.name()).collect();
        f.debug_struct("EventBus")
            .field("handlers", &names)
            .field("queued", &self.queue.len())
            .field("logged", &self.log.len())
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            subscriptions: Vec::new(),
            queue: VecDeque::new(),
            log: Vec::new(),
            next_id: 0,
            next_seq: 0,
        }
    }

    /// Registers a handler after all existing ones.
    pub fn subscribe(&mut self, handler: Box<dyn EventHandler>) -> HandlerId {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription { id, handler });
        id
    }

    /// Removes a handler. Returns false if it was not subscribed.
    pub fn unsubscribe(&mut self, id: HandlerId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        self.subscriptions.len() != before
    }

    pub fn unsubscribe_all(&mut self) {
        self.subscriptions.clear();
    }

    pub fn handler_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Publishes an event and resolves its whole cascade.
    pub fn publish(&mut self, event: MatchEvent, state: &mut MatchState) -> Result<()> {
        self.queue.push_back(event);
        let drained = self.drain(state);
        if drained.is_err() {
            self.queue.clear();
        }
        drained
    }

    /// Publishes a batch in order, stopping at the first fatal error.
    pub fn publish_all(&mut self, events: Vec<MatchEvent>, state: &mut MatchState) -> Result<()> {
        for event in events {
            self.publish(event, state)?;
        }
        Ok(())
    }

    fn drain(&mut self, state: &mut MatchState) -> Result<()> {
        while let Some(mut event) = self.queue.pop_front() {
            event.seq = self.next_seq;
            self.next_seq += 1;
            self.log.push(event.clone());

            for sub in self.subscriptions.iter_mut() {
                match sub.handler.handle(&event, state) {
                    Ok(follow_ups) => self.queue.extend(follow_ups),
                    Err(err) if err.is_fatal() => {
                        error!(
                            handler = sub.handler.name(),
                            event = event.name(),
                            minute = event.minute,
                            "fatal handler error: {}",
                            err
                        );
                        return Err(err);
                    }
                    Err(err) => {
                        warn!(
                            handler = sub.handler.name(),
                            event = event.name(),
                            minute = event.minute,
                            "handler error: {}",
                            err
                        );
                    }
                }
            }
        }
        Ok(())
    }

    /// Every event dequeued so far, in dispatch order.
    pub fn event_log(&self) -> &[MatchEvent] {
        &self.log
    }

    pub fn take_event_log(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.log)
    }
}
