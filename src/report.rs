use std::sync::{Arc, Mutex};

use crossbeam_channel::Sender;

use crate::fetch::NotFound;

/// One entry of crawl progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A URL was fetched successfully.
    Page {
        /// The fetched URL.
        url: String,
        /// The payload the fetcher returned for it.
        body: String,
    },
    /// A URL could not be resolved; its subtree of the exploration was abandoned.
    Failed {
        /// The URL that failed to resolve.
        url: String,
        /// The fetcher's error.
        error: NotFound,
    },
}

/// An append-only sink for crawl progress.
///
/// Reporting is fire-and-forget: the crawler never inspects the sink and is not
/// affected by what the sink does with the events.
pub trait Report {
    /// Appends one event to the sink.
    fn record(&self, event: Event);
}

impl<R: Report> Report for Arc<R> {
    fn record(&self, event: Event) {
        (**self).record(event);
    }
}

/// Forwards every event into the channel. Once all receivers are gone, events are
/// silently discarded.
impl Report for Sender<Event> {
    fn record(&self, event: Event) {
        self.send(event).ok();
    }
}

/// A [`Report`] implementation that collects events in memory.
#[derive(Debug, Default)]
pub struct Collector {
    events: Mutex<Vec<Event>>,
}

impl Collector {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the events recorded so far, in insertion order.
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }
}

impl Report for Collector {
    fn record(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::unbounded;

    use super::*;

    fn page(url: &str) -> Event {
        Event::Page {
            url: url.to_string(),
            body: String::new(),
        }
    }

    #[test]
    fn collector_keeps_insertion_order() {
        let collector = Collector::new();
        collector.record(page("a"));
        collector.record(page("b"));
        assert_eq!(collector.events(), [page("a"), page("b")]);
    }

    #[test]
    fn sender_forwards_events() {
        let (sender, receiver) = unbounded();
        sender.record(page("a"));
        assert_eq!(receiver.try_recv().unwrap(), page("a"));
    }

    #[test]
    fn disconnected_sender_discards_silently() {
        let (sender, receiver) = unbounded();
        drop(receiver);
        sender.record(page("a"));
    }
}
