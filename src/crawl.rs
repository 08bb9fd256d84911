//! The bounded fan-out explorer.

use std::{sync::Arc, thread};

use crate::{
    fetch::Fetcher,
    join::{Task, TaskGroup},
    report::{Event, Report},
    visited::VisitedSet,
};

/// State shared by every task of one crawl invocation.
struct Shared<F, R> {
    fetcher: F,
    report: R,
    visited: VisitedSet,
    tasks: TaskGroup,
}

/// Recursively explores the link graph reachable from `start`, fanning out one
/// concurrent task per discovered URL, up to `depth` hops.
///
/// Every resolvable URL within the depth budget is fetched exactly once per call, no
/// matter how many paths lead to it: each task claims its URL through a shared
/// [`VisitedSet`] before fetching, and loses silently if another task got there
/// first. This also prunes cycles in the link graph. Fetched pages and failed
/// resolutions are recorded to `report` as they happen.
///
/// A failed fetch abandons only that URL's subtree; sibling tasks and tasks that
/// were already spawned are unaffected, and the crawl as a whole cannot fail. A
/// crawl whose every fetch fails still completes, with nothing but failures in the
/// report.
///
/// The fetch of a URL strictly precedes the spawning of its children's tasks.
/// Beyond that, sibling and cousin subtrees interleave arbitrarily.
///
/// `crawl` blocks until every transitively spawned task has terminated (tracked by a
/// counting [`TaskGroup`], since a parent task exits without waiting for its
/// children), so no task outlives the call and the report is complete once `crawl`
/// returns.
pub fn crawl<F, R>(start: &str, depth: usize, fetcher: F, report: R)
where
    F: Fetcher + Send + Sync + 'static,
    R: Report + Send + Sync + 'static,
{
    let shared = Arc::new(Shared {
        fetcher,
        report,
        visited: VisitedSet::new(),
        tasks: TaskGroup::new(),
    });

    let task = shared.tasks.task();
    spawn_visit(shared.clone(), start.to_string(), depth, task);
    shared.tasks.wait();
}

/// Spawns one exploration task.
///
/// `task` must have been registered by the spawning side; it is released when the
/// new thread exits, however the visit ends.
fn spawn_visit<F, R>(shared: Arc<Shared<F, R>>, url: String, depth: usize, task: Task)
where
    F: Fetcher + Send + Sync + 'static,
    R: Report + Send + Sync + 'static,
{
    thread::spawn(move || {
        let _task = task;
        visit(&shared, &url, depth);
    });
}

fn visit<F, R>(shared: &Arc<Shared<F, R>>, url: &str, depth: usize)
where
    F: Fetcher + Send + Sync + 'static,
    R: Report + Send + Sync + 'static,
{
    if depth == 0 {
        log::trace!("depth budget exhausted before '{url}'");
        return;
    }
    if !shared.visited.try_claim(url) {
        log::trace!("'{url}' already claimed by another task");
        return;
    }

    match shared.fetcher.fetch(url) {
        Err(error) => {
            log::debug!("abandoning '{url}': {error}");
            shared.report.record(Event::Failed {
                url: url.to_string(),
                error,
            });
        }
        Ok(page) => {
            log::trace!("fetched '{url}' ({} links)", page.links.len());
            shared.report.record(Event::Page {
                url: url.to_string(),
                body: page.body,
            });
            for link in page.links {
                // Registered by the parent, so the outstanding count covers the
                // child before its thread has started.
                let task = shared.tasks.task();
                spawn_visit(shared.clone(), link, depth - 1, task);
            }
        }
    }
}
