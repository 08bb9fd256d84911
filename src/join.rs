use std::sync::{Arc, Condvar, Mutex};

/// A counting join barrier for dynamically fanned-out tasks.
///
/// Recursive concurrent spawning with dynamic fan-out has no fixed number of result
/// channels to collect on, so completion of the whole task tree is detected by
/// counting instead: each task holds a [`Task`] registration for as long as it runs,
/// and [`TaskGroup::wait`] blocks until every registration has been released.
///
/// A registration is created *before* the counted work starts, typically right
/// before the thread is spawned, with the [`Task`] moved into it. Because the parent
/// itself still holds its own registration while handing off children, the count can
/// never dip to zero while work is still in flight.
pub struct TaskGroup {
    shared: Arc<Shared>,
}

struct Shared {
    outstanding: Mutex<usize>,
    condvar: Condvar,
}

impl TaskGroup {
    /// Creates a group with no outstanding tasks.
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared {
                outstanding: Mutex::new(0),
                condvar: Condvar::new(),
            }),
        }
    }

    /// Registers one outstanding task.
    ///
    /// The returned [`Task`] releases the registration when dropped. Dropping is how a
    /// task reports completion, so the registration is released even if the task
    /// panics.
    pub fn task(&self) -> Task {
        *self.shared.outstanding.lock().unwrap() += 1;
        Task {
            shared: self.shared.clone(),
        }
    }

    /// Blocks the calling thread until no tasks remain outstanding.
    ///
    /// Returns immediately if the count is already zero. Once `wait` returns,
    /// [`TaskGroup::outstanding`] observes zero until new tasks are registered.
    pub fn wait(&self) {
        let outstanding = self.shared.outstanding.lock().unwrap();
        drop(
            self.shared
                .condvar
                .wait_while(outstanding, |outstanding| *outstanding > 0)
                .unwrap(),
        );
    }

    /// Returns the number of currently outstanding tasks.
    pub fn outstanding(&self) -> usize {
        *self.shared.outstanding.lock().unwrap()
    }
}

impl Default for TaskGroup {
    fn default() -> Self {
        Self::new()
    }
}

/// A registration for one outstanding task in a [`TaskGroup`].
///
/// Dropping the `Task` marks the task as completed; when the last registration is
/// released, all threads blocked in [`TaskGroup::wait`] are woken.
#[must_use = "dropping a `Task` immediately reports the task as completed"]
pub struct Task {
    shared: Arc<Shared>,
}

impl Drop for Task {
    fn drop(&mut self) {
        let mut outstanding = self.shared.outstanding.lock().unwrap();
        *outstanding -= 1;
        if *outstanding == 0 {
            self.shared.condvar.notify_all();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        thread,
        time::Duration,
    };

    use super::*;

    #[test]
    fn wait_without_tasks_returns_immediately() {
        let group = TaskGroup::new();
        group.wait();
        assert_eq!(group.outstanding(), 0);
    }

    #[test]
    fn released_registration_unblocks_wait() {
        let group = TaskGroup::new();
        let task = group.task();
        assert_eq!(group.outstanding(), 1);
        drop(task);
        group.wait();
        assert_eq!(group.outstanding(), 0);
    }

    #[test]
    fn wait_blocks_until_all_tasks_complete() {
        let group = TaskGroup::new();
        let completed = Arc::new(AtomicUsize::new(0));
        for _ in 0..8 {
            let task = group.task();
            let completed = completed.clone();
            thread::spawn(move || {
                let _task = task;
                thread::sleep(Duration::from_millis(10));
                completed.fetch_add(1, Ordering::SeqCst);
            });
        }
        group.wait();
        assert_eq!(completed.load(Ordering::SeqCst), 8);
        assert_eq!(group.outstanding(), 0);
    }

    #[test]
    fn tasks_can_register_further_tasks() {
        fn fan_out(group: &Arc<TaskGroup>, spawned: &Arc<AtomicUsize>, level: usize, task: Task) {
            let group2 = group.clone();
            let spawned2 = spawned.clone();
            thread::spawn(move || {
                let _task = task;
                spawned2.fetch_add(1, Ordering::SeqCst);
                if level > 0 {
                    for _ in 0..2 {
                        let child = group2.task();
                        fan_out(&group2, &spawned2, level - 1, child);
                    }
                }
            });
        }

        let group = Arc::new(TaskGroup::new());
        let spawned = Arc::new(AtomicUsize::new(0));
        let root = group.task();
        fan_out(&group, &spawned, 3, root);
        group.wait();
        // A binary fan-out of depth 3: 1 + 2 + 4 + 8 tasks.
        assert_eq!(spawned.load(Ordering::SeqCst), 15);
        assert_eq!(group.outstanding(), 0);
    }
}
