//! Async task bookkeeping.
//!
//! Every spawned request gets a [`TaskId`] from a monotonic [`TaskSeq`]. The
//! reducer records the id as the active one for its kind of request; a result
//! is applied only if its id is still the active one, so results from
//! superseded requests are dropped.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// Lifecycle of the latest task of one kind.
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Marks `id` as the latest task, superseding any running one.
    pub fn start(&mut self, id: TaskId) {
        self.active = Some(id);
    }

    /// Clears the task if `id` is the active one. Returns whether it was.
    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.active = None;
        }
        ok
    }
}

#[derive(Debug, Default, Clone)]
pub struct Tasks {
    pub login: TaskState,
    pub fetch_posts: TaskState,
}

impl Tasks {
    pub fn is_any_running(&self) -> bool {
        self.login.is_running() || self.fetch_posts.is_running()
    }
}
