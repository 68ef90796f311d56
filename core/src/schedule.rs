use alloc::collections::BinaryHeap;
use core::cmp::{Ordering, Reverse};

use crate::*;

/// Deferred work a game can have pending on its timeline.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Task {
    ResolvePair { first: CardId, second: CardId },
    ExpireHint,
    ExpirePeek,
    Tick,
}

#[derive(Copy, Clone, Debug)]
pub(crate) struct Scheduled {
    pub due: Millis,
    /// Board generation the task was scheduled in.
    pub generation: u32,
    pub task: Task,
    seq: u64,
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scheduled {}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due, self.seq).cmp(&(other.due, other.seq))
    }
}

/// One-shot tasks ordered by due time, ties run in the order they were scheduled.
#[derive(Clone, Debug, Default)]
pub(crate) struct Scheduler {
    queue: BinaryHeap<Reverse<Scheduled>>,
    next_seq: u64,
}

impl Scheduler {
    pub fn schedule(&mut self, due: Millis, generation: u32, task: Task) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse(Scheduled {
            due,
            generation,
            task,
            seq,
        }));
    }

    /// Removes and returns the earliest task due at or before `now`.
    pub fn pop_due(&mut self, now: Millis) -> Option<Scheduled> {
        match self.queue.peek() {
            Some(Reverse(next)) if next.due <= now => self.queue.pop().map(|Reverse(next)| next),
            _ => None,
        }
    }

    pub fn cancel(&mut self, task: Task) {
        self.queue.retain(|Reverse(scheduled)| scheduled.task != task);
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }

    #[cfg(test)]
    pub fn is_pending(&self, task: Task) -> bool {
        self.queue
            .iter()
            .any(|Reverse(scheduled)| scheduled.task == task)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.queue.len()
    }
}
