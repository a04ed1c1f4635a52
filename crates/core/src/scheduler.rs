//! Deferred task queue
//!
//! Delayed game reactions (flipping a mismatched pair back, showing the win
//! banner, starting the next round) are queued here instead of running on a
//! timer of their own. Every task carries the id of the round that scheduled
//! it; the game drains the queue on each tick and drops tasks whose round has
//! been superseded.

/// A reaction waiting for its due time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredTask {
    /// Hide the pending mismatched pair
    FlipBack,
    /// Surface the final moves/time of a won round
    ShowWin,
    /// Replace the won round with a fresh one
    AutoRestart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled {
    pub due_ms: u64,
    pub round: u32,
    pub task: DeferredTask,
    seq: u64,
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    queue: Vec<Scheduled>,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `task` to run `delay_ms` after `now_ms`.
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u32, round: u32, task: DeferredTask) {
        let item = Scheduled {
            due_ms: now_ms + delay_ms as u64,
            round,
            task,
            seq: self.next_seq,
        };
        self.next_seq += 1;

        // Keep the queue ordered by (due, seq) so equal deadlines run FIFO.
        let pos = self
            .queue
            .partition_point(|s| (s.due_ms, s.seq) <= (item.due_ms, item.seq));
        self.queue.insert(pos, item);
    }

    /// Pop the earliest task due at or before `now_ms` for `round`.
    ///
    /// Due tasks belonging to any other round are discarded on the way.
    pub fn pop_due(&mut self, now_ms: u64, round: u32) -> Option<Scheduled> {
        while let Some(first) = self.queue.first() {
            if first.due_ms > now_ms {
                return None;
            }
            let item = self.queue.remove(0);
            if item.round == round {
                return Some(item);
            }
        }
        None
    }

    pub fn cancel_all(&mut self) {
        self.queue.clear();
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}
