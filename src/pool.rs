//! Shared worker pool
//!
//! One fixed-size thread pool is created at startup and reused by the two
//! concurrent phases (dictionary build, per-turn candidate search) instead of
//! spawning fresh threads on every call. An optional deadline bounds how long
//! either phase may run.

use std::fmt;
use std::time::{Duration, Instant};

/// Default number of worker threads.
pub const DEFAULT_WORKERS: usize = 4;

/// Worker pool construction failure.
#[derive(Debug)]
pub struct PoolError(rayon::ThreadPoolBuildError);

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to start worker pool: {}", self.0)
    }
}

impl std::error::Error for PoolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

/// Fixed-size pool of worker threads shared by the concurrent phases.
#[derive(Debug)]
pub struct WorkerPool {
    pool: rayon::ThreadPool,
    deadline: Option<Duration>,
}

impl WorkerPool {
    /// Create a pool with `workers` threads and no deadline.
    ///
    /// # Errors
    /// Returns `PoolError` if the underlying threads cannot be spawned.
    pub fn new(workers: usize) -> Result<Self, PoolError> {
        Self::with_deadline(workers, None)
    }

    /// Create a pool whose phases abort with a timeout error once `deadline`
    /// has elapsed within a single call.
    ///
    /// # Errors
    /// Returns `PoolError` if the underlying threads cannot be spawned.
    pub fn with_deadline(workers: usize, deadline: Option<Duration>) -> Result<Self, PoolError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("wordplay-worker-{i}"))
            .build()
            .map_err(PoolError)?;
        Ok(Self { pool, deadline })
    }

    /// Number of worker threads in the pool.
    #[must_use]
    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Run `op` on the pool, blocking until it completes.
    pub(crate) fn install<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        self.pool.install(op)
    }

    /// Start the deadline clock for one phase call.
    pub(crate) fn deadline_clock(&self) -> DeadlineClock {
        DeadlineClock {
            started: Instant::now(),
            limit: self.deadline,
        }
    }
}

/// Per-call deadline tracker, cheap enough for workers to poll per word.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DeadlineClock {
    started: Instant,
    limit: Option<Duration>,
}

impl DeadlineClock {
    pub(crate) fn expired(&self) -> bool {
        self.limit.is_some_and(|limit| self.started.elapsed() >= limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_reports_worker_count() {
        let pool = WorkerPool::new(4).unwrap();
        assert_eq!(pool.workers(), 4);
    }

    #[test]
    fn no_deadline_never_expires() {
        let pool = WorkerPool::new(2).unwrap();
        let clock = pool.deadline_clock();
        assert!(!clock.expired());
    }

    #[test]
    fn zero_deadline_expires_immediately() {
        let pool = WorkerPool::with_deadline(2, Some(Duration::ZERO)).unwrap();
        let clock = pool.deadline_clock();
        assert!(clock.expired());
    }

    #[test]
    fn install_runs_on_pool() {
        let pool = WorkerPool::new(2).unwrap();
        let sum = pool.install(|| (1..=10).sum::<i32>());
        assert_eq!(sum, 55);
    }
}
