// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use std::{
    collections::VecDeque,
    panic::{AssertUnwindSafe, catch_unwind},
    sync::{
        Arc, Condvar, Mutex, PoisonError,
        atomic::{AtomicBool, Ordering},
    },
    thread::JoinHandle,
};

/// A unit of work executed by the pool.
type Job = Box<dyn FnOnce() + Send + 'static>;

/// State guarded by the queue mutex.
///
/// `running` counts jobs that have been popped but have not finished yet;
/// the pool is idle exactly when the queue is empty and `running` is zero.
/// The counter is updated under the same lock as the queue, so `is_busy`
/// never observes a job that is neither queued nor counted as running.
struct QueueState {
    queue: VecDeque<Job>,
    running: usize,
    shutdown: bool,
}

impl QueueState {
    #[inline]
    fn is_busy(&self) -> bool {
        !self.queue.is_empty() || self.running > 0
    }
}

/// Shared state between the pool handle and its workers.
struct Shared {
    state: Mutex<QueueState>,
    /// Signalled on submit and shutdown; workers park here.
    work_available: Condvar,
    /// Signalled when the last running job finishes and the queue is empty.
    idle: Condvar,
    /// Set when a job panicked. The panic is re-raised from `stop`.
    job_panicked: AtomicBool,
}

impl Shared {
    fn submit_job(shared: &Arc<Shared>, job: Job) {
        let mut state = shared.state.lock().unwrap();
        if state.shutdown {
            // Release the guard first: panicking while holding it would
            // poison the mutex that `Drop` still has to take while this
            // panic unwinds.
            drop(state);
            panic!("called `TaskPool::submit` after `TaskPool::stop`");
        }
        state.queue.push_back(job);
        shared.work_available.notify_one();
    }
}

/// A cloneable submission handle to a `TaskPool`.
#[derive(Clone)]
pub struct TaskPoolHandle {
    shared: Arc<Shared>,
}

impl TaskPoolHandle {
    /// Enqueues a job; see `TaskPool::submit`.
    pub fn submit<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        Shared::submit_job(&self.shared, Box::new(job));
    }
}

/// A fixed-size pool of worker threads draining a shared FIFO job queue.
///
/// See the crate-level documentation for the lifecycle and the guarantees.
pub struct TaskPool {
    shared: Arc<Shared>,
    workers: Vec<JoinHandle<()>>,
    num_workers: usize,
}

impl TaskPool {
    /// Creates a pool with the given number of worker threads.
    ///
    /// The workers are not launched until `start` is called; jobs submitted
    /// before `start` simply wait in the queue.
    ///
    /// # Panics
    ///
    /// Panics if `num_workers` is zero.
    pub fn new(num_workers: usize) -> Self {
        assert!(
            num_workers > 0,
            "called `TaskPool::new` with zero workers"
        );

        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(QueueState {
                    queue: VecDeque::new(),
                    running: 0,
                    shutdown: false,
                }),
                work_available: Condvar::new(),
                idle: Condvar::new(),
                job_panicked: AtomicBool::new(false),
            }),
            workers: Vec::new(),
            num_workers,
        }
    }

    /// Returns the number of worker threads.
    #[inline]
    pub fn num_workers(&self) -> usize {
        self.num_workers
    }

    /// Enqueues a job.
    ///
    /// Callable from any thread, including from within a running job.
    ///
    /// # Panics
    ///
    /// Panics if the pool has been stopped; submitting to a stopped pool is
    /// a programming error.
    pub fn submit<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        Shared::submit_job(&self.shared, Box::new(job));
    }

    /// Returns a cloneable handle that can submit jobs to this pool.
    ///
    /// The handle is how a running job submits follow-up work: it is `Send`
    /// and `'static` while the pool itself stays owned by the driving thread.
    #[inline]
    pub fn handle(&self) -> TaskPoolHandle {
        TaskPoolHandle {
            shared: Arc::clone(&self.shared),
        }
    }

    /// Launches the worker threads.
    ///
    /// # Panics
    ///
    /// Panics if the pool was already started.
    pub fn start(&mut self) {
        assert!(
            self.workers.is_empty(),
            "called `TaskPool::start` on a pool that is already running"
        );

        for _ in 0..self.num_workers {
            let shared = Arc::clone(&self.shared);
            self.workers.push(std::thread::spawn(move || {
                Self::worker_loop(&shared);
            }));
        }
    }

    /// Returns `true` while the queue is non-empty or any worker is mid-job.
    ///
    /// This is the non-blocking completion query; callers that want to block
    /// should use `wait_until_idle` instead.
    #[inline]
    pub fn is_busy(&self) -> bool {
        self.shared.state.lock().unwrap().is_busy()
    }

    /// Blocks until the queue is empty and no job is running.
    ///
    /// Returns only after every job submitted so far has completed. Must be
    /// called after `start`; with no workers running, queued jobs would keep
    /// this waiting forever.
    pub fn wait_until_idle(&self) {
        let mut state = self.shared.state.lock().unwrap();
        while state.is_busy() {
            state = self.shared.idle.wait(state).unwrap();
        }
    }

    /// Signals the workers to terminate once the queue drains and joins them.
    ///
    /// # Panics
    ///
    /// Re-raises the failure if any job panicked during execution: a failed
    /// job is fatal to the whole run, and no partial result is exposed.
    pub fn stop(&mut self) {
        self.shutdown_and_join();

        if self.shared.job_panicked.load(Ordering::Relaxed) {
            panic!("a task pool job panicked during execution");
        }
    }

    fn shutdown_and_join(&mut self) {
        {
            // Runs from `Drop`, possibly while a panic unwinds; a poisoned
            // lock must not turn the shutdown into a second, aborting panic.
            let mut state = self
                .shared
                .state
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            state.shutdown = true;
        }
        self.shared.work_available.notify_all();

        for handle in self.workers.drain(..) {
            handle.join().expect("task pool worker thread panicked");
        }
    }

    fn worker_loop(shared: &Shared) {
        loop {
            let job = {
                let mut state = shared.state.lock().unwrap();
                loop {
                    if let Some(job) = state.queue.pop_front() {
                        state.running += 1;
                        break job;
                    }
                    if state.shutdown {
                        return;
                    }
                    state = shared.work_available.wait(state).unwrap();
                }
            };

            // A panicking job must not take the worker down or desync the
            // busy accounting; record it and let `stop` re-raise.
            if catch_unwind(AssertUnwindSafe(job)).is_err() {
                shared.job_panicked.store(true, Ordering::Relaxed);
            }

            let mut state = shared.state.lock().unwrap();
            state.running -= 1;
            if !state.is_busy() {
                shared.idle.notify_all();
            }
        }
    }
}

impl Drop for TaskPool {
    fn drop(&mut self) {
        // Pools that were stopped explicitly have no workers left to join.
        self.shutdown_and_join();
    }
}

impl std::fmt::Debug for TaskPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskPool")
            .field("num_workers", &self.num_workers)
            .field("started", &!self.workers.is_empty())
            .field("busy", &self.is_busy())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_every_job_runs_exactly_once() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut pool = TaskPool::new(4);

        for _ in 0..100 {
            let counter = Arc::clone(&counter);
            pool.submit(move || {
                counter.fetch_add(1, Ordering::Relaxed);
            });
        }

        pool.start();
        pool.wait_until_idle();
        pool.stop();

        assert_eq!(counter.load(Ordering::Relaxed), 100);
    }

    #[test]
    fn test_idle_after_wait() {
        let mut pool = TaskPool::new(2);
        for _ in 0..10 {
            pool.submit(|| {
                std::thread::sleep(std::time::Duration::from_millis(1));
            });
        }

        pool.start();
        pool.wait_until_idle();
        assert!(!pool.is_busy());
        pool.stop();
    }

    #[test]
    fn test_empty_pool_is_idle() {
        let mut pool = TaskPool::new(2);
        pool.start();
        assert!(!pool.is_busy());
        pool.wait_until_idle();
        pool.stop();
    }

    #[test]
    fn test_submit_before_start_queues_work() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut pool = TaskPool::new(1);

        let c = Arc::clone(&counter);
        pool.submit(move || {
            c.fetch_add(1, Ordering::Relaxed);
        });
        assert!(pool.is_busy());

        pool.start();
        pool.wait_until_idle();
        pool.stop();
        assert_eq!(counter.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_reentrant_submission() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut pool = TaskPool::new(2);

        let inner_counter = Arc::clone(&counter);
        let handle = pool.handle();
        pool.submit(move || {
            inner_counter.fetch_add(1, Ordering::Relaxed);
            let nested_counter = Arc::clone(&inner_counter);
            handle.submit(move || {
                nested_counter.fetch_add(10, Ordering::Relaxed);
            });
        });

        pool.start();
        pool.wait_until_idle();
        pool.stop();
        assert_eq!(counter.load(Ordering::Relaxed), 11);
    }

    #[test]
    #[should_panic(expected = "a task pool job panicked during execution")]
    fn test_job_panic_is_fatal_at_stop() {
        let mut pool = TaskPool::new(2);
        pool.submit(|| panic!("boom"));
        pool.start();
        pool.wait_until_idle();
        pool.stop();
    }

    #[test]
    fn test_job_panic_does_not_crash_other_workers() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut pool = TaskPool::new(1);

        pool.submit(|| panic!("boom"));
        for _ in 0..5 {
            let counter = Arc::clone(&counter);
            pool.submit(move || {
                counter.fetch_add(1, Ordering::Relaxed);
            });
        }

        pool.start();
        pool.wait_until_idle();
        assert_eq!(counter.load(Ordering::Relaxed), 5);

        let result = catch_unwind(AssertUnwindSafe(|| pool.stop()));
        assert!(result.is_err());
    }

    #[test]
    #[should_panic(expected = "called `TaskPool::submit` after `TaskPool::stop`")]
    fn test_submit_after_stop_panics() {
        let mut pool = TaskPool::new(1);
        pool.start();
        pool.stop();
        pool.submit(|| {});
    }

    #[test]
    fn test_submit_after_stop_unwinds_cleanly() {
        let mut pool = TaskPool::new(1);
        pool.start();
        pool.stop();

        // The rejection must be an ordinary panic: the queue mutex stays
        // usable afterwards and dropping the pool must not panic again.
        let result = catch_unwind(AssertUnwindSafe(|| pool.submit(|| {})));
        assert!(result.is_err());
        assert!(!pool.is_busy());
        drop(pool);
    }

    #[test]
    #[should_panic(expected = "called `TaskPool::new` with zero workers")]
    fn test_zero_workers_is_rejected() {
        let _ = TaskPool::new(0);
    }
}
