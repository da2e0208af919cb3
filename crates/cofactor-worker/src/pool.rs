//! DFS worker thread pool.

use cofactor_base::Lit;
use cofactor_search::{satisfy_iterative, Frontier};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

/// Outcome of racing the frontier.
#[derive(Debug)]
pub struct SearchOutcome {
    /// The winning assignment, BFS prefix concatenated with the DFS
    /// suffix, or `None` when the frontier drained without a winner.
    pub assignment: Option<Vec<Lit>>,
    /// Number of worker threads that ran.
    pub threads: usize,
    /// Wall time spent in the parallel phase.
    pub elapsed: Duration,
}

/// State shared between the driver and its workers.
struct Shared {
    /// Open tasks, taken under mutual exclusion.
    frontier: Mutex<Frontier>,
    /// Set once a winner has published; workers poll it to wind down.
    found: AtomicBool,
    /// Cleared when the driver shuts down, stops the progress ticker.
    running: AtomicBool,
    /// The winning assignment slot, written exactly once.
    winner: Mutex<Option<Vec<Lit>>>,
    /// Workers currently inside a DFS, for diagnostics.
    active: AtomicUsize,
}

/// Races `workers` DFS threads over the frontier.
///
/// Each worker repeatedly takes one task from the shared queue and searches
/// it in first-assignment mode. The first satisfying extension found is
/// published exactly once; everyone else exits at the next check. All
/// workers are joined before the outcome is returned, so no second
/// assignment can ever surface.
#[must_use]
pub fn run_search(frontier: Frontier, workers: usize) -> SearchOutcome {
    let start = Instant::now();
    let shared = Arc::new(Shared {
        frontier: Mutex::new(frontier),
        found: AtomicBool::new(false),
        running: AtomicBool::new(true),
        winner: Mutex::new(None),
        active: AtomicUsize::new(0),
    });

    let ticker = spawn_ticker(Arc::clone(&shared), start);

    let mut handles = Vec::with_capacity(workers);
    for id in 0..workers {
        let shared = Arc::clone(&shared);
        let handle = thread::Builder::new()
            .name(format!("cofactor-worker-{id}"))
            .spawn(move || worker_loop(id, &shared))
            .expect("failed to spawn worker thread");
        handles.push(handle);
    }
    for handle in handles {
        let _ = handle.join();
    }

    shared.running.store(false, Ordering::Release);
    let _ = ticker.join();

    let assignment = lock(&shared.winner).take();
    SearchOutcome {
        assignment,
        threads: workers,
        elapsed: start.elapsed(),
    }
}

fn worker_loop(id: usize, shared: &Shared) {
    loop {
        if shared.found.load(Ordering::Acquire) {
            break;
        }
        let task = lock(&shared.frontier).pop_front();
        let Some(task) = task else {
            tracing::debug!(worker = id, "frontier drained");
            break;
        };

        shared.active.fetch_add(1, Ordering::Relaxed);
        let suffix = satisfy_iterative(task.clauses, true).into_iter().next();
        shared.active.fetch_sub(1, Ordering::Relaxed);

        if let Some(suffix) = suffix {
            let mut full = task.path;
            full.extend(suffix);
            let mut slot = lock(&shared.winner);
            if slot.is_none() {
                *slot = Some(full);
                shared.found.store(true, Ordering::Release);
                tracing::info!(worker = id, "found a satisfying assignment");
            }
            break;
        }
    }
}

/// Reports active workers and elapsed time once a second while the search
/// runs. Polls the shutdown flags often so joining it never stalls.
fn spawn_ticker(shared: Arc<Shared>, start: Instant) -> thread::JoinHandle<()> {
    thread::Builder::new()
        .name("cofactor-ticker".to_string())
        .spawn(move || {
            let mut last_report = Instant::now();
            loop {
                thread::sleep(Duration::from_millis(50));
                if !shared.running.load(Ordering::Acquire)
                    || shared.found.load(Ordering::Acquire)
                {
                    break;
                }
                if last_report.elapsed() >= Duration::from_secs(1) {
                    last_report = Instant::now();
                    tracing::info!(
                        threads = shared.active.load(Ordering::Relaxed),
                        elapsed_secs = start.elapsed().as_secs(),
                        "DFS in progress"
                    );
                }
            }
        })
        .expect("failed to spawn ticker thread")
}

/// Locks a mutex, recovering the data if a panicking worker poisoned it.
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
