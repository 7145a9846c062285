use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::debug;

use crate::counter::Counter;

/// Worker count used by the bins.
pub const WORKERS: usize = 3;

/// Spawn `workers` threads that each run `loops` back-to-back increments on
/// the shared counter, then terminate. The loop body never blocks, yields,
/// or sleeps. Handles come back in spawn order. A negative `loops` (which
/// `atoi` can produce) runs zero iterations.
///
/// Spawn failure is not recovered from; `thread::spawn` panics and takes
/// the process down.
pub fn spawn_workers<C>(counter: &Arc<C>, workers: usize, loops: i32) -> Vec<JoinHandle<()>>
where
    C: Counter + 'static,
{
    (0..workers)
        .map(|w| {
            let counter = Arc::clone(counter);
            thread::spawn(move || {
                for _ in 0..loops {
                    counter.increment();
                }
                debug!("worker {} finished", w + 1);
            })
        })
        .collect()
}

/// Join in spawn order: worker 1, then 2, then 3. The threads underneath
/// may finish in any order; the fixed join order only keeps reporting
/// stable. Every worker has terminated by the time this returns, so a
/// final counter read after it sees all increments.
pub fn join_ordered(handles: Vec<JoinHandle<()>>) {
    for (w, handle) in handles.into_iter().enumerate() {
        handle.join().expect("worker thread panicked");
        debug!("worker {} joined", w + 1);
    }
}
