// Fixed variant, atomic flavor: same three workers and the same loop, but
// the increment is a single fetch_add. Same determinism as `locked`,
// without taking a lock.
use std::sync::Arc;

use race::cli::loops_from_args;
use race::counter::{AtomicCounter, Counter};
use race::workers::{join_ordered, spawn_workers, WORKERS};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let loops = match loops_from_args(&args) {
        Ok(loops) => loops,
        Err(usage) => {
            eprintln!("{}", usage);
            std::process::exit(1);
        }
    };

    let counter = Arc::new(AtomicCounter::new());

    println!("worker handles (before spawn):");
    for w in 1..=WORKERS {
        println!("w{}: <empty>", w);
    }
    println!();
    println!("initial counter : {}", counter.value());

    let handles = spawn_workers(&counter, WORKERS, loops);

    println!();
    println!("worker handles (after spawn):");
    for (w, handle) in handles.iter().enumerate() {
        println!("w{}: {:?}", w + 1, handle.thread().id());
    }
    println!();

    join_ordered(handles);

    println!("final counter   : {}", counter.value());
}
