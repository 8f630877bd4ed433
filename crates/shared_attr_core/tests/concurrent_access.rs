use serde_json::json;
use shared_attr_core::{shared_attributes, SharedAttributes};
use std::thread;

const THREADS: usize = 8;
const INCREMENTS: usize = 250;

struct Worker {
    id: usize,
}

shared_attributes! {
    type Worker {
        declare_reader_writer("hits", "last");
    }
}

#[test]
fn concurrent_instance_updates_are_not_lost() {
    Worker::write_shared("hits", 0).unwrap();

    thread::scope(|scope| {
        for id in 0..THREADS {
            scope.spawn(move || {
                let worker = Worker { id };
                for _ in 0..INCREMENTS {
                    worker
                        .update_shared("hits", |current| json!(current.as_u64().unwrap_or(0) + 1))
                        .unwrap();
                }
                worker.set_shared("last", worker.id).unwrap();
            });
        }
    });

    assert_eq!(
        Worker::read_shared("hits").unwrap(),
        json!(THREADS * INCREMENTS)
    );
    let last = Worker::read_shared("last").unwrap();
    assert!(last.as_u64().is_some_and(|id| (id as usize) < THREADS));
}
