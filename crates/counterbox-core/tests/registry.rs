//! Registry get-or-create and counter behavior under concurrency.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::thread;

use counterbox_core::CounterBox;

#[test]
fn increment_scenario() {
    let cbox = CounterBox::new();
    let requests = cbox.counter("requests");
    requests.increment();
    requests.increment();
    requests.increment();
    requests.increment_by(5);
    assert_eq!(requests.value(), 8);
    assert_eq!(requests.name(), "requests");
}

#[test]
fn negative_delta_is_not_clamped() {
    let cbox = CounterBox::new();
    let c = cbox.counter("debt");
    c.increment_by(-3);
    assert_eq!(c.value(), -3);
}

#[test]
fn get_or_create_returns_same_instance() {
    let cbox = CounterBox::new();
    let a = cbox.counter("x");
    let b = cbox.counter("x");
    assert!(Arc::ptr_eq(&a, &b));

    a.increment();
    assert_eq!(b.value(), 1, "updates via one handle visible via the other");
}

#[test]
fn empty_name_is_legal() {
    let cbox = CounterBox::new();
    let c = cbox.counter("");
    c.increment();
    assert_eq!(cbox.counter("").value(), 1);
}

// N racing get-or-create calls must all observe one instance.
#[test]
fn concurrent_get_or_create_yields_one_instance() {
    let cbox = Arc::new(CounterBox::new());
    let threads = 16;

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let cbox = Arc::clone(&cbox);
            thread::spawn(move || cbox.counter("shared"))
        })
        .collect();

    let counters: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for c in &counters {
        assert!(Arc::ptr_eq(c, &counters[0]));
    }

    // Every handle writes into the same cell.
    for c in &counters {
        c.increment();
    }
    assert_eq!(cbox.counter("shared").value(), threads as i64);
}

// No lost increments across threads.
#[test]
fn concurrent_increments_are_not_lost() {
    let cbox = Arc::new(CounterBox::new());
    let threads = 8;
    let per_thread = 10_000;

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let cbox = Arc::clone(&cbox);
            thread::spawn(move || {
                let c = cbox.counter("hits");
                for _ in 0..per_thread {
                    c.increment();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(cbox.counter("hits").value(), (threads * per_thread) as i64);
}

// The same name in different namespaces never aliases.
#[test]
fn namespaces_are_independent() {
    let cbox = CounterBox::new();
    let counter = cbox.counter("x");
    let max = cbox.max("x");
    let min = cbox.min("x");

    counter.increment_by(7);
    max.set(100);
    min.set(-100);

    assert_eq!(counter.value(), 7);
    assert_eq!(max.value(), 100);
    assert_eq!(min.value(), -100);
}

#[test]
fn creation_races_across_namespaces() {
    let cbox = Arc::new(CounterBox::new());
    let names: Vec<String> = (0..100).map(|i| format!("metric.{i}")).collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let cbox = Arc::clone(&cbox);
            let names = names.clone();
            thread::spawn(move || {
                for n in &names {
                    cbox.counter(n).increment();
                    cbox.max(n).set(1);
                    cbox.min(n).set(-1);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let snap = cbox.snapshot();
    assert_eq!(snap.counters.len(), 100);
    assert_eq!(snap.max.len(), 100);
    assert_eq!(snap.min.len(), 100);
    for m in &snap.counters {
        assert_eq!(m.value, 8, "one increment per thread for {}", m.name);
    }
}
