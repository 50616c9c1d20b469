//! Sharing one engine between threads

mod common;

use common::{build_engine, engine_counters, test_alert, StubRule};
use responder_core::Verdict;
use responder_telemetry::InMemoryMetricFactory;
use std::sync::Arc;

const THREADS: usize = 8;
const CALLS_PER_THREAD: usize = 500;

#[test]
fn test_concurrent_evaluation_loses_no_counts() {
    let factory = InMemoryMetricFactory::new();
    let rule = Arc::new(StubRule::new("rule", Verdict::NoMatch));
    let next = Arc::new(StubRule::new("next", Verdict::Filtered));
    let engine = build_engine(&[rule.clone(), next.clone()], &factory);

    std::thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                for _ in 0..CALLS_PER_THREAD {
                    let result = engine.evaluate(&mut test_alert());
                    assert_eq!(result.verdict(), Some(Verdict::Filtered));
                }
            });
        }
    });

    let total = (THREADS * CALLS_PER_THREAD) as u64;
    assert_eq!(engine_counters(&factory), (total, 0, total));
    assert_eq!(rule.call_count() as u64, total);
    assert_eq!(next.call_count() as u64, total);
}

#[test]
fn test_engine_shared_through_arc() {
    let factory = InMemoryMetricFactory::new();
    let engine = Arc::new(build_engine(
        &[Arc::new(StubRule::failing("rule", "backend unavailable"))],
        &factory,
    ));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            std::thread::spawn(move || engine.evaluate(&mut test_alert()).is_error())
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }

    assert_eq!(engine_counters(&factory), (4, 4, 0));
}
