// The process-wide singleton, raced from many threads at once. Kept in its
// own test binary so nothing else touches the global first.

use std::ptr;
use std::sync::Barrier;
use std::thread;

use design_patterns::creational::singleton::Singleton;

const THREADS: usize = 16;

#[test]
fn test_concurrent_first_access_yields_one_instance() {
    let barrier = Barrier::new(THREADS);
    let values: Vec<String> = (0..THREADS).map(|i| format!("value-{}", i)).collect();

    let instances: Vec<&'static Singleton> = thread::scope(|scope| {
        let handles: Vec<_> = values
            .iter()
            .map(|value| {
                let barrier = &barrier;
                scope.spawn(move || {
                    barrier.wait();
                    Singleton::instance(value.as_str())
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    let first = instances[0];
    assert!(instances.iter().all(|instance| ptr::eq(*instance, first)));
    assert!(values.iter().any(|value| value == first.value()));

    // Later callers get the same instance whatever they pass.
    let later = Singleton::instance("ignored");
    assert!(ptr::eq(later, first));
    assert_ne!(later.value(), "ignored");
}
