//! Lifecycle counter checks.
//!
//! The counters are process-wide, so this lives in its own integration test
//! binary (its own process) and stays a single test function to keep the
//! exact assertions deterministic.

use fixvec_core::counters::{live_instances, total_created};
use fixvec_core::FixedVector;

#[test]
fn lifecycle_counts() {
    let live0 = live_instances();
    let total0 = total_created();

    {
        let a = FixedVector::<i32, 4>::from_values(&[1, 2, 3, 4]);
        let b = FixedVector::<f64, 3>::filled(1.5);
        let c = a.clone();
        assert_eq!(live_instances(), live0 + 3);
        assert_eq!(total_created(), total0 + 3);

        // Every operation result is a counted construction too.
        let d = a.add_scalar(10);
        assert_eq!(live_instances(), live0 + 4);
        assert_eq!(total_created(), total0 + 4);

        drop(c);
        assert_eq!(live_instances(), live0 + 3);
        assert_eq!(total_created(), total0 + 4);

        assert_eq!(d.as_slice(), &[11, 12, 13, 14]);
        assert_eq!(b.len(), 3);
    }

    // Scope exit releases everything; the total never decreases.
    assert_eq!(live_instances(), live0);
    assert_eq!(total_created(), total0 + 4);
}
