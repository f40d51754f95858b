//! Release order and fault reporting observed through shared handles.
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface release mistakes"
)]

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use rstest::{fixture, rstest};
use sundries::{Release, ReleaseError, ReleaseStack, on_release};
use test_helpers::{LabelledFault, ReleaseLog};

/// A connection-like resource that records when it closes.
struct Connection {
    name: String,
    log: ReleaseLog,
    closed: AtomicBool,
    fails: bool,
}

impl Connection {
    fn open(log: &ReleaseLog, name: &str, fails: bool) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_owned(),
            log: log.clone(),
            closed: AtomicBool::new(false),
            fails,
        })
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

impl Release for Connection {
    fn release(&self) -> Result<(), ReleaseError> {
        self.closed.store(true, Ordering::SeqCst);
        self.log.record(&self.name);
        if self.fails {
            return Err(Box::new(LabelledFault::new(&self.name)));
        }
        Ok(())
    }
}

#[fixture]
fn log() -> ReleaseLog {
    ReleaseLog::new()
}

fn label(fault: &ReleaseError) -> Option<&str> {
    fault.downcast_ref::<LabelledFault>().map(LabelledFault::label)
}

/// Releases resources through nested scopes, as hand-written code would.
fn release_nested(resources: &[Arc<Connection>]) -> Result<(), ReleaseError> {
    let Some((outer, inner)) = resources.split_first() else {
        return Ok(());
    };
    let inner_result = release_nested(inner);
    let outer_result = outer.release();
    outer_result.and(inner_result)
}

#[rstest]
fn handles_stay_usable_until_release(log: ReleaseLog) {
    let mut stack = ReleaseStack::new();
    let primary = stack.add(Connection::open(&log, "primary", false));
    let replica = stack.add(Connection::open(&log, "replica", false));
    assert!(!primary.is_closed());
    assert!(!replica.is_closed());

    stack.release_all().expect("both connections close");
    assert!(primary.is_closed());
    assert!(replica.is_closed());
    let replica_closed = log.position("replica").expect("replica recorded");
    let primary_closed = log.position("primary").expect("primary recorded");
    assert!(replica_closed < primary_closed);
}

#[rstest]
#[case(&[false, false, false])]
#[case(&[true, false, false])]
#[case(&[false, true, false])]
#[case(&[false, false, true])]
#[case(&[true, false, true])]
#[case(&[true, true, true])]
fn stack_matches_nested_scopes(#[case] failures: &[bool]) {
    let nested_log = ReleaseLog::new();
    let nested: Vec<_> = failures
        .iter()
        .enumerate()
        .map(|(index, &fails)| Connection::open(&nested_log, &format!("c{index}"), fails))
        .collect();
    let nested_fault = release_nested(&nested).err();

    let stacked_log = ReleaseLog::new();
    let mut stack: ReleaseStack = failures
        .iter()
        .enumerate()
        .map(|(index, &fails)| Connection::open(&stacked_log, &format!("c{index}"), fails))
        .collect();
    let stacked_fault = stack.release_all().err();

    assert_eq!(nested_log.entries(), stacked_log.entries());
    assert_eq!(
        nested_fault.as_ref().and_then(label),
        stacked_fault.as_ref().and_then(label)
    );
}

#[rstest]
fn dropping_the_stack_closes_everything(log: ReleaseLog) {
    let first = Connection::open(&log, "first", true);
    let second = Connection::open(&log, "second", false);
    {
        let mut stack = ReleaseStack::new();
        stack.add(Arc::clone(&first));
        stack.add(Arc::clone(&second));
        stack.push(on_release({
            let cleanup_log = log.clone();
            move || {
                cleanup_log.record("cleanup");
                Ok(())
            }
        }));
    }
    assert!(first.is_closed());
    assert!(second.is_closed());
    assert_eq!(log.entries(), ["cleanup", "second", "first"]);
}

#[rstest]
fn optional_resources_can_be_registered_unconditionally(log: ReleaseLog) {
    let cache = None::<Arc<Connection>>;
    let mut stack = ReleaseStack::with_resources([
        Some(Connection::open(&log, "database", false)),
        cache,
    ]);

    stack.release_all().expect("absent cache is skipped");
    assert_eq!(log.entries(), ["database"]);
}
