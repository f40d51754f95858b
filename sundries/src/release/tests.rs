//! Unit tests for reverse-order release and fault reporting.

use std::{cell::Cell, rc::Rc};

use rstest::{fixture, rstest};
use test_helpers::{LabelledFault, ReleaseLog};

use super::*;

struct Tracked {
    label: &'static str,
    log: ReleaseLog,
    fail: bool,
}

impl Release for Tracked {
    fn release(&self) -> Result<(), ReleaseError> {
        self.log.record(self.label);
        if self.fail {
            return Err(Box::new(LabelledFault::new(self.label)));
        }
        Ok(())
    }
}

fn tracked(log: &ReleaseLog, label: &'static str, fail: bool) -> Rc<Tracked> {
    Rc::new(Tracked {
        label,
        log: log.clone(),
        fail,
    })
}

fn fault_label(fault: &ReleaseError) -> Option<&str> {
    fault.downcast_ref::<LabelledFault>().map(LabelledFault::label)
}

#[fixture]
fn log() -> ReleaseLog {
    ReleaseLog::new()
}

#[rstest]
fn empty_stack_releases_nothing(log: ReleaseLog) {
    let mut stack = ReleaseStack::new();
    assert!(stack.is_empty());
    assert!(stack.release_all().is_ok());
    assert!(log.is_empty());
}

#[rstest]
fn added_resources_release_in_reverse(log: ReleaseLog) {
    let mut stack = ReleaseStack::new();
    let first = stack.add(tracked(&log, "first", false));
    stack.add(tracked(&log, "middle", false));
    stack.add(tracked(&log, "last", false));
    assert_eq!(first.label, "first");
    assert_eq!(stack.len(), 3);

    stack.release_all().expect("no resource fails");
    assert_eq!(log.entries(), ["last", "middle", "first"]);
}

#[rstest]
fn seeded_resources_release_in_reverse(log: ReleaseLog) {
    let mut stack = ReleaseStack::with_resources([
        tracked(&log, "first", false),
        tracked(&log, "middle", false),
        tracked(&log, "last", false),
    ]);

    stack.release_all().expect("no resource fails");
    assert_eq!(log.entries(), ["last", "middle", "first"]);
}

#[rstest]
fn seeded_and_added_resources_share_one_order(log: ReleaseLog) {
    let mut stack = ReleaseStack::with_resources([tracked(&log, "seeded", false)]);
    stack.add(tracked(&log, "added", false));
    stack.push(tracked(&log, "pushed", false));

    stack.release_all().expect("no resource fails");
    assert_eq!(log.entries(), ["pushed", "added", "seeded"]);
}

#[rstest]
fn every_resource_releases_and_first_registered_fault_wins(log: ReleaseLog) {
    let mut stack = ReleaseStack::new();
    stack.add(tracked(&log, "first", true));
    stack.add(tracked(&log, "middle", true));
    stack.add(tracked(&log, "last", true));

    let fault = stack.release_all().expect_err("every resource fails");
    assert_eq!(fault_label(&fault), Some("first"));
    assert_eq!(log.entries(), ["last", "middle", "first"]);
}

#[rstest]
fn single_fault_is_reported_after_full_pass(log: ReleaseLog) {
    let mut stack = ReleaseStack::new();
    stack.add(tracked(&log, "first", false));
    stack.add(tracked(&log, "middle", true));
    stack.add(tracked(&log, "last", false));

    let fault = stack.release_all().expect_err("middle fails");
    assert_eq!(fault_label(&fault), Some("middle"));
    assert_eq!(log.len(), 3);
}

#[rstest]
fn second_release_is_a_no_op(log: ReleaseLog) {
    let mut stack = ReleaseStack::new();
    stack.add(tracked(&log, "only", true));

    assert!(stack.release_all().is_err());
    assert!(stack.is_empty());
    assert!(stack.release_all().is_ok());
    assert_eq!(log.entries(), ["only"]);
}

#[rstest]
fn absent_resources_are_skipped(log: ReleaseLog) {
    let mut stack = ReleaseStack::new();
    stack.push(Some(tracked(&log, "present", false)));
    stack.push(None::<Rc<Tracked>>);
    assert_eq!(stack.len(), 2);

    stack.release_all().expect("absent slot is a no-op");
    assert_eq!(log.entries(), ["present"]);
}

#[rstest]
fn drop_releases_remaining_resources(log: ReleaseLog) {
    {
        let mut stack = ReleaseStack::new();
        stack.add(tracked(&log, "outer", false));
        stack.add(tracked(&log, "inner", true));
    }
    assert_eq!(log.entries(), ["inner", "outer"]);
}

#[rstest]
fn drop_after_release_does_nothing(log: ReleaseLog) {
    {
        let mut stack = ReleaseStack::new();
        stack.add(tracked(&log, "once", false));
        stack.release_all().expect("release succeeds");
    }
    assert_eq!(log.entries(), ["once"]);
}

#[rstest]
fn collected_stack_keeps_iteration_order(log: ReleaseLog) {
    let mut stack: ReleaseStack = ["a", "b"]
        .into_iter()
        .map(|label| tracked(&log, label, false))
        .collect();
    stack.extend([tracked(&log, "c", false)]);

    stack.release_all().expect("no resource fails");
    assert_eq!(log.entries(), ["c", "b", "a"]);
}

#[rstest]
fn release_fn_runs_exactly_once() {
    let calls = Rc::new(Cell::new(0_u32));
    let counter = Rc::clone(&calls);
    let action = on_release(move || {
        counter.set(counter.get() + 1);
        Ok(())
    });

    assert!(action.release().is_ok());
    assert!(action.release().is_ok());
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn release_fn_fault_is_returned() {
    let mut stack = ReleaseStack::new();
    stack.push(on_release(|| Err(Box::new(LabelledFault::new("closure")) as ReleaseError)));

    let fault = stack.release_all().expect_err("closure fails");
    assert_eq!(fault_label(&fault), Some("closure"));
}

#[rstest]
fn debug_output_reports_length() {
    let mut stack = ReleaseStack::new();
    stack.push(on_release(|| Ok(())));
    assert_eq!(format!("{stack:?}"), "ReleaseStack { len: 1 }");
    stack.release_all().expect("no-op closure succeeds");
}

#[rstest]
fn mixed_registration_reports_outermost_fault_once(log: ReleaseLog) {
    let mut stack = ReleaseStack::with_resources(Vec::<Rc<Tracked>>::new());
    stack.add(tracked(&log, "a", true));
    stack.push(Box::new(Tracked {
        label: "b",
        log: log.clone(),
        fail: false,
    }));
    stack.add(tracked(&log, "c", true));

    let fault = stack.release_all().expect_err("first and last fail");
    assert_eq!(fault_label(&fault), Some("a"));
    assert_eq!(log.entries(), ["c", "b", "a"]);
    assert!(stack.release_all().is_ok());
}
