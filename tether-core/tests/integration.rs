//! Integration Tests for Subjects and Bindings
//!
//! These tests verify that subjects, observations and view bindings work
//! together correctly through the public API.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tether_core::bind::{Lifecycle, StateProviding, StateRepresentable};
use tether_core::observe::{
    ChangeRecord, Observable, Observation, Observations, PassthroughSubject, PropertySubject,
};

/// Subscribe a callback that records every record it receives.
fn record_all<T: Clone + 'static>(
    source: &Observable<T>,
) -> (Rc<RefCell<Vec<ChangeRecord<T>>>>, Observation) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen_clone = seen.clone();
    let observation = source.subscribe(move |record| {
        seen_clone.borrow_mut().push(record.clone());
    });
    (seen, observation)
}

/// A property replays once on subscribe and once per mutation.
#[test]
fn property_replay_then_change() {
    for (v1, v2) in [(0, 1), (-5, 5), (i32::MIN, i32::MAX)] {
        let subject = PropertySubject::new(v1);
        let (seen, _observation) = record_all(&subject.observable());
        assert_eq!(*seen.borrow(), vec![ChangeRecord::initial(v1)]);

        subject.set(v2);
        assert_eq!(
            *seen.borrow(),
            vec![ChangeRecord::initial(v1), ChangeRecord::new(v2, Some(v1))]
        );
    }
}

/// A passthrough never replays and chains previous values.
#[test]
fn passthrough_sends_in_order() {
    let subject = PassthroughSubject::<&str>::new();
    let (seen, _observation) = record_all(&subject.observable());
    assert!(seen.borrow().is_empty());

    subject.send("a");
    subject.send("b");

    assert_eq!(
        *seen.borrow(),
        vec![ChangeRecord::initial("a"), ChangeRecord::new("b", Some("a"))]
    );
}

/// Invalidating twice is harmless and stops delivery.
#[test]
fn double_invalidation_is_a_no_op() {
    let subject = PropertySubject::new(1);
    let (seen, mut observation) = record_all(&subject.observable());

    observation.invalidate();
    observation.invalidate();
    assert!(!observation.is_active());

    subject.set(2);
    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(subject.subscriber_count(), 0);
}

/// Two handles see identical notifications; cancelling one leaves the other.
#[test]
fn handles_are_isolated() {
    let subject = PassthroughSubject::<i32>::new();
    let (first, mut first_observation) = record_all(&subject.observable());
    let (second, _second_observation) = record_all(&subject.observable());

    subject.send(1);
    assert_eq!(*first.borrow(), *second.borrow());

    first_observation.invalidate();
    subject.send(2);

    assert_eq!(first.borrow().len(), 1);
    assert_eq!(
        *second.borrow(),
        vec![ChangeRecord::initial(1), ChangeRecord::new(2, Some(1))]
    );
}

/// A dropped handle is never called again, while the subject stays usable.
#[test]
fn dropped_handle_is_never_called_again() {
    let subject = PropertySubject::new(0);
    let calls = Rc::new(Cell::new(0));

    {
        let calls_clone = calls.clone();
        let _scoped = subject.subscribe(move |_| calls_clone.set(calls_clone.get() + 1));
        subject.set(1);
    }
    assert_eq!(calls.get(), 2);

    let (seen, _observation) = record_all(&subject.observable());
    subject.set(2);
    subject.set(3);

    assert_eq!(calls.get(), 2);
    assert_eq!(seen.borrow().len(), 3);
}

/// A subject dropped before its handles leaves them inert.
#[test]
fn subject_dropped_before_handle() {
    let subject = PassthroughSubject::<i32>::new();
    let mut observation = subject.subscribe(|_| {});
    assert!(observation.is_active());

    drop(subject);
    assert!(!observation.is_active());
    observation.invalidate();
}

/// Consumer applying a stateful flag, flipped by a setup call.
#[test]
fn stateful_flag_applied_then_flipped() {
    struct Consumer {
        applied: RefCell<Vec<bool>>,
    }

    let subject = PropertySubject::new(false);
    let consumer = Rc::new(Consumer {
        applied: RefCell::new(Vec::new()),
    });

    let consumer_clone = consumer.clone();
    let _observation = subject.subscribe(move |record| {
        consumer_clone.applied.borrow_mut().push(*record.current());
    });
    assert_eq!(*consumer.applied.borrow(), vec![false]);

    let setup = |subject: &PropertySubject<bool>| subject.set(true);
    setup(&subject);

    assert_eq!(*consumer.applied.borrow(), vec![false, true]);
}

/// Previous value carries over from sends made before anyone subscribed.
#[test]
fn passthrough_previous_predates_subscription() {
    let subject = PassthroughSubject::<i32>::new();
    subject.send(1);

    let (seen, _observation) = record_all(&subject.observable());
    assert!(seen.borrow().is_empty());

    subject.send(2);
    assert_eq!(*seen.borrow(), vec![ChangeRecord::new(2, Some(1))]);
}

#[derive(Debug, Clone, PartialEq)]
struct ViewState {
    enabled: bool,
}

#[derive(Default)]
struct View {
    applied: RefCell<Vec<bool>>,
}

impl StateRepresentable for View {
    type State = ViewState;

    fn apply_state(&self, state: &ViewState, _animated: bool) {
        self.applied.borrow_mut().push(state.enabled);
    }
}

struct Presenter {
    view_state: PropertySubject<ViewState>,
}

impl StateProviding for Presenter {
    type State = ViewState;

    fn state(&self) -> Observable<ViewState> {
        self.view_state.observable()
    }
}

impl Lifecycle for Presenter {
    fn resume(&self) {
        self.view_state.set(ViewState { enabled: true });
    }

    fn suspend(&self) {
        self.view_state.set(ViewState { enabled: false });
    }
}

/// Binder applies the replay and changes until its handle is dropped.
#[test]
fn binder_stops_after_handle_dropped() {
    let presenter = Presenter {
        view_state: PropertySubject::labelled("view_state", ViewState { enabled: false }),
    };
    let view = Rc::new(View::default());

    let binding = view.bind(&presenter.state(), false);
    assert_eq!(*view.applied.borrow(), vec![false]);

    presenter.resume();
    assert_eq!(*view.applied.borrow(), vec![false, true]);

    drop(binding);
    presenter.suspend();
    assert_eq!(*view.applied.borrow(), vec![false, true]);
}

/// A bag of observations ends all its subscriptions together.
#[test]
fn observation_bag_shares_lifetime() {
    let flag = PropertySubject::new(false);
    let taps = PassthroughSubject::<u8>::new();
    let mut bag = Observations::new();

    flag.subscribe(|_| {}).store_in(&mut bag);
    taps.subscribe(|_| {}).store_in(&mut bag);
    assert_eq!(flag.subscriber_count() + taps.subscriber_count(), 2);

    drop(bag);
    assert_eq!(flag.subscriber_count() + taps.subscriber_count(), 0);
}

/// A late-binding view renders the current state straight away.
#[test]
fn late_binding_view_sees_current_state() {
    let presenter = Presenter {
        view_state: PropertySubject::new(ViewState { enabled: false }),
    };
    presenter.resume();

    let view = Rc::new(View::default());
    let _binding = view.bind(&presenter.state(), true);

    assert_eq!(*view.applied.borrow(), vec![true]);
}
