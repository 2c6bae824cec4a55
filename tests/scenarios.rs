//! End-to-end scenarios over mixed dynamic lists and typed sources.

use std::f64::consts::PI;

use seqview::prelude::*;
use seqview::{Bound, ErrorKind, PullIter, Step};

fn mixed() -> Vec<Value> {
    vec![Value::from(7), "bar".into(), true.into()]
}

fn doubled() -> Vec<Value> {
    mixed().into_iter().chain(mixed()).collect()
}

#[test]
fn to_array_copies_a_list() {
    let source = Value::from(mixed());
    let copy = to_array(source.clone(), f64::INFINITY).unwrap();
    assert_eq!(copy, mixed());
    let Value::List(original) = source else {
        unreachable!()
    };
    assert_ne!(copy.as_ptr(), original.as_ptr());
}

#[test]
fn to_array_bounds_a_generator() {
    let mut items = vec![Value::from(5), "foo".into(), 3.into()].into_iter();
    let source = Value::stepper(from_fn(move || Step::from(items.next())));
    assert_eq!(
        to_array(source, 2).unwrap(),
        vec![Value::from(5), Value::from("foo")]
    );
}

#[test]
fn skip_over_a_dynamic_list() {
    assert_eq!(
        to_vec(skip(Value::from(mixed()), 2).unwrap()).unwrap(),
        vec![Value::from(true)]
    );
    assert!(to_vec(skip(Value::from(mixed()), 7).unwrap())
        .unwrap()
        .is_empty());
}

#[test]
fn subseq_over_a_dynamic_list() {
    let seq = Value::from(doubled());
    assert_eq!(
        to_vec(subseq(seq, 1, 5).unwrap()).unwrap(),
        vec![Value::from("bar"), true.into(), 7.into(), "bar".into()]
    );
}

#[test]
fn subseq_rejects_reversed_bounds() {
    let err = subseq(Value::from(doubled()), 5, 2).unwrap_err();
    assert!(matches!(
        err.into_kind(),
        ErrorKind::RangeBounds {
            start: Bound::Finite(5),
            end: Bound::Finite(2)
        }
    ));
}

#[test]
fn ranges() {
    assert_eq!(to_vec(range(0.0, 7.0, 3.0).unwrap()).unwrap(), vec![0.0, 3.0, 6.0]);
    assert_eq!(to_vec(range(0.0, -6.0, -3.0).unwrap()).unwrap(), vec![0.0, -3.0]);
    assert_eq!(
        to_vec(range(0.0, -7.0, -PI).unwrap()).unwrap(),
        vec![0.0, -PI, -2.0 * PI]
    );
}

#[test]
fn range_return_value_is_reported_separately() {
    let mut iter: PullIter<_> = range(0.0, 7.0, 3.0).unwrap().pulled();
    let yielded: Vec<f64> = iter.by_ref().map(Result::unwrap).collect();
    assert_eq!(yielded, vec![0.0, 3.0, 6.0]);
    assert_eq!(iter.into_return(), Some(9.0));
}

#[test]
fn partially_consumed_generator_is_not_restarted() {
    let mut source = elements(vec!['a', 'b', 'c', 'd']);
    assert_eq!(source.step().unwrap(), Step::Yielded('a'));
    let mut adapter = iterable(source).unwrap();
    assert_eq!(to_vec(adapter.by_ref_push()).unwrap(), vec!['b', 'c', 'd']);
    assert!(to_vec(adapter).unwrap().is_empty());
}

#[test]
fn partially_consumed_dynamic_iterator_is_not_restarted() {
    let stepper = Value::stepper(elements(vec![1, 2, 3]));
    let first = to_array(stepper.clone(), 1).unwrap();
    assert_eq!(first, vec![Value::from(1)]);
    let rest = to_vec(stepper.clone()).unwrap();
    assert_eq!(rest, vec![Value::from(2), Value::from(3)]);
    assert!(to_vec(stepper).unwrap().is_empty());
}

#[test]
fn views_compose_over_an_unbounded_source() {
    let evens = range(0.0, f64::INFINITY, 2.0).unwrap();
    let window = limit(skip(evens, 3).unwrap(), 2).unwrap();
    assert_eq!(to_vec(window).unwrap(), vec![6.0, 8.0]);
}

#[test]
fn safety_limit_guards_unbounded_sources() {
    let err = to_vec(safety_limit(range_from(0.0).unwrap(), 100).unwrap()).unwrap_err();
    assert_eq!(err.to_string(), "excessive sequence length: 100");
    let short = to_vec(safety_limit(Value::from(mixed()), 100).unwrap()).unwrap();
    assert_eq!(short, mixed());
}

#[test]
fn broadcast_watchers_feed_views() {
    let events = EventDistributor::new();
    let watcher = events.watch();
    for n in 0..6 {
        events.notify(n);
    }
    events.end();
    assert_eq!(to_vec(subseq(watcher, 1, 4).unwrap()).unwrap(), vec![1, 2, 3]);
}
