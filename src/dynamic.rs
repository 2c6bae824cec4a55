//! Sequence protocols over [`Value`].
//!
//! A `Value` entering [`iterable`](crate::iterable) or
//! [`iterator`](crate::iterator) is inspected exactly once and converted into a
//! [`DynIterable`] or a [`DynIterator`]; from there on it is driven through the
//! [`Push`] and [`Pull`] traits like any typed sequence.

use std::rc::Rc;

use either::Either;
use log::{trace, warn};

use crate::{
    Error, Object, Pull, Push, Result, Resume, Sequence, Step, Value,
    guards::{ITERATOR, NEXT, is_iterable, is_possibly_iterator},
};

/// Pull-object over a dynamic value.
#[derive(Debug, Clone)]
pub enum DynIterator {
    /// Cursor over the elements of a list.
    List { items: Rc<[Value]>, pos: usize },
    /// Cursor over the characters of a text, each yielded as a one-character
    /// text.
    Text { text: Rc<str>, pos: usize },
    /// A foreign object with a callable `next` member.
    Object(Value),
}

impl Pull for DynIterator {
    type Item = Value;
    type Return = Value;

    fn step(&mut self) -> Result<Step<Value, Value>> {
        match self {
            DynIterator::List { items, pos } => match items.get(*pos) {
                Some(item) => {
                    *pos += 1;
                    Ok(Step::Yielded(item.clone()))
                }
                None => Ok(Step::Complete(Value::Undefined)),
            },
            DynIterator::Text { text, pos } => match text[*pos..].chars().next() {
                Some(c) => {
                    *pos += c.len_utf8();
                    Ok(Step::Yielded(Value::from(c.to_string())))
                }
                None => Ok(Step::Complete(Value::Undefined)),
            },
            DynIterator::Object(this) => step_object(this),
        }
    }
}

fn step_object(this: &Value) -> Result<Step<Value, Value>> {
    let Value::Function(next) = this.get(NEXT) else {
        return Err(Error::not_sequence(this.kind()));
    };
    let result = match next.call(this)? {
        Value::Object(result) => result,
        other => {
            warn!("next returned {} instead of a step result", other.kind());
            return Err(Error::bad_step_result(other.kind()));
        }
    };
    let value = result.get("value");
    if result.get("done").is_truthy() {
        trace!("dynamic iterator done");
        Ok(Step::Complete(value))
    } else {
        Ok(Step::Yielded(value))
    }
}

crate::pull_sequence! {
    impl[] DynIterator;
}

/// Push-object over a dynamic value.
#[derive(Debug, Clone)]
pub enum DynIterable {
    List(Rc<[Value]>),
    Text(Rc<str>),
    /// An object whose iteration factory is called on every pull.
    Factory(Object),
    /// A foreign pull-object, resumed on every pull.
    Resumed(Resume<DynIterator>),
}

impl Push for DynIterable {
    type Item = Value;
    type Cursor<'a>
        = Either<DynIterator, &'a mut DynIterator>
    where
        Self: 'a;

    fn pull(&mut self) -> Result<Self::Cursor<'_>> {
        match self {
            DynIterable::List(items) => Ok(Either::Left(DynIterator::List {
                items: items.clone(),
                pos: 0,
            })),
            DynIterable::Text(text) => Ok(Either::Left(DynIterator::Text {
                text: text.clone(),
                pos: 0,
            })),
            DynIterable::Factory(obj) => Ok(Either::Left(call_factory(obj)?)),
            DynIterable::Resumed(resume) => Ok(Either::Right(resume.pull()?)),
        }
    }
}

impl Sequence for DynIterable {
    type Item = Value;
    type Iterable = Self;
    type Iterator = DynIterator;

    fn into_iterable(self) -> Result<Self> {
        Ok(self)
    }

    fn into_iterator(self) -> Result<DynIterator> {
        match self {
            DynIterable::List(items) => Ok(DynIterator::List { items, pos: 0 }),
            DynIterable::Text(text) => Ok(DynIterator::Text { text, pos: 0 }),
            DynIterable::Factory(obj) => call_factory(&obj),
            DynIterable::Resumed(resume) => Ok(resume.into_inner()),
        }
    }
}

fn call_factory(obj: &Object) -> Result<DynIterator> {
    let this = Value::Object(obj.clone());
    let Value::Function(factory) = obj.get(ITERATOR) else {
        return Err(Error::not_sequence(this.kind()));
    };
    let cursor = factory.call(&this)?;
    if !is_possibly_iterator(&cursor) {
        return Err(Error::not_sequence(cursor.kind()));
    }
    Ok(DynIterator::Object(cursor))
}

enum Shape {
    List(Rc<[Value]>),
    Text(Rc<str>),
    Factory(Object),
    Stepper(Value),
}

/// The single structural check for values of unknown shape.
fn classify(value: Value) -> Result<Shape> {
    if is_iterable(&value) {
        return match value {
            Value::List(items) => Ok(Shape::List(items)),
            Value::Text(text) => Ok(Shape::Text(text)),
            Value::Object(obj) => Ok(Shape::Factory(obj)),
            other => Err(Error::not_sequence(other.kind())),
        };
    }
    if is_possibly_iterator(&value) {
        return Ok(Shape::Stepper(value));
    }
    Err(Error::not_sequence(value.kind()))
}

impl Sequence for Value {
    type Item = Value;
    type Iterable = DynIterable;
    type Iterator = DynIterator;

    fn into_iterable(self) -> Result<DynIterable> {
        Ok(match classify(self)? {
            Shape::List(items) => DynIterable::List(items),
            Shape::Text(text) => DynIterable::Text(text),
            Shape::Factory(obj) => DynIterable::Factory(obj),
            Shape::Stepper(this) => DynIterable::Resumed(Resume::new(DynIterator::Object(this))),
        })
    }

    fn into_iterator(self) -> Result<DynIterator> {
        match classify(self)? {
            Shape::List(items) => Ok(DynIterator::List { items, pos: 0 }),
            Shape::Text(text) => Ok(DynIterator::Text { text, pos: 0 }),
            Shape::Factory(obj) => call_factory(&obj),
            Shape::Stepper(this) => Ok(DynIterator::Object(this)),
        }
    }
}
