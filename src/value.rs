//! Dynamic values of unknown shape.
//!
//! [`Value`] is the boundary type for data whose sequence shape is only known
//! at runtime: lists and text are push-objects by nature, objects become
//! push- or pull-objects depending on the members they carry, and everything
//! else is not a sequence at all. See [`guards`](crate::guards) for the
//! classification and [`Sequence for Value`](crate::Sequence) for the
//! conversion.

use std::{cell::RefCell, collections::BTreeMap, fmt, rc::Rc};

use crate::{
    Pull, Result, Step,
    guards::{ITERATOR, NEXT},
};

/// A dynamically typed value.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Text(Rc<str>),
    List(Rc<[Value]>),
    Object(Object),
    Function(Function),
}

impl Value {
    /// Name of the value's type, as used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Object(_) => "object",
            Value::Function(_) => "function",
        }
    }

    /// Truthiness: `undefined`, `null`, `false`, `0`, NaN and the empty text
    /// are false; everything else is true.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Text(s) => !s.is_empty(),
            Value::List(_) | Value::Object(_) | Value::Function(_) => true,
        }
    }

    /// Member `name` of an object, or `Undefined` for anything else.
    pub fn get(&self, name: &str) -> Value {
        match self {
            Value::Object(obj) => obj.get(name),
            _ => Value::Undefined,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(&**s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn list<I>(items: I) -> Value
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    /// Expose a pull-object as a dynamic iterator object.
    ///
    /// The result carries a `next` member that steps `pull` and returns
    /// `{ value, done }`, and an iteration factory that returns the object
    /// itself, so it is both a pull-object and a single-pass push-object.
    pub fn stepper<P>(pull: P) -> Value
    where
        P: Pull + 'static,
        P::Item: Into<Value>,
        P::Return: Into<Value>,
    {
        let pull = RefCell::new(pull);
        let obj = Object::new()
            .method(NEXT, move |_| {
                let step = pull.borrow_mut().step()?;
                let step = step.map_yielded(Into::into).map_complete(Into::into);
                Ok(Object::step_result(step).into())
            })
            .method(ITERATOR, |this| Ok(this.clone()));
        Value::Object(obj)
    }
}

impl PartialEq for Value {
    /// Scalars and lists compare by content; objects and functions by
    /// identity.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => f.write_str(s),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Object(_) => f.write_str("[object]"),
            Value::Function(_) => f.write_str("[function]"),
        }
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Undefined
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n.into())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s.into())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items.into())
    }
}

impl From<Object> for Value {
    fn from(obj: Object) -> Self {
        Value::Object(obj)
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Value::Function(f)
    }
}

/// A shared, mutable bag of named members.
///
/// Cloning an `Object` yields another handle to the same members.
#[derive(Debug, Clone, Default)]
pub struct Object(Rc<RefCell<BTreeMap<String, Value>>>);

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Object::set`].
    pub fn with(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Builder shorthand for a member holding a [`Function`].
    pub fn method<F>(self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Value) -> Result<Value> + 'static,
    {
        self.with(name, Function::new(f))
    }

    pub fn get(&self, name: &str) -> Value {
        self.0.borrow().get(name).cloned().unwrap_or_default()
    }

    pub fn set(&self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.borrow_mut().insert(name.into(), value.into());
    }

    pub fn ptr_eq(&self, other: &Object) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Build the `{ value, done }` object returned by a `next` member.
    pub fn step_result(step: Step<Value, Value>) -> Object {
        let (value, done) = match step {
            Step::Yielded(value) => (value, false),
            Step::Complete(value) => (value, true),
        };
        Object::new().with("value", value).with("done", done)
    }
}

/// A callable value.
///
/// The argument is the receiver: when a function is called as a member of an
/// object, it receives that object.
#[derive(Clone)]
pub struct Function(Rc<dyn Fn(&Value) -> Result<Value>>);

impl Function {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Result<Value> + 'static,
    {
        Function(Rc::new(f))
    }

    pub fn call(&self, this: &Value) -> Result<Value> {
        (self.0)(this)
    }

    pub fn ptr_eq(&self, other: &Function) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Function")
    }
}
