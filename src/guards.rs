//! Runtime shape predicates for [`Value`].
//!
//! These are the only places where a value's sequence shape is inspected. The
//! checks look at members only; they never call them.

use crate::Value;

/// Name of the member holding an object's iteration factory.
pub const ITERATOR: &str = "@@iterator";

/// Name of the stepping member of a pull-object.
pub const NEXT: &str = "next";

/// True for lists, objects and functions. Scalars, text, `null` and
/// `undefined` are not object-like.
pub fn is_object_like(v: &Value) -> bool {
    matches!(v, Value::List(_) | Value::Object(_) | Value::Function(_))
}

/// True if `v` is object-like and has a callable `next` member.
///
/// This is a heuristic: any object with a callable `next` is accepted, and
/// what `next` returns is not checked here.
pub fn is_possibly_iterator(v: &Value) -> bool {
    is_object_like(v) && matches!(v.get(NEXT), Value::Function(_))
}

/// True if `v` has an iteration factory.
///
/// Lists and text always have one. Objects qualify when their
/// [`ITERATOR`] member is callable; the presence of the factory is taken as
/// the complete contract.
pub fn is_iterable(v: &Value) -> bool {
    match v {
        Value::List(_) | Value::Text(_) => true,
        Value::Object(_) => matches!(v.get(ITERATOR), Value::Function(_)),
        _ => false,
    }
}
