use crate::maybe::Maybe;
use proxia_meta::{FromValue, IntoArguments, Result, Value};

/// What a call through [`Maybe::invoke`] produced.
#[derive(Clone, Debug)]
pub enum Reply {
    /// An object result, or an absent result, wrapped again with the caller's handler.
    Wrapped(Maybe),
    /// A non-object result, returned as is.
    Value(Value),
    /// What the absent handler returned.
    Handled(Option<Value>),
    /// The call was made on an absent value without a handler.
    Absent,
}

impl Reply {
    /// Continues a chain of calls.
    ///
    /// Raw values carry no handler, so calling a method they lack is an error rather than an
    /// absence.
    pub fn invoke(&self, name: &str, arguments: impl IntoArguments) -> Result<Reply> {
        match self {
            Reply::Wrapped(maybe) => maybe.invoke(name, arguments),
            Reply::Value(value) | Reply::Handled(Some(value)) => {
                Maybe::new(value.clone()).invoke(name, arguments)
            }
            Reply::Handled(None) => Ok(Reply::Handled(None)),
            Reply::Absent => Ok(Reply::Absent),
        }
    }

    #[inline]
    pub fn unwrap(self) -> Option<Value> {
        match self {
            Reply::Wrapped(maybe) => maybe.unwrap(),
            Reply::Value(value) => Some(value),
            Reply::Handled(value) => value,
            Reply::Absent => None,
        }
    }

    #[inline]
    pub fn get<T: FromValue>(self) -> Option<T> {
        self.unwrap()?.downcast().ok()
    }

    #[inline]
    pub fn is_absent(&self) -> bool {
        match self {
            Reply::Wrapped(maybe) => maybe.is_absent(),
            Reply::Value(_) => false,
            Reply::Handled(value) => value.is_none(),
            Reply::Absent => true,
        }
    }

    /// Wraps any reply explicitly. Handlers only survive through [`Reply::Wrapped`].
    #[inline]
    pub fn into_maybe(self) -> Maybe {
        match self {
            Reply::Wrapped(maybe) => maybe,
            reply => Maybe::from(reply.unwrap()),
        }
    }
}
