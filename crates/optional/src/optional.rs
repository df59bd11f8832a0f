//! The [`Optional`] container.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{OptionalError, OptionalResult};

/// An immutable container holding either no value or exactly one value of `T`.
///
/// The discriminant alone determines presence. There is no sentinel state: a
/// `Present` instance always holds a real `T`, and an `Empty` instance holds
/// nothing at all. Instances never change state after construction; accessors
/// either borrow the slot or consume the container.
///
/// Construction goes through three factories:
/// - [`Optional::empty`] for the empty state;
/// - [`Optional::of`] for a value the caller knows is present (an absent
///   argument is a programmer error and panics);
/// - [`Optional::of_nullable`] for a slot that may legitimately be absent.
///
/// Absence at the construction boundary is Rust's own `Option`: the factories
/// accept `impl Into<Option<T>>`, so a plain value passes as itself while a
/// nullable slot passes its `Option<T>`.
///
/// Two containers compare equal when both are empty or both hold values that
/// compare equal under `T`'s own equality. Identity never participates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Optional<T> {
    /// The container holds no value.
    Empty,
    /// The container holds exactly one value.
    Present(T),
}

impl<T> Optional<T> {
    /// Create an empty container.
    ///
    /// Every call returns a fresh instance; all empty instances compare
    /// equal, so nothing observable depends on sharing.
    pub const fn empty() -> Self {
        Optional::Empty
    }

    /// Wrap a value the caller knows is present.
    ///
    /// # Panics
    ///
    /// Panics with [`OptionalError::AbsentValue`] if the argument converts to
    /// `None`. Callers for whom absence is a legitimate possibility should
    /// use [`Optional::of_nullable`] instead.
    #[track_caller]
    pub fn of(value: impl Into<Option<T>>) -> Self {
        match Self::try_of(value) {
            Ok(opt) => opt,
            Err(err) => panic!("{}", err),
        }
    }

    /// Checked counterpart of [`Optional::of`].
    pub fn try_of(value: impl Into<Option<T>>) -> OptionalResult<Self> {
        match value.into() {
            Some(value) => Ok(Optional::Present(value)),
            None => Err(OptionalError::AbsentValue),
        }
    }

    /// Wrap a value if the slot holds one, otherwise return an empty
    /// container. Never fails.
    pub fn of_nullable(value: impl Into<Option<T>>) -> Self {
        match value.into() {
            Some(value) => Optional::Present(value),
            None => Optional::Empty,
        }
    }

    /// Whether a value is present.
    pub const fn is_present(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    /// Whether the container is empty.
    pub const fn is_empty(&self) -> bool {
        !self.is_present()
    }

    /// Borrow the held value.
    ///
    /// # Panics
    ///
    /// Panics with [`OptionalError::NoValuePresent`] when the container is
    /// empty. Callers who cannot guarantee presence should use
    /// [`Optional::unwrap_or`] or check [`Optional::is_present`] first.
    #[track_caller]
    pub fn get(&self) -> &T {
        match self.try_get() {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }

    /// Checked counterpart of [`Optional::get`].
    pub fn try_get(&self) -> OptionalResult<&T> {
        match self {
            Optional::Present(value) => Ok(value),
            Optional::Empty => Err(OptionalError::NoValuePresent),
        }
    }

    /// Return the held value, or `default` when empty.
    ///
    /// Eager by contract: the default is evaluated by the caller before the
    /// call. There is no supplier variant.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Optional::Present(value) => value,
            Optional::Empty => default,
        }
    }

    /// Borrow the slot as a std option.
    pub const fn as_ref(&self) -> Option<&T> {
        match self {
            Optional::Present(value) => Some(value),
            Optional::Empty => None,
        }
    }

    /// Consume the container into a std option.
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Optional::Present(value),
            None => Optional::Empty,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        match value {
            Optional::Present(value) => Some(value),
            Optional::Empty => None,
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::Empty
    }
}

/// A present container hashes exactly as its held value; an empty container
/// hashes as the fixed constant `0`. Equal containers therefore always hash
/// alike, and a container hashes identically to the value it wraps.
impl<T: Hash> Hash for Optional<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Optional::Present(value) => value.hash(state),
            Optional::Empty => 0i32.hash(state),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Optional::Present(value) => write!(f, "Optional[{}]", value),
            Optional::Empty => write!(f, "Optional.empty"),
        }
    }
}
