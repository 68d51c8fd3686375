//! Comparator abstraction shared by `tml-sort` and `tml-forest`.
//!
//! Every engine in the workspace is generic over a single [`Compare`] trait
//! returning a three-way [`Ordering`]. The different ways a host may want to
//! express an order are adapters around that trait:
//!
//! | Style | Adapter |
//! |-------|---------|
//! | `Fn(&T, &T) -> Ordering` | the closure itself (blanket impl) |
//! | `T: Ord` | [`Natural`] |
//! | boolean less-than | [`Less`] |
//! | C-style `i32` three-way | [`Sign`] |
//! | three-way with context | [`WithArg`] |
//! | less-than with context | [`LessWithArg`] |
//!
//! Tree lookups compare a probe key against a stored element, which may be a
//! different type. That is what [`KeyCompare`] is for.

use std::cell::Cell;
use std::cmp::Ordering;

/// A total preorder over `T`.
pub trait Compare<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// `true` when `a` sorts strictly before `b`.
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders by `T: Ord`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }

    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Adapts a boolean less-than closure.
///
/// `less` calls the closure once. `compare` needs up to two calls: elements
/// are equal when neither is less than the other.
#[derive(Clone, Copy, Debug)]
pub struct Less<F>(pub F);

impl<T: ?Sized, F> Compare<T> for Less<F>
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        if (self.0)(a, b) {
            Ordering::Less
        } else if (self.0)(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

/// Adapts a C-style comparator returning a negative, zero or positive `i32`.
#[derive(Clone, Copy, Debug)]
pub struct Sign<F>(pub F);

impl<T: ?Sized, F> Compare<T> for Sign<F>
where
    F: Fn(&T, &T) -> i32,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        ordering_from_i32((self.0)(a, b))
    }
}

/// Three-way closure that also receives an opaque context value.
#[derive(Clone, Copy, Debug)]
pub struct WithArg<F, A> {
    pub f: F,
    pub arg: A,
}

impl<F, A> WithArg<F, A> {
    pub fn new(f: F, arg: A) -> Self {
        Self { f, arg }
    }
}

impl<T: ?Sized, F, A> Compare<T> for WithArg<F, A>
where
    F: Fn(&T, &T, &A) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.f)(a, b, &self.arg)
    }
}

/// Less-than closure that also receives an opaque context value.
#[derive(Clone, Copy, Debug)]
pub struct LessWithArg<F, A> {
    pub f: F,
    pub arg: A,
}

impl<F, A> LessWithArg<F, A> {
    pub fn new(f: F, arg: A) -> Self {
        Self { f, arg }
    }
}

impl<T: ?Sized, F, A> Compare<T> for LessWithArg<F, A>
where
    F: Fn(&T, &T, &A) -> bool,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        if (self.f)(a, b, &self.arg) {
            Ordering::Less
        } else if (self.f)(b, a, &self.arg) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        (self.f)(a, b, &self.arg)
    }
}

/// Inverts the wrapped comparator.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Compare<T>> Compare<T> for Reversed<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }

    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self.0.less(b, a)
    }
}

/// Counts every call to `compare` / `less` made through it.
#[derive(Debug, Default)]
pub struct Counting<C> {
    pub inner: C,
    count: Cell<u64>,
}

impl<C> Counting<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            count: Cell::new(0),
        }
    }

    pub fn count(&self) -> u64 {
        self.count.get()
    }

    pub fn reset(&self) {
        self.count.set(0);
    }
}

impl<T: ?Sized, C: Compare<T>> Compare<T> for Counting<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.count.set(self.count.get() + 1);
        self.inner.compare(a, b)
    }

    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self.count.set(self.count.get() + 1);
        self.inner.less(a, b)
    }
}

/// Compares a probe key against a stored item.
///
/// Lookups in an intrusive tree search with something that is usually not a
/// whole element (a bare key, a `&str` for a string-keyed entry, ...).
pub trait KeyCompare<Q: ?Sized, T: ?Sized> {
    fn compare_key(&self, key: &Q, item: &T) -> Ordering;
}

impl<Q: ?Sized, T: ?Sized, F> KeyCompare<Q, T> for F
where
    F: Fn(&Q, &T) -> Ordering,
{
    #[inline]
    fn compare_key(&self, key: &Q, item: &T) -> Ordering {
        self(key, item)
    }
}

impl<T: Ord + ?Sized> KeyCompare<T, T> for Natural {
    #[inline]
    fn compare_key(&self, key: &T, item: &T) -> Ordering {
        key.cmp(item)
    }
}

/// Maps a C-style comparison result onto [`Ordering`].
#[inline]
pub fn ordering_from_i32(n: i32) -> Ordering {
    n.cmp(&0)
}
