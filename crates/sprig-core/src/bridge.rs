//! Element equality and display bridge.
//!
//! Patterns are generic over an opaque element type `T`. The algorithms never
//! compare or print elements on their own; they ask a bridge:
//! - [`ElemEq`]: equality between a candidate and an expected element
//! - [`ElemFmt`]: human-readable rendering of one element
//!
//! Three implementations cover the common cases:
//! - [`Native`]: the element's own `PartialEq` and `Debug`
//! - [`Custom`]: a pair of closures supplied by the adaptation layer
//! - [`Overlay`]: consult an [`Override`] first, fall back to a base bridge
//!
//! Plain closures `Fn(&T, &T) -> bool` are equality bridges too.

use std::fmt;
use std::marker::PhantomData;

/// Equality between two elements.
pub trait ElemEq<T: ?Sized> {
    fn equals(&self, a: &T, b: &T) -> bool;
}

/// Rendering of a single element.
///
/// Like `Display`, an implementation returns `Err` only when writing to `f`
/// fails. Renderers that collect into a `String` panic otherwise.
pub trait ElemFmt<T: ?Sized> {
    fn fmt(&self, elem: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Both halves of the bridge.
pub trait Bridge<T: ?Sized>: ElemEq<T> + ElemFmt<T> {}

impl<T: ?Sized, B: ElemEq<T> + ElemFmt<T> + ?Sized> Bridge<T> for B {}

impl<T: ?Sized, F> ElemEq<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Bridge backed by the element's own `PartialEq` and `Debug`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Native;

impl<T: PartialEq + ?Sized> ElemEq<T> for Native {
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

impl<T: fmt::Debug + ?Sized> ElemFmt<T> for Native {
    fn fmt(&self, elem: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(elem, f)
    }
}

/// Bridge built from two closures.
#[derive(Clone, Copy)]
pub struct Custom<E, D> {
    equals: E,
    display: D,
}

impl<E, D> Custom<E, D> {
    pub fn new(equals: E, display: D) -> Self {
        Self { equals, display }
    }
}

impl<T: ?Sized, E, D> ElemEq<T> for Custom<E, D>
where
    E: Fn(&T, &T) -> bool,
{
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        (self.equals)(a, b)
    }
}

impl<T: ?Sized, E, D> ElemFmt<T> for Custom<E, D>
where
    D: Fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    fn fmt(&self, elem: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (self.display)(elem, f)
    }
}

/// Partial bridge: answers only for the elements it knows about.
///
/// Returning `None` defers to the next bridge in an [`Overlay`] chain.
pub trait Override<T: ?Sized> {
    fn try_equals(&self, _a: &T, _b: &T) -> Option<bool> {
        None
    }

    fn try_fmt(&self, _elem: &T, _f: &mut fmt::Formatter<'_>) -> Option<fmt::Result> {
        None
    }
}

/// An override layered on top of a base bridge.
///
/// Chains nest from most to least specific:
/// `Overlay::new(exact, Overlay::new(broader, Native))`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Overlay<O, B = Native> {
    overlay: O,
    base: B,
}

impl<O, B> Overlay<O, B> {
    pub fn new(overlay: O, base: B) -> Self {
        Self { overlay, base }
    }

    pub fn base(&self) -> &B {
        &self.base
    }
}

impl<O> Overlay<O, Native> {
    /// Layer `overlay` directly over [`Native`].
    pub fn over_native(overlay: O) -> Self {
        Self::new(overlay, Native)
    }
}

impl<T: ?Sized, O, B> ElemEq<T> for Overlay<O, B>
where
    O: Override<T>,
    B: ElemEq<T>,
{
    fn equals(&self, a: &T, b: &T) -> bool {
        match self.overlay.try_equals(a, b) {
            Some(eq) => eq,
            None => self.base.equals(a, b),
        }
    }
}

impl<T: ?Sized, O, B> ElemFmt<T> for Overlay<O, B>
where
    O: Override<T>,
    B: ElemFmt<T>,
{
    fn fmt(&self, elem: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.overlay.try_fmt(elem, f) {
            Some(res) => res,
            None => self.base.fmt(elem, f),
        }
    }
}

/// Structural equality that routes element comparisons through a bridge.
pub trait Equivalent<T: ?Sized> {
    fn equivalent<E: ElemEq<T> + ?Sized>(&self, other: &Self, eq: &E) -> bool;
}

/// Pairwise equivalence of two element slices.
pub fn elems_equivalent<T, E: ElemEq<T> + ?Sized>(a: &[T], b: &[T], eq: &E) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| eq.equals(x, y))
}

/// Values that render through a bridge.
pub trait Render<T: ?Sized> {
    fn render<F: ElemFmt<T> + ?Sized>(&self, fmt: &F, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Adapter implementing `Display` with the given bridge.
    fn display<'a, F: ElemFmt<T> + ?Sized>(&'a self, fmt: &'a F) -> Displayed<'a, Self, F, T> {
        Displayed {
            value: self,
            fmt,
            _elem: PhantomData,
        }
    }
}

/// `Display` adapter returned by [`Render::display`].
pub struct Displayed<'a, R: ?Sized, F: ?Sized, T: ?Sized> {
    value: &'a R,
    fmt: &'a F,
    _elem: PhantomData<fn(&T)>,
}

impl<R, F, T> fmt::Display for Displayed<'_, R, F, T>
where
    R: Render<T> + ?Sized,
    F: ElemFmt<T> + ?Sized,
    T: ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.render(self.fmt, f)
    }
}

/// `Display` adapter for a single element.
pub struct ElemDisplay<'a, T: ?Sized, F: ?Sized> {
    elem: &'a T,
    fmt: &'a F,
}

impl<'a, T: ?Sized, F: ?Sized> ElemDisplay<'a, T, F> {
    pub fn new(elem: &'a T, fmt: &'a F) -> Self {
        Self { elem, fmt }
    }
}

impl<T: ?Sized, F: ElemFmt<T> + ?Sized> fmt::Display for ElemDisplay<'_, T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt.fmt(self.elem, f)
    }
}

/// Write `items` separated by `sep`, each rendered by `write_one`.
pub fn write_joined<I, W>(f: &mut fmt::Formatter<'_>, items: I, sep: &str, mut write_one: W) -> fmt::Result
where
    I: IntoIterator,
    W: FnMut(&mut fmt::Formatter<'_>, I::Item) -> fmt::Result,
{
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write_one(f, item)?;
    }
    Ok(())
}
