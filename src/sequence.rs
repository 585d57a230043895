//! Input collections that may be absent.
//!
//! Every operation in this crate takes two ordered collections. A slice in
//! Rust can never be null, so absence is expressed through [`Sequence`]:
//! `Option<S>` is a sequence whose `None` is the absent collection, while
//! slices, arrays and vectors are always present.

use log::debug;

use crate::error::{Error, Result};

/// An ordered collection of elements that may be absent.
pub trait Sequence {
    /// Element type.
    type Item;

    /// Borrow the elements in order, or `None` if the collection is absent.
    fn elements(&self) -> Option<&[Self::Item]>;
}

impl<T> Sequence for [T] {
    type Item = T;

    #[inline]
    fn elements(&self) -> Option<&[T]> {
        Some(self)
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    #[inline]
    fn elements(&self) -> Option<&[T]> {
        Some(self.as_slice())
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    #[inline]
    fn elements(&self) -> Option<&[T]> {
        Some(self.as_slice())
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;

    #[inline]
    fn elements(&self) -> Option<&[S::Item]> {
        (**self).elements()
    }
}

impl<S: Sequence> Sequence for Option<S> {
    type Item = S::Item;

    #[inline]
    fn elements(&self) -> Option<&[S::Item]> {
        self.as_ref().and_then(|s| s.elements())
    }
}

/// Resolve both inputs, failing on the first absent one (`a` before `b`).
pub(crate) fn check_input<'a, 'b, A, B>(
    a: &'a A,
    b: &'b B,
) -> Result<(&'a [A::Item], &'b [A::Item])>
where
    A: Sequence + ?Sized,
    B: Sequence<Item = A::Item> + ?Sized,
{
    let a = a.elements().ok_or_else(|| absent("a"))?;
    let b = b.elements().ok_or_else(|| absent("b"))?;
    Ok((a, b))
}

fn absent(name: &'static str) -> Error {
    debug!("rejecting absent input collection `{name}`");
    Error::InvalidArgument { name }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_collections() {
        let v = vec![1, 2, 3];
        assert_eq!(v.elements(), Some(&[1, 2, 3][..]));
        assert_eq!([4, 5].elements(), Some(&[4, 5][..]));
        assert_eq!(v.as_slice().elements(), Some(&[1, 2, 3][..]));
    }

    #[test]
    fn test_option_absent() {
        let none: Option<Vec<u8>> = None;
        assert_eq!(none.elements(), None);

        let some = Some(vec![7u8]);
        assert_eq!(some.elements(), Some(&[7u8][..]));
    }

    #[test]
    fn test_check_input_reports_a_first() {
        let none: Option<&[i32]> = None;
        assert_eq!(
            check_input(&none, &none),
            Err(Error::InvalidArgument { name: "a" })
        );
        assert_eq!(
            check_input(&[1], &none),
            Err(Error::InvalidArgument { name: "b" })
        );
        assert_eq!(
            check_input(&none, &[1]),
            Err(Error::InvalidArgument { name: "a" })
        );
    }
}
