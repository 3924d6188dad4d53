use std::fmt;

/// The positional arguments passed to every listener of one emit
///
/// Arity is fixed at three. Conversions from `()`, `&T` and tuples of up to
/// three references pad the missing positions with `None`.
pub struct EmitArgs<'a, T>(
    pub Option<&'a T>,
    pub Option<&'a T>,
    pub Option<&'a T>,
);

impl<'a, T> EmitArgs<'a, T> {
    /// No arguments at all
    pub fn none() -> Self {
        EmitArgs(None, None, None)
    }

    /// Number of leading arguments that are present
    pub fn len(&self) -> usize {
        match (self.0, self.1, self.2) {
            (_, _, Some(_)) => 3,
            (_, Some(_), None) => 2,
            (Some(_), None, None) => 1,
            (None, None, None) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Manual impls: the references are always Copy, whatever T is.
impl<T> Clone for EmitArgs<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EmitArgs<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for EmitArgs<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EmitArgs")
            .field(&self.0)
            .field(&self.1)
            .field(&self.2)
            .finish()
    }
}

impl<'a, T> From<()> for EmitArgs<'a, T> {
    fn from(_: ()) -> Self {
        EmitArgs::none()
    }
}

impl<'a, T> From<&'a T> for EmitArgs<'a, T> {
    fn from(first: &'a T) -> Self {
        EmitArgs(Some(first), None, None)
    }
}

impl<'a, T> From<(&'a T,)> for EmitArgs<'a, T> {
    fn from((first,): (&'a T,)) -> Self {
        EmitArgs(Some(first), None, None)
    }
}

impl<'a, T> From<(&'a T, &'a T)> for EmitArgs<'a, T> {
    fn from((first, second): (&'a T, &'a T)) -> Self {
        EmitArgs(Some(first), Some(second), None)
    }
}

impl<'a, T> From<(&'a T, &'a T, &'a T)> for EmitArgs<'a, T> {
    fn from((first, second, third): (&'a T, &'a T, &'a T)) -> Self {
        EmitArgs(Some(first), Some(second), Some(third))
    }
}

impl<'a, T> From<(Option<&'a T>, Option<&'a T>, Option<&'a T>)> for EmitArgs<'a, T> {
    fn from((first, second, third): (Option<&'a T>, Option<&'a T>, Option<&'a T>)) -> Self {
        EmitArgs(first, second, third)
    }
}
