use std::fmt::{self, Display, Formatter};

/// Writes `items` as `[a, b, c]` using each element's [`Display`] impl.
///
/// This rendering is shared by every contiguous view in the crate and is stable, so tests can
/// assert against it.
pub(crate) fn write_list<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> fmt::Result {
    write!(f, "[")?;
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, "]")
}
