use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// Like [`Result::unwrap`], except that it applies only to error types which implement
    /// [`Error`] and panics with the message of the error itself rather than its [`Debug`]
    /// rendering.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{}", error),
        }
    }
}
