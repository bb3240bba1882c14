//! Request binding: map the source onto a record, then hand the record to a validator.
use crate::error::{BoxError, Error};
use crate::options::Options;
use crate::record::Record;
use crate::source::Source;
use crate::walk::mapping_with_options;

/// Validates a fully bound record.
///
/// Closures `Fn(&T) -> Result<(), E>` implement this trait.
pub trait StructValidator<T: ?Sized> {
    fn validate_struct(&self, record: &T) -> Result<(), BoxError>;
}

impl<T, F, E> StructValidator<T> for F
where
    T: ?Sized,
    F: Fn(&T) -> Result<(), E>,
    E: Into<BoxError>,
{
    fn validate_struct(&self, record: &T) -> Result<(), BoxError> {
        self(record).map_err(Into::into)
    }
}

/// Binds query parameters onto records.
///
/// ```rust
/// use query_binding::{QueryBinding, Record};
///
/// #[derive(Default, Record)]
/// struct Login {
///     user: String,
/// }
///
/// let source = std::collections::HashMap::from([(
///     "user".to_string(),
///     vec!["".to_string()],
/// )]);
///
/// let binding = QueryBinding::default();
/// let not_empty = |login: &Login| {
///     if login.user.is_empty() { Err("user is required") } else { Ok(()) }
/// };
///
/// let mut login = Login::default();
/// let err = binding
///     .bind_with(&source, &mut login, Some(&not_empty))
///     .unwrap_err();
/// assert_eq!(err.to_string(), "validation error: user is required");
/// ```
#[derive(Clone, Debug, Default)]
pub struct QueryBinding {
    options: Options,
}

impl QueryBinding {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Name of this binding.
    pub fn name(&self) -> &'static str {
        "query"
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Bind `record` from `source`. No validator is configured, so a mapped record passes.
    pub fn bind<S, R>(&self, source: &S, record: &mut R) -> Result<(), Error>
    where
        S: Source,
        R: Record,
    {
        self.bind_with(source, record, None)
    }

    /// Bind `record` from `source`, then run `validator` on it.
    ///
    /// The validator only runs after a successful mapping. `None` always passes.
    pub fn bind_with<S, R>(
        &self,
        source: &S,
        record: &mut R,
        validator: Option<&dyn StructValidator<R>>,
    ) -> Result<(), Error>
    where
        S: Source,
        R: Record,
    {
        mapping_with_options(source, record, &self.options)?;
        match validator {
            Some(validator) => validator.validate_struct(record).map_err(Error::validation),
            None => Ok(()),
        }
    }
}

/// Bind `record` from `source` with the default [`QueryBinding`].
pub fn bind<S, R>(source: &S, record: &mut R) -> Result<(), Error>
where
    S: Source,
    R: Record,
{
    QueryBinding::default().bind(source, record)
}

/// Validation through the `garde` crate.
#[cfg(feature = "garde")]
#[derive(Clone, Copy, Debug, Default)]
pub struct Garde;

#[cfg(feature = "garde")]
impl<T> StructValidator<T> for Garde
where
    T: garde::Validate,
    T::Context: Default,
{
    fn validate_struct(&self, record: &T) -> Result<(), BoxError> {
        record.validate().map_err(Into::into)
    }
}

/// Bind `record` from `source`, then validate it with `garde`.
#[cfg(feature = "garde")]
pub fn bind_valid<S, R>(source: &S, record: &mut R, options: &Options) -> Result<(), Error>
where
    S: Source,
    R: Record + garde::Validate,
    R::Context: Default,
{
    QueryBinding::new(options.clone()).bind_with(source, record, Some(&Garde))
}

/// Validation through the `validator` crate.
#[cfg(feature = "validator")]
#[derive(Clone, Copy, Debug, Default)]
pub struct ValidatorEngine;

#[cfg(feature = "validator")]
impl<T> StructValidator<T> for ValidatorEngine
where
    T: validator::Validate,
{
    fn validate_struct(&self, record: &T) -> Result<(), BoxError> {
        record.validate().map_err(Into::into)
    }
}

/// Bind `record` from `source`, then validate it with `validator`.
#[cfg(feature = "validator")]
pub fn bind_validate<S, R>(source: &S, record: &mut R, options: &Options) -> Result<(), Error>
where
    S: Source,
    R: Record + validator::Validate,
{
    QueryBinding::new(options.clone()).bind_with(source, record, Some(&ValidatorEngine))
}
