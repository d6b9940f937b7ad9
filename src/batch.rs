//! Coercing many independent documents with one schema.
//!
//! A single coercion stops at its first failure. When a caller has a batch
//! of documents (for example every file in a directory), it usually wants
//! to hear about every bad document at once. [`coerce_each`] coerces each
//! document at `path[i]` and accumulates the first error of every failing
//! document into [`CoerceErrors`].
//!
//! With the `parallel` feature, [`par_coerce_each`] does the same with rayon.

use stillwater::Validation;

use crate::error::{CoerceError, CoerceErrors};
use crate::path::Path;
use crate::schema::Checker;
use crate::value::Value;
use crate::BatchResult;

/// Coerces every document, collecting one error per failing document.
///
/// Returns all coerced documents in input order, or the errors of every
/// failing document in input order.
///
/// # Example
///
/// ```rust
/// use coerce_schema::{batch, Path, Schema, Value};
///
/// let docs = vec![Value::from(1), Value::from("two"), Value::from(3), Value::Null];
/// let result = batch::coerce_each(&Schema::int(), &docs, &Path::root());
///
/// let errors = result.into_result().unwrap_err();
/// let messages: Vec<_> = errors.iter().map(|e| e.to_string()).collect();
/// assert_eq!(messages, vec![
///     r#"[1]: expected int, got "two""#,
///     "[3]: expected int, got nothing",
/// ]);
/// ```
pub fn coerce_each<C>(checker: &C, values: &[Value], path: &Path) -> BatchResult<Vec<Value>>
where
    C: Checker + ?Sized,
{
    let results: Vec<_> = values
        .iter()
        .enumerate()
        .map(|(i, value)| checker.coerce(value, &path.push_index(i)))
        .collect();
    collect(results)
}

/// Parallel version of [`coerce_each`]; the result is identical.
#[cfg(feature = "parallel")]
pub fn par_coerce_each<C>(
    checker: &C,
    values: &[Value],
    path: &Path,
) -> BatchResult<Vec<Value>>
where
    C: Checker + ?Sized,
{
    use rayon::prelude::*;

    let results: Vec<_> = values
        .par_iter()
        .enumerate()
        .map(|(i, value)| checker.coerce(value, &path.push_index(i)))
        .collect();
    collect(results)
}

fn collect(results: Vec<Result<Value, CoerceError>>) -> BatchResult<Vec<Value>> {
    let total = results.len();
    let mut coerced = Vec::with_capacity(total);
    let mut errors = Vec::new();

    for result in results {
        match result {
            Ok(value) => coerced.push(value),
            Err(error) => errors.push(error),
        }
    }

    tracing::debug!(documents = total, failures = errors.len(), "coerced batch");

    match CoerceErrors::from_vec(errors) {
        Some(errors) => Validation::Failure(errors),
        None => Validation::Success(coerced),
    }
}
