//! The flat, multi-valued input a record is bound from.
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Read-only mapping from key to the ordered raw values bound to it.
///
/// This is what parsing a query string or a form body produces. A missing key yields an empty
/// slice.
pub trait Source {
    /// Values bound to `key`, in input order.
    fn get_all(&self, key: &str) -> &[String];
}

impl<S: BuildHasher> Source for HashMap<String, Vec<String>, S> {
    fn get_all(&self, key: &str) -> &[String] {
        self.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Source for BTreeMap<String, Vec<String>> {
    fn get_all(&self, key: &str) -> &[String] {
        self.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl<T: Source + ?Sized> Source for &T {
    fn get_all(&self, key: &str) -> &[String] {
        (**self).get_all(key)
    }
}
