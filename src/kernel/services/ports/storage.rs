//! String-keyed blob storage, the shape of a browser's local storage.

use std::io;

pub trait BlobStorage {
    fn get(&self, key: &str) -> io::Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;

    fn remove(&mut self, key: &str) -> io::Result<()>;
}

impl<S: BlobStorage + ?Sized> BlobStorage for Box<S> {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        (**self).remove(key)
    }
}
