mod object_store;

pub use object_store::{ByteStream, ObjectEntry, ObjectStore, ObjectStoreError, StoredObject};
