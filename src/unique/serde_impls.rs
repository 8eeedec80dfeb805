//! `UniquePtr<T>` serializes exactly like `Option<T>`: an empty pointer is
//! `None` (JSON `null`), and deserializing a present value allocates a fresh
//! owner for it.

use super::UniquePtr;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl<T: Serialize> Serialize for UniquePtr<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.try_ref().ok().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for UniquePtr<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(|value| value.map_or_else(UniquePtr::null, UniquePtr::new))
    }
}
