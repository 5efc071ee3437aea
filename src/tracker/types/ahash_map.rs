use ahash::AHasher;
use std::collections::HashMap;
use std::hash::BuildHasherDefault;

/// `HashMap` using the aHash hasher.
pub type AHashMap<K, V> = HashMap<K, V, BuildHasherDefault<AHasher>>;
