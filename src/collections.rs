use std::hash::BuildHasherDefault;
use indexmap::IndexSet;
use rustc_hash::FxHasher;

pub use rustc_hash::FxHashSet;


/// Use indexmap for insertion ordered sets and rustc_hash for fast hashing
pub type FxIndexSet<K> = IndexSet<K, BuildHasherDefault<FxHasher>>;
