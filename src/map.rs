/// The contract shared by the crate's sequential (single-owner) maps.
///
/// Keys only need equality: implementations are free to search by comparison
/// alone, without ordering or hashing.
pub trait SequentialMap<K: Eq + Clone, V> {
    fn new() -> Self;

    /// Insert (key, value) into the map.
    ///
    /// If success, return Ok(()).
    /// If fail, return Err(value) that you tried to insert. The value already
    /// stored under the key is kept.
    fn insert(&mut self, key: &K, value: V) -> Result<(), V>;

    /// Lookup (key, value) from the map with the key.
    ///
    /// If success, return the reference of the value.
    /// If fail, return None.
    fn lookup(&self, key: &K) -> Option<&V>;

    /// Remove (key, value) from the map with the key.
    ///
    /// If success, return Ok(value) which is inserted before.
    /// If fail, return Err(()) and leave the map unchanged.
    fn remove(&mut self, key: &K) -> Result<V, ()>;
}
