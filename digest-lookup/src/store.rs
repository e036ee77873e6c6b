use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, trace};

/// Digest/password pairs every store starts with, in insertion order.
///
/// The two `ef92b778ba...` entries share a ten character prefix; lookups by
/// that prefix resolve to the first of them.
pub const SEED_RECORDS: [(&str, &str); 4] = [
    ("8bb0cf6eb9b17d0f7d22b456f121257dc1254e1f01665370476383ea776df414", "123456@9"),
    ("ef92b778bafe771e89245b89ecbc08a44a4e166c06659911881f383d4473e94f", "secret123"),
    ("ef92b778ba5cae3455139327397b1689313262f73400a45def52280e46069def", "123456"),
    ("5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8", "password"),
];

/// A stored digest and the plaintext it was registered for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestRecord {
    pub digest_hex: String,
    pub password: String,
}

impl DigestRecord {
    pub fn new(digest_hex: impl Into<String>, password: impl Into<String>) -> Self {
        Self { digest_hex: digest_hex.into(), password: password.into() }
    }
}

/// Volatile, insertion-ordered mapping from hex digest to password.
///
/// Records are only ever added or overwritten, never removed. Overwriting an
/// existing key keeps the key's original position, so prefix lookups keep
/// resolving to whichever matching key was inserted first.
///
/// The store is `Sync`; share it between callers as `Arc<DigestStore>`.
#[derive(Debug, Default)]
pub struct DigestStore {
    records: RwLock<Vec<DigestRecord>>,
}

impl DigestStore {
    /// Creates a store without any records.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a store holding [`SEED_RECORDS`].
    pub fn seeded() -> Self {
        let records =
            SEED_RECORDS.iter().map(|(digest, password)| DigestRecord::new(*digest, *password));
        Self { records: RwLock::new(records.collect()) }
    }

    /// Inserts or overwrites the password stored under `digest_hex`.
    ///
    /// The key is stored verbatim: no format or case normalization happens here.
    pub fn insert(&self, digest_hex: impl Into<String>, password: impl Into<String>) {
        let digest_hex = digest_hex.into();
        let password = password.into();
        let mut records = self.write();

        match records.iter_mut().find(|r| r.digest_hex == digest_hex) {
            Some(existing) => {
                debug!(digest = %digest_hex, "overwriting stored digest");
                existing.password = password;
            }
            None => {
                debug!(digest = %digest_hex, "registering digest");
                records.push(DigestRecord { digest_hex, password });
            }
        }
    }

    /// Returns the first record, in insertion order, whose key starts with
    /// `candidate`.
    ///
    /// Matching is byte-exact; callers wanting case-insensitive lookup lower-case
    /// the candidate first.
    pub fn find_by_prefix(&self, candidate: &str) -> Option<DigestRecord> {
        let records = self.read();
        trace!(candidate, records = records.len(), "scanning store");
        records.iter().find(|r| r.digest_hex.starts_with(candidate)).cloned()
    }

    /// Returns the password stored under exactly `digest_hex`.
    pub fn get(&self, digest_hex: &str) -> Option<String> {
        self.read().iter().find(|r| r.digest_hex == digest_hex).map(|r| r.password.clone())
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Copies out every record in insertion order.
    pub fn records(&self) -> Vec<DigestRecord> {
        self.read().clone()
    }

    // Writers never leave the list half-updated, so a poisoned lock still guards
    // consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Vec<DigestRecord>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<DigestRecord>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_seeded_store_preserves_fixture_order() {
        let store = DigestStore::seeded();
        let keys: Vec<String> = store.records().into_iter().map(|r| r.digest_hex).collect();
        let expected: Vec<&str> = SEED_RECORDS.iter().map(|(digest, _)| *digest).collect();
        assert_eq!(keys, expected);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_seed_digests_are_64_hex_chars() {
        for (digest, _) in SEED_RECORDS {
            assert_eq!(digest.len(), 64, "{digest}");
            assert!(digest.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_empty_store() {
        let store = DigestStore::empty();
        assert!(store.is_empty());
        assert_eq!(store.find_by_prefix("ef92b778ba"), None);
    }

    #[test]
    fn test_find_by_prefix_first_inserted_wins() {
        let store = DigestStore::seeded();
        let record = store.find_by_prefix("ef92b778ba").unwrap();
        assert_eq!(record.password, "secret123");
        assert_eq!(
            record.digest_hex,
            "ef92b778bafe771e89245b89ecbc08a44a4e166c06659911881f383d4473e94f"
        );

        let record = store.find_by_prefix("ef92b778ba5c").unwrap();
        assert_eq!(record.password, "123456");
    }

    #[test]
    fn test_find_by_prefix_is_case_sensitive() {
        let store = DigestStore::seeded();
        assert_eq!(store.find_by_prefix("EF92B778BA"), None);
    }

    #[test]
    fn test_insert_appends_after_seeds() {
        let store = DigestStore::seeded();
        store.insert("ef92b778ba0000", "late");
        assert_eq!(store.len(), 5);
        assert_eq!(store.find_by_prefix("ef92b778ba").unwrap().password, "secret123");
        assert_eq!(store.find_by_prefix("ef92b778ba00").unwrap().password, "late");
    }

    #[test]
    fn test_insert_overwrites_in_place() {
        let store = DigestStore::seeded();
        store.insert("ef92b778bafe771e89245b89ecbc08a44a4e166c06659911881f383d4473e94f", "changed");

        assert_eq!(store.len(), 4);
        let records = store.records();
        assert_eq!(records[1].password, "changed");
        assert_eq!(store.find_by_prefix("ef92b778ba").unwrap().password, "changed");
    }

    #[test]
    fn test_insert_accepts_any_key() {
        let store = DigestStore::empty();
        store.insert("not hex at all", "x");
        store.insert("", "empty key");
        assert_eq!(store.get("not hex at all").as_deref(), Some("x"));
        assert_eq!(store.get("").as_deref(), Some("empty key"));
    }

    #[test]
    fn test_concurrent_insert_and_scan() {
        let store = Arc::new(DigestStore::seeded());

        std::thread::scope(|s| {
            for i in 0..8 {
                let store = Arc::clone(&store);
                s.spawn(move || {
                    store.insert(format!("{i:064x}"), format!("pw{i}"));
                    assert!(store.find_by_prefix("5e884898da").is_some());
                });
            }
        });

        assert_eq!(store.len(), 12);
        for i in 0..8 {
            assert_eq!(store.get(&format!("{i:064x}")), Some(format!("pw{i}")));
        }
    }
}
