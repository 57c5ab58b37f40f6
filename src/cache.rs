//! Time-bounded read-through cache for reference data.
//!
//! Entries expire at an absolute instant fixed when they are stored; reads
//! never extend their lifetime. Writes replace whatever is stored under the
//! key (last writer wins), which is safe because concurrent refreshes load
//! the same data.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use chrono::{DateTime, Duration, Utc};

use crate::domain::pet::PetType;

/// Key the sorted pet-type list is stored under.
pub const PET_TYPES_CACHE_KEY: &str = "pet_types";
/// Freshness window of the pet-type list, in seconds.
pub const DEFAULT_PET_TYPES_TTL_SECS: i64 = 24 * 60 * 60;

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now = now.checked_add_signed(by).unwrap_or(DateTime::<Utc>::MAX_UTC);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

struct CacheEntry<V> {
    value: V,
    expires_at: DateTime<Utc>,
}

/// Keyed store of values that expire at an absolute time.
pub struct ExpiringCache<V> {
    entries: RwLock<HashMap<String, CacheEntry<V>>>,
    clock: Arc<dyn Clock>,
}

impl<V: Clone> ExpiringCache<V> {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            clock,
        }
    }

    /// Returns the stored value unless it is missing or expired.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = self.clock.now();
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(key)
            .filter(|entry| now < entry.expires_at)
            .map(|entry| entry.value.clone())
    }

    /// Stores `value` under `key` until `ttl` from now. A window reaching
    /// past the last representable instant never expires.
    pub fn set(&self, key: &str, value: V, ttl: Duration) {
        let expires_at = self
            .clock
            .now()
            .checked_add_signed(ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), CacheEntry { value, expires_at });
    }
}

/// Cache in front of the pet-type table.
///
/// Creating a pet type does not invalidate it; new types become visible
/// once the current entry expires.
pub struct PetTypeCache {
    cache: ExpiringCache<Vec<PetType>>,
    ttl: Duration,
}

impl PetTypeCache {
    pub fn new(clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self {
            cache: ExpiringCache::new(clock),
            ttl,
        }
    }

    pub fn with_system_clock(ttl: Duration) -> Self {
        Self::new(Arc::new(SystemClock), ttl)
    }

    /// Returns the cached list, or runs `load`, sorts by name and caches it.
    pub fn get_or_load<F, E>(&self, load: F) -> Result<Vec<PetType>, E>
    where
        F: FnOnce() -> Result<Vec<PetType>, E>,
    {
        if let Some(pet_types) = self.cache.get(PET_TYPES_CACHE_KEY) {
            log::info!("Retrieved {} pet types from cache", pet_types.len());
            return Ok(pet_types);
        }

        log::info!("Cache miss - loading all pet types");
        let mut pet_types = load()?;
        pet_types.sort_by(|a, b| a.name.cmp(&b.name));
        self.cache
            .set(PET_TYPES_CACHE_KEY, pet_types.clone(), self.ttl);
        log::info!("Loaded and cached {} pet types", pet_types.len());

        Ok(pet_types)
    }
}

impl Default for PetTypeCache {
    fn default() -> Self {
        Self::with_system_clock(Duration::seconds(DEFAULT_PET_TYPES_TTL_SECS))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::convert::Infallible;

    use chrono::TimeZone;

    use super::*;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap()
    }

    fn types(names: &[&str]) -> Vec<PetType> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| PetType::new(i as i32 + 1, *name))
            .collect()
    }

    #[test]
    fn first_load_is_sorted_by_name() {
        let cache = PetTypeCache::new(Arc::new(ManualClock::new(start())), Duration::hours(24));

        let loaded = cache
            .get_or_load(|| Ok::<_, Infallible>(types(&["Dog", "Cat", "Bird", "Hamster"])))
            .unwrap();

        let names: Vec<&str> = loaded.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Bird", "Cat", "Dog", "Hamster"]);
    }

    #[test]
    fn hits_inside_the_window_skip_the_loader() {
        let clock = Arc::new(ManualClock::new(start()));
        let cache = PetTypeCache::new(clock.clone(), Duration::hours(24));
        let loads = Cell::new(0);

        let first = cache
            .get_or_load(|| {
                loads.set(loads.get() + 1);
                Ok::<_, Infallible>(types(&["Dog", "Cat"]))
            })
            .unwrap();

        clock.advance(Duration::hours(23) + Duration::minutes(59));

        let second = cache
            .get_or_load(|| {
                loads.set(loads.get() + 1);
                Ok::<_, Infallible>(types(&["Dog", "Cat", "Snake"]))
            })
            .unwrap();

        assert_eq!(loads.get(), 1);
        assert_eq!(first, second);
    }

    #[test]
    fn oversized_ttl_caches_without_expiring() {
        let clock = Arc::new(ManualClock::new(start()));
        let cache = PetTypeCache::new(clock.clone(), Duration::seconds(10_000_000_000_000));
        let loads = Cell::new(0);
        let load = || {
            loads.set(loads.get() + 1);
            Ok::<_, Infallible>(types(&["Dog"]))
        };

        assert_eq!(cache.get_or_load(load).unwrap().len(), 1);
        clock.advance(Duration::days(365 * 1000));
        assert_eq!(cache.get_or_load(load).unwrap().len(), 1);

        assert_eq!(loads.get(), 1);
    }

    #[test]
    fn expired_entries_are_reloaded() {
        let clock = Arc::new(ManualClock::new(start()));
        let cache = PetTypeCache::new(clock.clone(), Duration::hours(24));

        cache
            .get_or_load(|| Ok::<_, Infallible>(types(&["Dog"])))
            .unwrap();
        clock.advance(Duration::hours(24));

        let reloaded = cache
            .get_or_load(|| Ok::<_, Infallible>(types(&["Dog", "Snake"])))
            .unwrap();

        assert_eq!(reloaded.len(), 2);
    }

    #[test]
    fn reads_do_not_extend_the_window() {
        let clock = Arc::new(ManualClock::new(start()));
        let cache = ExpiringCache::new(clock.clone());
        cache.set("key", 1, Duration::hours(1));

        clock.advance(Duration::minutes(50));
        assert_eq!(cache.get("key"), Some(1));

        clock.advance(Duration::minutes(10));
        assert_eq!(cache.get("key"), None);
    }

    #[test]
    fn loader_errors_are_not_cached() {
        let cache = PetTypeCache::new(Arc::new(ManualClock::new(start())), Duration::hours(24));

        let failed: Result<Vec<PetType>, &str> = cache.get_or_load(|| Err("database down"));
        assert_eq!(failed, Err("database down"));

        let loaded = cache
            .get_or_load(|| Ok::<_, &str>(types(&["Cat"])))
            .unwrap();
        assert_eq!(loaded.len(), 1);
    }
}
