//! Load-then-freeze translation catalog.
//!
//! Translations live server-side and are fetched in groups before a command
//! runs. Lookups are pure and never fail (they fall back to the key), and the
//! table behind them is replaced atomically on every load: readers see either
//! the old table or the new one, never a partially merged state.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, RwLock};

use url::Url;

use crate::error::CheckTimeResult;

/// The process-wide catalog used by [`t`] and [`translate_or`].
pub static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::new);

/// Look up a translation in the process-wide catalog, falling back to the
/// key itself.
pub fn t(key: &str) -> String {
    CATALOG.translate(key)
}

/// Look up a translation in the process-wide catalog with an explicit
/// fallback.
pub fn translate_or(key: &str, fallback: &str) -> String {
    CATALOG.translate_or(key, fallback)
}

/// An atomically replaceable translation table.
pub struct Catalog {
    table: RwLock<Arc<HashMap<String, String>>>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Catalog {
            table: RwLock::new(Arc::new(HashMap::new())),
        }
    }

    /// Translate `key`, falling back to the key itself.
    pub fn translate(&self, key: &str) -> String {
        self.translate_or(key, key)
    }

    /// Translate `key`, falling back to `fallback`.
    pub fn translate_or(&self, key: &str, fallback: &str) -> String {
        self.snapshot()
            .get(key)
            .cloned()
            .unwrap_or_else(|| fallback.to_string())
    }

    /// A point-in-time view of the whole table.
    pub fn entries(&self) -> HashMap<String, String> {
        (*self.snapshot()).clone()
    }

    /// Replace the whole table.
    pub fn replace(&self, entries: HashMap<String, String>) {
        *self.write_guard() = Arc::new(entries);
    }

    /// Fold `entries` into the table. The new table is built in full and
    /// swapped in one store; later entries win over existing ones.
    pub fn merge(&self, entries: HashMap<String, String>) {
        let mut guard = self.write_guard();
        let mut next = (**guard).clone();
        next.extend(entries);
        *guard = Arc::new(next);
    }

    /// Fetch and merge the translations of one group
    /// (`/api/translations/group/{group}`). Returns how many entries the
    /// server sent.
    pub async fn load_group(
        &self,
        http: &reqwest::Client,
        base_url: &Url,
        group: &str,
    ) -> CheckTimeResult<usize> {
        let url = base_url.join(&format!("/api/translations/group/{group}"))?;
        let entries: HashMap<String, String> =
            http.get(url).send().await?.error_for_status()?.json().await?;
        let count = entries.len();
        self.merge(entries);
        tracing::debug!(count, group, "loaded translation group");
        Ok(count)
    }

    /// Fetch and merge specific keys (`/api/translations/keys/{k1,k2}`).
    pub async fn load_keys(
        &self,
        http: &reqwest::Client,
        base_url: &Url,
        keys: &[&str],
    ) -> CheckTimeResult<usize> {
        let url = base_url.join(&format!("/api/translations/keys/{}", keys.join(",")))?;
        let entries: HashMap<String, String> =
            http.get(url).send().await?.error_for_status()?.json().await?;
        let count = entries.len();
        self.merge(entries);
        Ok(count)
    }

    /// Fetch the complete table for a language (`/api/translations/{lang}`)
    /// and replace the current one wholesale.
    pub async fn load_language(
        &self,
        http: &reqwest::Client,
        base_url: &Url,
        language: &str,
    ) -> CheckTimeResult<usize> {
        let url = base_url.join(&format!("/api/translations/{language}"))?;
        let entries: HashMap<String, String> =
            http.get(url).send().await?.error_for_status()?.json().await?;
        let count = entries.len();
        self.replace(entries);
        tracing::debug!(count, language, "loaded language table");
        Ok(count)
    }

    fn snapshot(&self) -> Arc<HashMap<String, String>> {
        match self.table.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    fn write_guard(&self) -> std::sync::RwLockWriteGuard<'_, Arc<HashMap<String, String>>> {
        match self.table.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
