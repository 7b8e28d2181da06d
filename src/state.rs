use std::sync::{Arc, PoisonError, RwLock};

use crate::data::loader::DatasetSource;
use crate::data::model::Dataset;
use crate::error::Result;

// ---------------------------------------------------------------------------
// Shared dataset state
// ---------------------------------------------------------------------------

/// Holds the current dataset snapshot for concurrent readers.
///
/// Readers take an `Arc` snapshot and keep using it for as long as they need;
/// installing a new dataset swaps the reference and never touches a snapshot
/// already handed out.
#[derive(Debug)]
pub struct DatasetStore {
    current: RwLock<Arc<Dataset>>,
}

impl DatasetStore {
    pub fn new(dataset: Dataset) -> Self {
        DatasetStore {
            current: RwLock::new(Arc::new(dataset)),
        }
    }

    /// Load the initial dataset from `source`.
    pub fn open(source: &dyn DatasetSource) -> Result<Self> {
        Ok(DatasetStore::new(source.load()?))
    }

    /// The dataset currently installed.
    pub fn snapshot(&self) -> Arc<Dataset> {
        // The lock only guards an Arc swap, so a poisoned lock still holds a valid value.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Replace the current dataset.
    pub fn install(&self, dataset: Dataset) {
        let dataset = Arc::new(dataset);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = dataset;
    }

    /// Load a fresh dataset from `source` and install it.
    ///
    /// The load completes before the swap, so a failed load leaves the
    /// previous dataset in place.
    pub fn reload(&self, source: &dyn DatasetSource) -> Result<()> {
        match source.load() {
            Ok(dataset) => {
                log::info!("installing reloaded dataset ({} companies)", dataset.len());
                self.install(dataset);
                Ok(())
            }
            Err(error) => {
                log::warn!("dataset reload failed, keeping previous snapshot: {error}");
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ErrorKind};
    use crate::test_utils::{get_test_dataset, get_test_dataset_abc};

    struct Fixed(Dataset);

    impl DatasetSource for Fixed {
        fn load(&self) -> Result<Dataset> {
            Ok(self.0.clone())
        }
    }

    struct Broken;

    impl DatasetSource for Broken {
        fn load(&self) -> Result<Dataset> {
            Err(Error::MissingColumn { column: "industry" })
        }
    }

    #[test]
    fn snapshot_survives_install() {
        let store = DatasetStore::new(get_test_dataset_abc());
        let before = store.snapshot();
        store.install(get_test_dataset());
        assert_eq!(3, before.len());
        assert_eq!(get_test_dataset().len(), store.snapshot().len());
    }

    #[test]
    fn reload_installs_new_dataset() {
        let store = DatasetStore::open(&Fixed(get_test_dataset_abc())).unwrap();
        store.reload(&Fixed(get_test_dataset())).unwrap();
        assert_eq!(get_test_dataset(), *store.snapshot());
    }

    #[test]
    fn failed_reload_keeps_previous() {
        let store = DatasetStore::new(get_test_dataset_abc());
        let error = store.reload(&Broken).unwrap_err();
        assert_eq!(ErrorKind::Schema, error.kind());
        assert_eq!(get_test_dataset_abc(), *store.snapshot());
    }

    #[test]
    fn concurrent_readers_see_complete_datasets() {
        let store = Arc::new(DatasetStore::new(get_test_dataset_abc()));
        let full = get_test_dataset().len();
        let readers: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        let len = store.snapshot().len();
                        assert!(len == 3 || len == full);
                    }
                })
            })
            .collect();
        for _ in 0..10 {
            store.install(get_test_dataset());
            store.install(get_test_dataset_abc());
        }
        for reader in readers {
            reader.join().unwrap();
        }
    }
}
