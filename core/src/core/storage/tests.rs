use super::*;
use crate::types::Config;
use tempfile::TempDir;

mod common {
    use super::*;

    pub(super) fn create_test_db() -> (RedbStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            base_path: temp_dir.path().to_path_buf(),
        };
        let db = RedbStorage::open(&config).unwrap();
        (db, temp_dir)
    }
}

mod redb_storage {
    use super::common::create_test_db;
    use super::*;

    #[test]
    fn test_read_missing_key() {
        let (db, _temp) = create_test_db();
        assert_eq!(db.read("missing").unwrap(), None);
    }

    #[test]
    fn test_write_then_read() {
        let (mut db, _temp) = create_test_db();

        db.write(&[("a", "[1,2]"), ("b", "{}")]).unwrap();

        assert_eq!(db.read("a").unwrap().as_deref(), Some("[1,2]"));
        assert_eq!(db.read("b").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_write_overwrites() {
        let (mut db, _temp) = create_test_db();

        db.write(&[("a", "first")]).unwrap();
        db.write(&[("a", "second")]).unwrap();

        assert_eq!(db.read("a").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_entries_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            base_path: temp_dir.path().join("nested"),
        };

        {
            let mut db = RedbStorage::open(&config).unwrap();
            db.write(&[("k", "v")]).unwrap();
        }

        let db = RedbStorage::open(&config).unwrap();
        assert_eq!(db.read("k").unwrap().as_deref(), Some("v"));
        assert!(config.db_path().exists());
    }

    #[test]
    fn test_empty_batch_is_ok() {
        let (mut db, _temp) = create_test_db();
        db.write(&[]).unwrap();
        assert_eq!(db.read("a").unwrap(), None);
    }
}

mod memory_storage {
    use super::*;

    #[test]
    fn test_write_then_read() {
        let mut storage = MemoryStorage::new();
        assert!(storage.is_empty());

        storage.write(&[("a", "1"), ("b", "2")]).unwrap();

        assert_eq!(storage.len(), 2);
        assert_eq!(storage.read("a").unwrap().as_deref(), Some("1"));
        assert_eq!(storage.get("b"), Some("2"));
    }

    #[test]
    fn test_boxed_storage_delegates() {
        let mut storage: Box<dyn Storage> = Box::new(MemoryStorage::new());
        storage.write(&[("a", "1")]).unwrap();
        assert_eq!(storage.read("a").unwrap().as_deref(), Some("1"));
    }
}
