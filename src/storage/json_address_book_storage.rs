use crate::domain::ports::Storage;
use crate::domain::AddressBook;
use crate::storage::json_serializable_address_book::JsonSerializableAddressBook;
use crate::utils::error::{BookError, Result};

/// 以 JSON 檔保存通訊錄
pub struct JsonAddressBookStorage<S: Storage> {
    storage: S,
    file_path: String,
}

impl<S: Storage> JsonAddressBookStorage<S> {
    pub fn new(storage: S, file_path: impl Into<String>) -> Self {
        Self {
            storage,
            file_path: file_path.into(),
        }
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// 讀取通訊錄；檔案不存在時回傳 `Ok(None)`。
    ///
    /// # Errors
    /// 檔案無法讀取、不是合法 JSON 或資料驗證失敗時回傳 `DataLoadingError`。
    pub async fn read_address_book(&self) -> Result<Option<AddressBook>> {
        if !self.storage.exists(&self.file_path).await? {
            tracing::info!("Address book file {} not found", self.file_path);
            return Ok(None);
        }

        let data = self
            .storage
            .read_file(&self.file_path)
            .await
            .map_err(|e| BookError::data_loading(&self.file_path, e))?;

        let serializable: JsonSerializableAddressBook = serde_json::from_slice(&data)
            .map_err(|e| BookError::data_loading(&self.file_path, e.into()))?;

        let book = serializable.to_domain().map_err(|e| {
            tracing::warn!("Illegal values found in {}: {}", self.file_path, e);
            BookError::data_loading(&self.file_path, e.into())
        })?;

        tracing::debug!(
            "Loaded {} persons and {} weddings from {}",
            book.persons().len(),
            book.weddings().len(),
            self.file_path
        );
        Ok(Some(book))
    }

    pub async fn save_address_book(&self, book: &AddressBook) -> Result<()> {
        let serializable = JsonSerializableAddressBook::from(book);
        let json = serde_json::to_vec_pretty(&serializable)?;
        self.storage.write_file(&self.file_path, &json).await?;
        tracing::debug!("Saved address book to {}", self.file_path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                BookError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }

        async fn exists(&self, path: &str) -> Result<bool> {
            Ok(self.files.lock().await.contains_key(path))
        }
    }

    #[tokio::test]
    async fn test_missing_file_is_none() {
        let storage = JsonAddressBookStorage::new(MockStorage::default(), "book.json");
        assert!(storage.read_address_book().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_malformed_json_is_data_loading_error() {
        let mock = MockStorage::default();
        mock.write_file("book.json", b"{ not json").await.unwrap();
        let storage = JsonAddressBookStorage::new(mock, "book.json");

        let err = storage.read_address_book().await.unwrap_err();
        assert!(matches!(
            err,
            BookError::DataLoadingError { ref path, ref source }
                if path == "book.json" && matches!(**source, BookError::SerializationError(_))
        ));
    }

    #[tokio::test]
    async fn test_save_then_read_empty_book() {
        let storage = JsonAddressBookStorage::new(MockStorage::default(), "book.json");
        storage.save_address_book(&AddressBook::new()).await.unwrap();
        let book = storage.read_address_book().await.unwrap().unwrap();
        assert_eq!(book, AddressBook::new());
    }
}
