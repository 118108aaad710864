use crate::error::Result;
use crate::model::{ScreenSnapshot, WindowHandle};
use std::path::PathBuf;
use tracing::{debug, info};

use super::r#trait::WindowSourceTrait;

/// Снимок экрана из JSON-файла (формат `ScreenSnapshot`, тот же, что
/// печатает `keynav --dump`). Удобно для отладки раскладок без WM.
pub struct SnapshotFileSource {
    path: PathBuf,
}

impl SnapshotFileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait::async_trait]
impl WindowSourceTrait for SnapshotFileSource {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    async fn snapshot(&self) -> Result<ScreenSnapshot> {
        debug!("Читаем снимок экрана из {:?}", self.path);
        let content = std::fs::read_to_string(&self.path)?;
        let snapshot: ScreenSnapshot = serde_json::from_str(&content)?;
        debug!("Загружено окон: {}", snapshot.windows.len());
        Ok(snapshot)
    }

    async fn focus(&self, window: &WindowHandle, raise: bool) -> Result<()> {
        // Файл не меняем: снимок остаётся неизменным между запусками
        info!("Snapshot: фокус на {} (raise: {})", window, raise);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KeynavError;
    use crate::model::WindowId;
    use std::io::Write;

    #[tokio::test]
    async fn test_reads_snapshot_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "screen": {{ "width": 800, "height": 600 }},
                "active": 10,
                "windows": [
                    {{ "id": 10, "title": "left", "rect": {{ "x": 0, "y": 0, "width": 400, "height": 600 }} }},
                    {{ "id": 11, "title": "right", "rect": {{ "x": 400, "y": 0, "width": 400, "height": 600 }} }}
                ]
            }}"#
        )
        .unwrap();

        let source = SnapshotFileSource::new(file.path().to_path_buf());
        let snapshot = source.snapshot().await.unwrap();

        assert_eq!(snapshot.active, Some(WindowId(10)));
        assert_eq!(snapshot.windows.len(), 2);
        assert_eq!(snapshot.windows[1].title, "right");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let source = SnapshotFileSource::new(PathBuf::from("/non/existent/snapshot.json"));
        assert!(matches!(source.snapshot().await, Err(KeynavError::Io(_))));
    }

    #[tokio::test]
    async fn test_malformed_file_is_json_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let source = SnapshotFileSource::new(file.path().to_path_buf());
        assert!(matches!(source.snapshot().await, Err(KeynavError::Json(_))));
    }
}
