use crate::errors::AppError;
use crate::models::HabitData;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, warn};

pub async fn load_data(path: &Path) -> HabitData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<HabitData>(&bytes) {
            Ok(data) => {
                info!("loaded {} habits from {}", data.habits.len(), path.display());
                data
            }
            Err(err) => {
                error!("failed to parse data file: {err}");
                HabitData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => HabitData::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            HabitData::default()
        }
    }
}

/// Writes next to `path` first so a failed write never truncates the last good file.
pub async fn persist_data(path: &Path, data: &HabitData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data)?;
    let tmp = temp_path(path);
    fs::write(&tmp, payload).await?;
    if let Err(err) = fs::rename(&tmp, path).await {
        if let Err(cleanup) = fs::remove_file(&tmp).await {
            warn!("failed to remove {}: {cleanup}", tmp.display());
        }
        return Err(err.into());
    }
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let data = load_data(&dir.path().join("absent.json")).await;
        assert!(data.habits.is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("habits.json");
        std::fs::write(&path, b"{ not json").unwrap();

        assert!(load_data(&path).await.habits.is_empty());
    }

    #[tokio::test]
    async fn persisted_habits_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("habits.json");
        let date = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();

        let mut data = HabitData::default();
        let habit = data.create("stretch", date, "");
        data.mark_date(habit.id, date, true).unwrap();
        persist_data(&path, &data).await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"2025-01-10\": \"done\""));
        assert!(!temp_path(&path).exists());

        let loaded = load_data(&path).await;
        assert_eq!(loaded.habits.len(), 1);
        assert_eq!(loaded.habits[0].id, habit.id);
        assert!(loaded.habits[0].is_done(date));
    }

    #[tokio::test]
    async fn persist_fails_when_directory_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("habits.json");

        let err = persist_data(&path, &HabitData::default()).await.unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn failed_rename_removes_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        // A non-empty directory at the target path makes the rename fail.
        let path = dir.path().join("habits.json");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), b"x").unwrap();

        let err = persist_data(&path, &HabitData::default()).await.unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!temp_path(&path).exists());
        assert!(path.join("keep").exists());
    }
}
