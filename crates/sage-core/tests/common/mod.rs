use std::sync::Arc;

use sage_core::{EngineBuilder, ScheduleGenerator};
use tempfile::TempDir;

/// Helper function to create a test engine with the default offline
/// collaborators.
pub async fn create_test_engine() -> (TempDir, sage_core::Engine) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let engine = EngineBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create engine");
    (temp_dir, engine)
}

/// Helper function to create a test engine with a custom generator.
pub async fn create_test_engine_with(
    generator: Arc<dyn ScheduleGenerator>,
) -> (TempDir, sage_core::Engine) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let engine = EngineBuilder::new()
        .with_database_path(Some(&db_path))
        .with_generator(generator)
        .build()
        .await
        .expect("Failed to create engine");
    (temp_dir, engine)
}
