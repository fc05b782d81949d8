use crate::turso::{initialize_schema, TursoClient};
use tempfile::TempDir;

async fn setup_client() -> (TursoClient, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let client = TursoClient::new(temp_dir.path().to_path_buf())
        .await
        .expect("Failed to create client");
    initialize_schema(&client)
        .await
        .expect("Failed to initialize schema");
    (client, temp_dir)
}

#[tokio::test]
async fn test_upsert_and_load_abbreviation() {
    let (client, _temp) = setup_client().await;

    client
        .upsert_abbreviation(":htn ", "Hypertension")
        .await
        .expect("Failed to upsert");

    let entries = client.load_abbreviations().await.expect("Failed to load");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries.get(":htn "), Some(&"Hypertension".to_string()));
}

#[tokio::test]
async fn test_upsert_existing_key_overwrites() {
    let (client, _temp) = setup_client().await;

    client
        .upsert_abbreviation(":dm ", "Diabetes")
        .await
        .expect("First upsert failed");
    client
        .upsert_abbreviation(":dm ", "Diabetes Mellitus")
        .await
        .expect("Second upsert failed");

    let entries = client.load_abbreviations().await.expect("Failed to load");
    assert_eq!(entries.len(), 1, "Upsert must not create a duplicate row");
    assert_eq!(entries.get(":dm "), Some(&"Diabetes Mellitus".to_string()));
}

#[tokio::test]
async fn test_delete_abbreviation() {
    let (client, _temp) = setup_client().await;

    client
        .upsert_abbreviation(":mi ", "Myocardial Infarction")
        .await
        .expect("Failed to upsert");
    client
        .delete_abbreviation(":mi ")
        .await
        .expect("Failed to delete");

    let entries = client.load_abbreviations().await.expect("Failed to load");
    assert!(entries.is_empty());
}

#[tokio::test]
async fn test_delete_missing_key_is_noop() {
    let (client, _temp) = setup_client().await;

    client
        .delete_abbreviation(":absent ")
        .await
        .expect("Deleting a missing key should succeed");
}

#[tokio::test]
async fn test_load_empty_dictionary() {
    let (client, _temp) = setup_client().await;

    let entries = client.load_abbreviations().await.expect("Failed to load");
    assert!(entries.is_empty());
}
