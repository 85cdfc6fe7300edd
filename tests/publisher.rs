// ABOUTME: Tests for the version publisher.
// ABOUTME: Create-vs-conflict paths and publish-on-update semantics.

mod support;

use bytes::Bytes;
use strofi::artifact::{CodeArtifact, Color};
use strofi::deploy::{DeployError, publish_initial, publish_update};
use strofi::platform::MemoryPlatform;

#[tokio::test]
async fn first_publish_creates_the_function() {
    let platform = MemoryPlatform::new();
    let config = support::test_config("new-fn");

    let version = publish_initial(
        &platform,
        &config,
        CodeArtifact::from_bytes(Color::Blue, "blue build"),
    )
    .await
    .expect("publish should succeed");

    assert_eq!(version.as_str(), "1");
    let counts = platform.counts();
    assert_eq!(counts.create_function, 1);
    // success path never needs to fetch the existing function
    assert_eq!(counts.get_function, 0);
    assert_eq!(
        platform.function_code(&config.function),
        Some(Bytes::from_static(b"blue build"))
    );
}

#[tokio::test]
async fn conflict_degrades_to_fetching_the_existing_version() {
    let platform = MemoryPlatform::new();
    let config = support::test_config("existing-fn");
    platform.seed_function(&config.function, 7, Bytes::from_static(b"old build"));

    let version = publish_initial(
        &platform,
        &config,
        CodeArtifact::from_bytes(Color::Blue, "blue build"),
    )
    .await
    .expect("conflict is not an error");

    assert_eq!(version.as_str(), "7");
    // the existing function was left untouched
    assert_eq!(
        platform.function_code(&config.function),
        Some(Bytes::from_static(b"old build"))
    );
    assert_eq!(platform.counts().get_function, 1);
}

#[tokio::test]
async fn update_mints_a_new_immutable_version() {
    let platform = MemoryPlatform::new();
    let config = support::test_config("updating-fn");
    platform.seed_function(&config.function, 1, Bytes::from_static(b"blue build"));

    let version = publish_update(
        &platform,
        &config,
        CodeArtifact::from_bytes(Color::Green, "green build"),
    )
    .await
    .expect("update should succeed");

    assert_eq!(version.as_str(), "2");
    assert_eq!(
        platform.function_code(&config.function),
        Some(Bytes::from_static(b"green build"))
    );
}

#[tokio::test]
async fn update_of_a_missing_function_is_fatal() {
    let platform = MemoryPlatform::new();
    let config = support::test_config("ghost-fn");

    let err = publish_update(
        &platform,
        &config,
        CodeArtifact::from_bytes(Color::Green, "green build"),
    )
    .await
    .err()
    .expect("update should fail");

    match err {
        DeployError::FunctionMissing(name) => assert_eq!(name, "ghost-fn"),
        other => panic!("expected FunctionMissing, got {other:?}"),
    }
}
