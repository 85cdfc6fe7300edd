// ABOUTME: Tests for the alias switcher.
// ABOUTME: Create-first, update-thereafter, and idempotent repoints.

mod support;

use bytes::Bytes;
use strofi::deploy::{DeployError, point_alias_to};
use strofi::platform::MemoryPlatform;
use strofi::types::{AliasName, FunctionName, VersionId};

fn seeded(name: &FunctionName) -> MemoryPlatform {
    let platform = MemoryPlatform::new();
    platform.seed_function(name, 1, Bytes::from_static(b"code"));
    platform
}

#[tokio::test]
async fn first_call_creates_the_alias() {
    let function = FunctionName::new("aliased-fn").unwrap();
    let alias = AliasName::new("live").unwrap();
    let platform = seeded(&function);

    point_alias_to(&platform, &function, &alias, &VersionId::new("1"))
        .await
        .expect("alias creation should succeed");

    assert_eq!(
        platform.alias_target(&function, &alias).unwrap().as_str(),
        "1"
    );
    let counts = platform.counts();
    assert_eq!(counts.create_alias, 1);
    assert_eq!(counts.update_alias, 0);
}

#[tokio::test]
async fn subsequent_calls_update_and_never_create_again() {
    let function = FunctionName::new("aliased-fn").unwrap();
    let alias = AliasName::new("live").unwrap();
    let platform = seeded(&function);

    point_alias_to(&platform, &function, &alias, &VersionId::new("1"))
        .await
        .expect("create should succeed");
    point_alias_to(&platform, &function, &alias, &VersionId::new("2"))
        .await
        .expect("repoint should succeed");
    point_alias_to(&platform, &function, &alias, &VersionId::new("3"))
        .await
        .expect("repoint should succeed");

    assert_eq!(
        platform.alias_target(&function, &alias).unwrap().as_str(),
        "3"
    );
    let counts = platform.counts();
    assert_eq!(counts.create_alias, 1);
    assert_eq!(counts.update_alias, 2);
}

#[tokio::test]
async fn repointing_to_the_same_version_is_idempotent() {
    let function = FunctionName::new("aliased-fn").unwrap();
    let alias = AliasName::new("live").unwrap();
    let platform = seeded(&function);

    point_alias_to(&platform, &function, &alias, &VersionId::new("1"))
        .await
        .expect("create should succeed");
    let once = platform.alias_target(&function, &alias).unwrap();

    point_alias_to(&platform, &function, &alias, &VersionId::new("1"))
        .await
        .expect("repeat should succeed");
    let twice = platform.alias_target(&function, &alias).unwrap();

    assert_eq!(once, twice);
}

#[tokio::test]
async fn create_failure_other_than_conflict_is_fatal() {
    let function = FunctionName::new("ghost-fn").unwrap();
    let alias = AliasName::new("live").unwrap();
    let platform = MemoryPlatform::new();

    let err = point_alias_to(&platform, &function, &alias, &VersionId::new("1"))
        .await
        .err()
        .expect("aliasing a missing function should fail");
    assert!(matches!(err, DeployError::AliasFailed(_)));
}
