// ABOUTME: End-to-end tests for the rollout state machine.
// ABOUTME: Exercises the full blue-gate-green sequence against MemoryPlatform.

mod support;

use strofi::artifact::{CodeArtifact, Color};
use strofi::deploy::{DeployError, Rollout};
use strofi::gate::ChannelGate;
use strofi::platform::{FunctionState, MemoryPlatform};

fn blue_artifact() -> CodeArtifact {
    CodeArtifact::from_bytes(Color::Blue, "blue build")
}

fn green_artifact() -> CodeArtifact {
    CodeArtifact::from_bytes(Color::Green, "green build")
}

/// Fresh function, readiness [Pending, Pending, Active], gate signaled:
/// version 1 is created and aliased, version 2 published and aliased.
#[tokio::test]
async fn fresh_function_rolls_out_blue_then_green() {
    let platform = MemoryPlatform::new();
    let config = support::test_config("bluegreen-fn");
    platform.script_states(
        &config.function,
        [
            (FunctionState::Pending, None),
            (FunctionState::Pending, None),
            (FunctionState::Active, None),
        ],
    );

    let (gate, approve) = ChannelGate::new();
    approve.send(()).expect("gate receiver is alive");

    let rollout = Rollout::new(config.clone())
        .publish_blue(&platform, blue_artifact())
        .await
        .expect("blue publish should succeed");
    assert_eq!(rollout.blue_version().as_str(), "1");

    let rollout = rollout
        .promote(&platform)
        .await
        .expect("blue promotion should succeed");
    assert_eq!(
        platform
            .alias_target(&config.function, &config.alias)
            .expect("alias should exist after blue promotion")
            .as_str(),
        "1"
    );

    let rollout = rollout.await_gate(&gate).await.expect("gate was signaled");

    let rollout = rollout
        .publish_green(&platform, green_artifact())
        .await
        .expect("green publish should succeed");
    assert_eq!(rollout.green_version().as_str(), "2");

    let summary = rollout
        .promote(&platform)
        .await
        .expect("green promotion should succeed")
        .finish();
    assert_eq!(summary.blue.as_str(), "1");
    assert_eq!(summary.green.as_str(), "2");
    assert_eq!(summary.alias.as_str(), "live");

    assert_eq!(
        platform
            .alias_target(&config.function, &config.alias)
            .expect("alias should exist")
            .as_str(),
        "2"
    );

    let counts = platform.counts();
    assert_eq!(counts.create_function, 1);
    assert_eq!(counts.update_code, 1);
    assert_eq!(counts.create_alias, 1);
    assert_eq!(counts.update_alias, 1);
    // 3 scripted observations for blue, one default Active for green
    assert_eq!(counts.get_function, 4);
}

/// Readiness reports Failed before the alias is ever touched: the run
/// aborts carrying the platform reason and no alias exists afterward.
#[tokio::test]
async fn blue_activation_failure_aborts_before_any_alias_call() {
    let platform = MemoryPlatform::new();
    let config = support::test_config("failing-fn");
    platform.script_states(
        &config.function,
        [(FunctionState::Failed, Some("OutOfMemory".to_string()))],
    );

    let rollout = Rollout::new(config.clone())
        .publish_blue(&platform, blue_artifact())
        .await
        .expect("publish itself should succeed");

    let err = rollout
        .promote(&platform)
        .await
        .err()
        .expect("promotion should fail");
    match err {
        DeployError::ActivationFailed(reason) => assert_eq!(reason, "OutOfMemory"),
        other => panic!("expected ActivationFailed, got {other:?}"),
    }

    assert!(!platform.alias_exists(&config.function, &config.alias));
    assert_eq!(platform.counts().create_alias, 0);
    assert_eq!(platform.counts().update_alias, 0);
}

/// A green-phase failure leaves the alias where it was: on blue.
#[tokio::test]
async fn green_failure_leaves_traffic_on_blue() {
    let platform = MemoryPlatform::new();
    let config = support::test_config("half-rollout");

    let (gate, approve) = ChannelGate::new();
    approve.send(()).expect("gate receiver is alive");

    let rollout = Rollout::new(config.clone())
        .publish_blue(&platform, blue_artifact())
        .await
        .expect("blue publish should succeed")
        .promote(&platform)
        .await
        .expect("blue promotion should succeed")
        .await_gate(&gate)
        .await
        .expect("gate was signaled");

    platform.script_states(
        &config.function,
        [(FunctionState::Failed, Some("handler crashed".to_string()))],
    );

    let err = rollout
        .publish_green(&platform, green_artifact())
        .await
        .expect("green publish should succeed")
        .promote(&platform)
        .await
        .err()
        .expect("green promotion should fail");
    assert!(matches!(err, DeployError::ActivationFailed(_)));

    // traffic stays on the last successfully applied target
    assert_eq!(
        platform
            .alias_target(&config.function, &config.alias)
            .expect("alias should still exist")
            .as_str(),
        "1"
    );
}

/// The green artifact is not published until the gate signals continue.
#[tokio::test]
async fn green_publish_waits_for_the_gate() {
    let platform = MemoryPlatform::new();
    let config = support::test_config("gated-fn");

    let (gate, approve) = ChannelGate::new();

    let rollout = Rollout::new(config)
        .publish_blue(&platform, blue_artifact())
        .await
        .expect("blue publish should succeed")
        .promote(&platform)
        .await
        .expect("blue promotion should succeed");

    // Blue half complete, gate not yet signaled: no code update has happened.
    assert_eq!(platform.counts().update_code, 0);

    approve.send(()).expect("gate receiver is alive");
    let rollout = rollout.await_gate(&gate).await.expect("gate was signaled");

    rollout
        .publish_green(&platform, green_artifact())
        .await
        .expect("green publish should succeed");
    assert_eq!(platform.counts().update_code, 1);
}

/// A gate whose sender is dropped can never approve: the rollout aborts.
#[tokio::test]
async fn dropped_gate_aborts_the_rollout() {
    let platform = MemoryPlatform::new();
    let config = support::test_config("abandoned-fn");

    let (gate, approve) = ChannelGate::new();
    drop(approve);

    let err = Rollout::new(config)
        .publish_blue(&platform, blue_artifact())
        .await
        .expect("blue publish should succeed")
        .promote(&platform)
        .await
        .expect("blue promotion should succeed")
        .await_gate(&gate)
        .await
        .err()
        .expect("gate wait should fail");
    assert!(matches!(err, DeployError::Gate(_)));

    // no green activity happened
    assert_eq!(platform.counts().update_code, 0);
}
