use super::*;
use crate::model::command::TimeRemaining;

/// Tests querying time remaining with no configured event.
///
/// Expected: Err(NoActiveEvent)
#[tokio::test]
async fn time_remaining_without_event() {
    let (service, _platform) = service();

    let result = service.time_remaining(impact()).await;

    assert!(matches!(result, Err(CommandError::NoActiveEvent)));
}

/// Tests querying time remaining before impact.
///
/// Expected: Ok with the formatted duration
#[tokio::test]
async fn time_remaining_before_impact() {
    let (service, _platform, _channel) = configured_service().await;
    let now = impact() - TimeDelta::days(10) - TimeDelta::hours(4) - TimeDelta::minutes(32);

    let result = service.time_remaining(now).await.unwrap();

    assert_eq!(result, TimeRemaining::Remaining("10d 4h 32m".to_string()));
}

/// Tests querying time remaining at and after impact.
///
/// Expected: Ok(AlreadyOccurred) carrying the event name
#[tokio::test]
async fn time_remaining_after_impact() {
    let (service, _platform, _channel) = configured_service().await;

    for now in [impact(), impact() + TimeDelta::minutes(5)] {
        let result = service.time_remaining(now).await.unwrap();
        assert_eq!(
            result,
            TimeRemaining::AlreadyOccurred {
                event_name: "meteor impact".to_string()
            }
        );
    }
}

/// Tests querying the impact time.
///
/// Expected: Ok with human readable and ISO-8601 renderings
#[tokio::test]
async fn impact_time_renders_both_forms() {
    let (service, _platform, _channel) = configured_service().await;

    let result = service.impact_time().await.unwrap();

    assert_eq!(result.event_name, "meteor impact");
    assert_eq!(result.human_readable(), "2026-01-20 16:47 (UTC)");
    assert_eq!(result.iso_timestamp(), "2026-01-20T16:47:00+00:00");
}

/// Tests querying the impact time with no configured event.
///
/// Expected: Err(NoActiveEvent)
#[tokio::test]
async fn impact_time_without_event() {
    let (service, _platform) = service();

    assert!(matches!(
        service.impact_time().await,
        Err(CommandError::NoActiveEvent)
    ));
}
