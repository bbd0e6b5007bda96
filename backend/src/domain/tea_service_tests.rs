//! Tests for the tea service.

use std::sync::Arc;

use rstest::rstest;

use super::*;
use crate::domain::ports::MockTeaRepository;
use crate::domain::{CaffeineLevel, ErrorCode, TeaType};
use crate::test_support::{MutableClock, fixture_timestamp};

fn stored_tea() -> Tea {
    Tea {
        id: Uuid::new_v4(),
        name: "Dragon Well".to_owned(),
        tea_type: TeaType::Green,
        origin: Some("Hangzhou".to_owned()),
        caffeine_level: CaffeineLevel::Medium,
        steep_temp_celsius: 80,
        steep_time_seconds: 120,
        description: None,
        created_at: fixture_timestamp(),
        updated_at: fixture_timestamp(),
    }
}

#[rstest]
#[tokio::test]
async fn create_applies_default_caffeine_level() {
    let mut repo = MockTeaRepository::new();
    repo.expect_create()
        .withf(|tea| tea.caffeine_level == CaffeineLevel::Medium)
        .times(1)
        .return_const(());

    let service = TeaService::new(Arc::new(repo), Arc::new(MutableClock::default()));
    let tea = service
        .create(TeaInput {
            name: Some("Assam".to_owned()),
            tea_type: Some("black".to_owned()),
            steep_temp_celsius: Some(95),
            steep_time_seconds: Some(240),
            ..TeaInput::default()
        })
        .await
        .expect("tea created");

    assert_eq!(tea.tea_type, TeaType::Black);
    assert_eq!(tea.created_at, tea.updated_at);
}

#[rstest]
#[tokio::test]
async fn get_reports_missing_tea() {
    let mut repo = MockTeaRepository::new();
    repo.expect_find().times(1).returning(|_| None);

    let service = TeaService::new(Arc::new(repo), Arc::new(MutableClock::default()));
    let err = service.get(Uuid::new_v4()).await.expect_err("missing tea");

    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), "Tea not found");
}

#[rstest]
#[tokio::test]
async fn patch_validates_after_existence_check() {
    let existing = stored_tea();
    let id = existing.id;
    let mut repo = MockTeaRepository::new();
    repo.expect_find().return_const(Some(existing));
    repo.expect_update().never();

    let service = TeaService::new(Arc::new(repo), Arc::new(MutableClock::default()));
    let err = service
        .patch(
            id,
            TeaInput {
                steep_temp_celsius: Some(120),
                ..TeaInput::default()
            },
        )
        .await
        .expect_err("temperature out of range");

    assert_eq!(err.code(), ErrorCode::ValidationError);
    let field = err
        .details()
        .and_then(|details| details.get("field"))
        .and_then(serde_json::Value::as_str);
    assert_eq!(field, Some("steepTempCelsius"));
}

#[rstest]
#[tokio::test]
async fn patch_refreshes_updated_at_only() {
    let existing = stored_tea();
    let id = existing.id;
    let mut repo = MockTeaRepository::new();
    repo.expect_find().return_const(Some(existing));
    repo.expect_update().times(1).return_const(());

    let clock = Arc::new(MutableClock::default());
    clock.advance_seconds(30);
    let service = TeaService::new(Arc::new(repo), clock);
    let tea = service
        .patch(
            id,
            TeaInput {
                caffeine_level: Some("low".to_owned()),
                ..TeaInput::default()
            },
        )
        .await
        .expect("patched");

    assert_eq!(tea.caffeine_level, CaffeineLevel::Low);
    assert_eq!(tea.origin.as_deref(), Some("Hangzhou"));
    assert_eq!(tea.created_at, fixture_timestamp());
    assert_eq!(tea.updated_at, fixture_timestamp() + chrono::TimeDelta::seconds(30));
}
