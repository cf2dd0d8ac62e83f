//! Admin target use cases against mocked ports.

mod support;

use std::sync::Arc;

use sr_app::usecases::targets::{
    DeleteTarget, DuplicateTarget, LoadTargetForm, SaveAction, SubmitTargetForm, TargetForm,
    TargetUseCaseError,
};
use sr_app::{Route, SubmitOutcome};
use sr_core::ports::TargetRepositoryError;
use sr_core::{AnimationOptions, Settings, TargetId};
use support::*;

fn form(id: i64, selector: &str) -> TargetForm {
    TargetForm {
        id: TargetId::new(id),
        selector: selector.to_string(),
        label: String::new(),
        comment: String::new(),
        enabled: true,
        options: AnimationOptions::default(),
    }
}

fn submit_uc(repo: MockTargetRepo, cache: MockDerivedCache) -> SubmitTargetForm {
    SubmitTargetForm::new(Arc::new(repo), Arc::new(cache), Arc::new(FixedClock))
}

#[tokio::test]
async fn loading_missing_target_is_not_found() {
    let mut repo = MockTargetRepo::new();
    repo.expect_get_by_id().returning(|_| Ok(None));

    let uc = LoadTargetForm::new(Arc::new(repo), Arc::new(settings_returning(Settings::default())));
    let err = uc.execute(TargetId::new(9)).await.unwrap_err();

    assert!(matches!(err, TargetUseCaseError::NotFound(id) if id == TargetId::new(9)));
}

#[tokio::test]
async fn new_form_starts_enabled_with_global_defaults() {
    let mut settings = Settings::default();
    settings.options.duration = 1200;

    let uc = LoadTargetForm::new(
        Arc::new(MockTargetRepo::new()),
        Arc::new(settings_returning(settings)),
    );
    let form = uc.execute(TargetId::NEW).await.unwrap();

    assert!(form.enabled);
    assert!(form.selector.is_empty());
    assert_eq!(form.options.duration, 1200);
}

#[tokio::test]
async fn blank_selector_is_rejected_without_writing() {
    let mut repo = MockTargetRepo::new();
    repo.expect_upsert().times(0);
    let mut cache = MockDerivedCache::new();
    cache.expect_flush_derived().times(0);

    let outcome = submit_uc(repo, cache)
        .execute(form(0, "   "), SaveAction::Save)
        .await
        .unwrap();

    match outcome {
        SubmitOutcome::Invalid(errors) => {
            assert_eq!(errors.get("selector"), ["Selector field is required.".to_string()]);
        }
        other => panic!("expected invalid outcome, got {other:?}"),
    }
}

#[tokio::test]
async fn over_long_label_is_rejected() {
    let mut repo = MockTargetRepo::new();
    repo.expect_exists().returning(|_| Ok(false));
    repo.expect_upsert().times(0);

    let mut f = form(0, ".hero");
    f.label = "x".repeat(65);

    let outcome = submit_uc(repo, MockDerivedCache::new())
        .execute(f, SaveAction::Save)
        .await
        .unwrap();

    assert!(matches!(outcome, SubmitOutcome::Invalid(ref e) if e.has("label")));
}

#[tokio::test]
async fn out_of_range_opacity_is_rejected() {
    let mut repo = MockTargetRepo::new();
    repo.expect_exists().returning(|_| Ok(false));
    repo.expect_upsert().times(0);

    let mut f = form(0, ".hero");
    f.options.opacity = 1.5;

    let outcome = submit_uc(repo, MockDerivedCache::new())
        .execute(f, SaveAction::Save)
        .await
        .unwrap();

    assert!(matches!(outcome, SubmitOutcome::Invalid(ref e) if e.has("opacity")));
}

#[tokio::test]
async fn editing_missing_target_fails_before_validation() {
    let mut repo = MockTargetRepo::new();
    repo.expect_get_by_id().returning(|_| Ok(None));
    repo.expect_exists().times(0);

    let err = submit_uc(repo, MockDerivedCache::new())
        .execute(form(4, ""), SaveAction::Save)
        .await
        .unwrap_err();

    assert!(matches!(err, TargetUseCaseError::NotFound(_)));
}

#[tokio::test]
async fn renaming_onto_existing_selector_says_already_added() {
    let mut repo = MockTargetRepo::new();
    repo.expect_get_by_id().returning(|_| Ok(Some(record(".old"))));
    repo.expect_exists()
        .withf(|s| s == ".taken")
        .returning(|_| Ok(true));
    repo.expect_upsert().times(0);

    let outcome = submit_uc(repo, MockDerivedCache::new())
        .execute(form(3, ".taken"), SaveAction::Save)
        .await
        .unwrap();

    match outcome {
        SubmitOutcome::Invalid(errors) => {
            assert_eq!(errors.get("selector"), ["This selector is already added.".to_string()]);
        }
        other => panic!("expected invalid outcome, got {other:?}"),
    }
}

#[tokio::test]
async fn keeping_own_selector_skips_uniqueness_check() {
    let mut repo = MockTargetRepo::new();
    repo.expect_get_by_id().returning(|_| Ok(Some(record(".hero"))));
    repo.expect_exists().times(0);
    repo.expect_upsert().returning(|draft| Ok(draft.id));
    let mut cache = MockDerivedCache::new();
    cache.expect_flush_derived().times(1).return_const(());

    let outcome = submit_uc(repo, cache)
        .execute(form(3, ".hero"), SaveAction::SaveAndReturnToList)
        .await
        .unwrap();

    match outcome {
        SubmitOutcome::Saved { id, redirect, .. } => {
            assert_eq!(id, TargetId::new(3));
            assert_eq!(redirect, Route::list());
        }
        other => panic!("expected saved outcome, got {other:?}"),
    }
}

#[tokio::test]
async fn concurrent_insert_of_same_selector_becomes_form_error() {
    let mut repo = MockTargetRepo::new();
    repo.expect_exists().returning(|_| Ok(false));
    repo.expect_upsert()
        .returning(|draft| Err(TargetRepositoryError::DuplicateSelector(draft.selector)));
    let mut cache = MockDerivedCache::new();
    cache.expect_flush_derived().times(0);

    let outcome = submit_uc(repo, cache)
        .execute(form(0, ".hero"), SaveAction::Save)
        .await
        .unwrap();

    assert!(matches!(outcome, SubmitOutcome::Invalid(ref e) if e.has("selector")));
}

#[tokio::test]
async fn storage_failure_propagates() {
    let mut repo = MockTargetRepo::new();
    repo.expect_exists()
        .returning(|_| Err(TargetRepositoryError::Storage("disk full".into())));

    let err = submit_uc(repo, MockDerivedCache::new())
        .execute(form(0, ".hero"), SaveAction::Save)
        .await
        .unwrap_err();

    assert!(matches!(err, TargetUseCaseError::Storage(_)));
}

#[tokio::test]
async fn delete_removes_row_and_flushes_cache() {
    let mut repo = MockTargetRepo::new();
    repo.expect_get_by_id().returning(|_| Ok(Some(record(".hero"))));
    repo.expect_delete()
        .withf(|id| *id == TargetId::new(7))
        .times(1)
        .returning(|_| Ok(()));
    let mut cache = MockDerivedCache::new();
    cache.expect_flush_derived().times(1).return_const(());

    let uc = DeleteTarget::new(Arc::new(repo), Arc::new(cache));
    let done = uc.confirm(TargetId::new(7)).await.unwrap();

    assert_eq!(done.notice.message, "The ScrollReveal target .hero was deleted.");
    assert_eq!(done.redirect, Route::list());
}

#[tokio::test]
async fn delete_prepare_of_missing_target_is_not_found() {
    let mut repo = MockTargetRepo::new();
    repo.expect_get_by_id().returning(|_| Ok(None));
    repo.expect_delete().times(0);

    let uc = DeleteTarget::new(Arc::new(repo), Arc::new(MockDerivedCache::new()));
    assert!(matches!(
        uc.prepare(TargetId::new(1)).await,
        Err(TargetUseCaseError::NotFound(_))
    ));
}

#[tokio::test]
async fn duplicate_rejects_selector_of_256_chars() {
    let mut repo = MockTargetRepo::new();
    repo.expect_get_by_id().returning(|_| Ok(Some(record(".hero"))));
    repo.expect_exists().returning(|_| Ok(false));
    repo.expect_upsert().times(0);

    let uc = DuplicateTarget::new(
        Arc::new(repo),
        Arc::new(MockDerivedCache::new()),
        Arc::new(FixedClock),
    );
    let outcome = uc.submit(TargetId::new(1), &"a".repeat(256)).await.unwrap();

    assert!(matches!(outcome, SubmitOutcome::Invalid(ref e) if e.has("selector")));
}
