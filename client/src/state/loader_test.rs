use super::*;
use crate::net::types::User;

fn users(n: usize) -> Vec<User> {
    (0..n).map(|i| User { username: format!("admin{i}"), ..User::default() }).collect()
}

#[test]
fn new_loader_is_loading() {
    let loader = PageLoader::<Vec<User>>::new();
    assert_eq!(loader.state(), &LoadState::Loading);
}

#[test]
fn success_with_rows_is_loaded() {
    let mut loader = PageLoader::new();
    let g = loader.start();
    assert_eq!(loader.settle(g, ApiOutcome::Success(Some(users(2)))), Settled::Applied);
    assert_eq!(loader.state(), &LoadState::Loaded(users(2)));
}

#[test]
fn null_data_is_empty_not_error() {
    let mut loader = PageLoader::<Vec<User>>::new();
    let g = loader.start();
    loader.settle(g, ApiOutcome::Success(None));
    assert_eq!(loader.state(), &LoadState::Empty);
}

#[test]
fn empty_list_is_empty_not_error() {
    let mut loader = PageLoader::<Vec<User>>::new();
    let g = loader.start();
    loader.settle(g, ApiOutcome::Success(Some(Vec::new())));
    assert_eq!(loader.state(), &LoadState::Empty);
}

#[test]
fn event_payload_is_never_empty() {
    let mut loader = PageLoader::<Event>::new();
    let g = loader.start();
    loader.settle(g, ApiOutcome::Success(Some(Event::default())));
    assert!(matches!(loader.state(), LoadState::Loaded(_)));
}

#[test]
fn unauthorized_fires_once_and_sets_error() {
    let mut loader = PageLoader::<Vec<User>>::new();
    let g = loader.start();
    assert_eq!(loader.settle(g, ApiOutcome::Unauthorized), Settled::Unauthorized);
    assert_eq!(loader.state(), &LoadState::Failed("Please login to continue.".to_owned()));
    assert_eq!(loader.settle(g, ApiOutcome::Unauthorized), Settled::Stale);
}

#[test]
fn network_failure_shows_error_and_retry_reissues() {
    let mut loader = PageLoader::<Vec<User>>::new();
    let first = loader.start();
    loader.settle(first, ApiOutcome::NetworkFailure("request failed: offline".to_owned()));
    assert_eq!(loader.state(), &LoadState::Failed("request failed: offline".to_owned()));

    let retry = loader.start();
    assert_ne!(retry, first);
    assert_eq!(loader.state(), &LoadState::Loading);
    loader.settle(retry, ApiOutcome::Success(Some(users(1))));
    assert_eq!(loader.state(), &LoadState::Loaded(users(1)));
}

#[test]
fn superseded_settlement_is_ignored() {
    let mut loader = PageLoader::<Vec<User>>::new();
    let old = loader.start();
    let new = loader.start();
    loader.settle(new, ApiOutcome::Success(Some(users(3))));
    assert_eq!(loader.settle(old, ApiOutcome::ServerFault("late".to_owned())), Settled::Stale);
    assert_eq!(loader.state(), &LoadState::Loaded(users(3)));
}

#[test]
fn stale_401_does_not_signal() {
    let mut loader = PageLoader::<Vec<User>>::new();
    let old = loader.start();
    loader.start();
    assert_eq!(loader.settle(old, ApiOutcome::Unauthorized), Settled::Stale);
    assert_eq!(loader.state(), &LoadState::Loading);
}
