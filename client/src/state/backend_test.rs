use super::*;

#[test]
fn backend_state_default_is_loading() {
    assert_eq!(BackendState::default(), BackendState::Loading);
    assert!(BackendState::default().config().is_none());
}

#[test]
fn ready_exposes_config() {
    let config = BackendConfig::new("https://project.example.co", "anon").expect("config");
    let state = BackendState::Ready(config.clone());
    assert_eq!(state.config(), Some(&config));
}

#[test]
fn unavailable_has_no_config() {
    let state = BackendState::Unavailable("offline".to_owned());
    assert!(state.config().is_none());
}
