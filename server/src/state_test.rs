use super::*;

#[test]
fn new_state_shares_catalog_between_clones() {
    let state = test_helpers::test_app_state();
    let clone = state.clone();
    assert!(Arc::ptr_eq(&state.catalog, &clone.catalog));
    assert!(Arc::ptr_eq(&state.config, &clone.config));
}

#[test]
fn test_state_defaults_to_production() {
    let state = test_helpers::test_app_state();
    assert!(!state.config.environment.exposes_error_detail());
    assert!(test_helpers::test_app_state_dev().config.environment.exposes_error_detail());
}
