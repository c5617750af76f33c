use tsp_domain::constants::{ACCESS, APPEARANCE, CATALOG, MOCK_USER, SETTINGS, SHARES, STEP_TITLES};

#[test]
fn constants_match_entity_strings() {
    assert_eq!(SETTINGS, "settings");
    assert_eq!(ACCESS, "access");
    assert_eq!(CATALOG, "catalog");
    assert_eq!(SHARES, "shares");
    assert_eq!(MOCK_USER, "mock_user");
    assert_eq!(APPEARANCE, "appearance");
}

#[test]
fn step_titles_cover_every_step() {
    assert_eq!(STEP_TITLES.len(), tsp_domain::registration::STEP_COUNT);
}
