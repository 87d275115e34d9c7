use super::*;

#[test]
fn defaults_start_at_zero() {
    let versions = QueryVersions::default();
    assert_eq!(versions.shipments, 0);
    assert_eq!(versions.dashboard, 0);
}

#[test]
fn bumps_touch_only_their_own_counter() {
    let mut versions = QueryVersions::default();
    versions.bump_shipments();
    versions.bump_shipments();
    versions.bump_dashboard();
    assert_eq!(versions.shipments, 2);
    assert_eq!(versions.dashboard, 1);
    assert_eq!(versions.agency_series, 0);
    assert_eq!(versions.shipment_detail, 0);
}

#[test]
fn bumped_versions_compare_unequal() {
    let before = QueryVersions::default();
    let mut after = before;
    after.bump_agency_assets();
    assert_ne!(before, after);
}
