use ledgerbase_types::prelude::*;
use std::collections::BTreeSet;

#[test]
fn tiers_are_totally_ordered() {
    assert!(KycTier::Tier0 < KycTier::Tier1);
    assert!(KycTier::Tier1 < KycTier::Tier2);
    assert!(KycTier::Tier2 < KycTier::Tier3);
    assert_eq!(KycTier::Tier3.next(), None);
    assert_eq!(KycTier::Tier0.next(), Some(KycTier::Tier1));
}

#[test]
fn tier_wire_form_round_trips() {
    let json = serde_json::to_string(&KycTier::Tier2).expect("serialize");
    assert_eq!(json, "\"tier_2\"");
    let back: KycTier = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, KycTier::Tier2);
}

#[test]
fn unknown_role_fails_closed() {
    assert!(serde_json::from_str::<Role>("\"superuser\"").is_err());
    let admin: Role = serde_json::from_str("\"admin\"").expect("admin role");
    assert_eq!(admin, Role::Admin);
}

#[test]
fn principal_round_trips() {
    let principal = AuthenticatedPrincipal {
        id: PrincipalId("user_1".into()),
        email: "user@example.com".into(),
        role: Role::User,
        permissions: BTreeSet::from(["transfers:write".to_string()]),
        session_id: SessionId("sess_1".into()),
        issued_at: Timestamp(1_726_000_000_000),
        expires_at: Timestamp(1_726_000_900_000),
    };

    let json = serde_json::to_value(&principal).expect("serialize");
    let back: AuthenticatedPrincipal = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, principal);
    assert!(!back.is_admin());
}

#[test]
fn display_names_are_stable() {
    assert_eq!(KycTier::Tier0.display_name(), "Unverified");
    assert_eq!(KycTier::Tier1.display_name(), "Basic Verification");
    assert_eq!(KycTier::Tier2.display_name(), "Full Verification");
    assert_eq!(KycTier::Tier3.display_name(), "Enhanced Verification");
}

#[test]
fn usd_cents_from_dollars() {
    assert_eq!(UsdCents::from_dollars(500), UsdCents(50_000));
    assert!(UsdCents(50_000) <= UsdCents::from_dollars(1_000));
}
