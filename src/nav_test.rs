use super::*;

// =============================================================
// Visibility table per role
// =============================================================

#[test]
fn admin_sees_every_entry() {
    assert_eq!(menu_for(Role::Admin), MenuEntry::ALL.to_vec());
}

#[test]
fn operator_sees_home_and_operations_entries() {
    assert_eq!(
        menu_for(Role::Operator),
        vec![
            MenuEntry::Home,
            MenuEntry::Clients,
            MenuEntry::Orders,
            MenuEntry::Vehicles,
            MenuEntry::Drivers,
            MenuEntry::Addresses,
        ]
    );
}

#[test]
fn unknown_role_sees_home_only() {
    assert_eq!(menu_for(Role::Unknown), vec![MenuEntry::Home]);
}

#[test]
fn admin_only_entries_are_hidden_from_operators() {
    for entry in [
        MenuEntry::Map,
        MenuEntry::Reports,
        MenuEntry::Roles,
        MenuEntry::Users,
        MenuEntry::Audit,
    ] {
        assert!(entry.visible_for(Role::Admin), "{entry:?}");
        assert!(!entry.visible_for(Role::Operator), "{entry:?}");
        assert!(!entry.visible_for(Role::Unknown), "{entry:?}");
    }
}

#[test]
fn home_is_visible_to_everyone() {
    for role in [Role::Admin, Role::Operator, Role::Unknown] {
        assert!(MenuEntry::Home.visible_for(role), "{role:?}");
    }
}

// =============================================================
// Entry metadata
// =============================================================

#[test]
fn every_entry_routes_under_the_dashboard() {
    for entry in MenuEntry::ALL {
        assert!(entry.path().starts_with("/dashboard/"), "{entry:?}");
        assert!(!entry.label().is_empty(), "{entry:?}");
    }
}
