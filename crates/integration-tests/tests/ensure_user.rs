//! Signup-time seeding of store entries and its idempotence.

use greengrocer_integration_tests::{TestStores, user};

#[test]
fn test_ensure_creates_exactly_one_entry() {
    let stores = TestStores::new();
    let alice = user("alice");

    stores.cart.ensure_user(&alice).unwrap();
    stores.cart.ensure_user(&alice).unwrap();

    let document = stores.cart.load_or_init(&alice).unwrap();
    assert_eq!(document.len(), 1);
    assert!(document.get(&alice).unwrap().is_empty());
}

#[test]
fn test_ensure_adds_to_existing_file() {
    let stores = TestStores::new();
    let alice = user("alice");
    let bob = user("bob");

    stores.cart.ensure_user(&alice).unwrap();
    stores.cart.ensure_user(&bob).unwrap();

    let document = stores.cart.load_or_init(&alice).unwrap();
    assert_eq!(document.len(), 2);
    assert!(document.contains_key(&bob));
}

#[test]
fn test_ensure_does_not_clobber_contents() {
    let stores = TestStores::new();
    let alice = user("alice");

    stores
        .cart
        .add_item(&stores.catalog, &alice, &greengrocer_core::ProductId::new("1"))
        .unwrap();
    stores.cart.ensure_user(&alice).unwrap();

    let cart = stores.cart.view(&alice).unwrap().unwrap();
    assert_eq!(cart.quantity(&greengrocer_core::ProductId::new("1")), Some(1));
}

/// The second ensure for an existing user performs no write at all: with the
/// store directory made read-only, it still succeeds while a genuine write
/// visibly fails.
#[cfg(unix)]
#[test]
fn test_repeated_ensure_performs_no_write() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let stores = TestStores::new();
    let alice = user("alice");
    stores.cart.ensure_user(&alice).unwrap();

    let mut read_only = fs::metadata(stores.dir()).unwrap().permissions();
    read_only.set_mode(0o555);
    fs::set_permissions(stores.dir(), read_only).unwrap();

    let result = stores.cart.ensure_user(&alice);

    // Writes really are impossible right now.
    let write_attempt = stores.cart.add_item(
        &stores.catalog,
        &alice,
        &greengrocer_core::ProductId::new("1"),
    );

    // Restore permissions before asserting so the directory can be cleaned
    // up even on failure.
    let mut writable = fs::metadata(stores.dir()).unwrap().permissions();
    writable.set_mode(0o755);
    fs::set_permissions(stores.dir(), writable).unwrap();

    result.unwrap();
    assert!(write_attempt.is_err());
}
