#![cfg(feature = "snapshot")]

use pizzeria::render::{text_snapshot, HtmlRenderer, Renderer, SnapshotLine};
use pizzeria::{Action, Storefront};

fn snapshot(store: &Storefront) -> pizzeria::render::TextSnapshot {
    let page = HtmlRenderer::new().render(store).expect("render");
    text_snapshot(&page.content).expect("snapshot")
}

#[test]
fn badge_follows_total_count() {
    let mut store = Storefront::with_defaults();
    assert_eq!(snapshot(&store).badge, None);

    store.dispatch(Action::AddItem { name: "Wagyu Wonder".into() }).unwrap();
    store.dispatch(Action::ChangeQuantity { name: "Wagyu Wonder".into(), delta: 4 }).unwrap();
    assert_eq!(snapshot(&store).badge, Some(5));

    store.dispatch(Action::ChangeQuantity { name: "Wagyu Wonder".into(), delta: -5 }).unwrap();
    let snap = snapshot(&store);
    assert_eq!(snap.badge, None);
    assert!(snap.cart_open);
    assert!(snap.cart_lines.is_empty());
    assert!(snap.text.contains("Your cart is empty"));
    assert_eq!(snap.total, None);
}

#[test]
fn overlay_closes_and_reopens_on_add() {
    let mut store = Storefront::with_defaults();
    store.dispatch(Action::AddFeatured).unwrap();
    store.dispatch(Action::CloseCart).unwrap();
    assert!(!snapshot(&store).cart_open);

    store.dispatch(Action::AddFeatured).unwrap();
    let snap = snapshot(&store);
    assert!(snap.cart_open);
    assert_eq!(
        snap.cart_lines,
        vec![SnapshotLine { name: "Margherita Supreme".into(), quantity: 2 }]
    );
    assert_eq!(snap.total.as_deref(), Some("29.98"));
}

#[test]
fn checkout_notice_is_visible() {
    let mut store = Storefront::with_defaults();
    store.dispatch(Action::AddFeatured).unwrap();
    store.dispatch(Action::Checkout).unwrap();
    let snap = snapshot(&store);
    assert_eq!(snap.notice.as_deref(), Some("Checkout functionality coming soon!"));

    store.dispatch(Action::DismissNotice).unwrap();
    assert_eq!(snapshot(&store).notice, None);
}

#[test]
fn every_menu_item_is_listed() {
    let store = Storefront::with_defaults();
    let snap = snapshot(&store);
    for item in store.catalog().menu_items() {
        assert!(snap.text.contains(&item.name), "missing {}", item.name);
    }
    for category in store.catalog().menu() {
        assert!(snap.text.contains(&category.category));
    }
}
