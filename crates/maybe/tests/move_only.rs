// Each test defines its own payload type so construction counters never race
// across the test harness threads.

use std::sync::atomic::{AtomicUsize, Ordering};

use maybe::{present, Maybe};

#[test]
fn test_flat_map_with_move_only_payload() {
    static NEW_COUNT: AtomicUsize = AtomicUsize::new(0);

    struct NoCopy {
        has_brains: bool,
    }

    impl NoCopy {
        fn new() -> Self {
            NEW_COUNT.fetch_add(1, Ordering::SeqCst);
            NoCopy { has_brains: true }
        }

        fn quip(&self) {}
    }

    struct Needy {
        inner: NoCopy,
    }

    impl Needy {
        fn new(nc: NoCopy) -> Self {
            assert!(nc.has_brains, "moved from an invalid object");
            Needy { inner: nc }
        }
    }

    println!("=== Testing move-only payloads ===");
    let nc = present(NoCopy::new());
    let minus_one = nc.flat_map(|_nc: NoCopy| present(-1));
    assert_eq!(*minus_one.get(), -1);
    assert_eq!(NEW_COUNT.load(Ordering::SeqCst), 1);

    let nc2 = present(NoCopy::new());
    nc2.get().quip();
    assert_eq!(NEW_COUNT.load(Ordering::SeqCst), 2);

    let nc3 = present(NoCopy::new());
    let maybe_needy = nc3.flat_map(|ncc| present(Needy::new(ncc)));
    assert!(maybe_needy.is_present());
    assert!(maybe_needy.get().inner.has_brains);
    assert_eq!(NEW_COUNT.load(Ordering::SeqCst), 3);
}

#[test]
fn test_map_into_and_get_or_else_move_payload() {
    static NEW_COUNT: AtomicUsize = AtomicUsize::new(0);

    struct Token(u32);

    impl Token {
        fn new(id: u32) -> Self {
            NEW_COUNT.fetch_add(1, Ordering::SeqCst);
            Token(id)
        }
    }

    let wrapped = present(Token::new(1)).map_into(|t| (t, "tagged"));
    assert_eq!(wrapped.get().0.0, 1);
    assert_eq!(NEW_COUNT.load(Ordering::SeqCst), 1);

    let held = present(Token::new(2));
    let fallback = Token::new(3);
    let out = held.get_or_else(fallback);
    assert_eq!(out.0, 2);
    assert_eq!(NEW_COUNT.load(Ordering::SeqCst), 3);

    let empty: Maybe<Token> = Maybe::nothing();
    let out = empty.get_or_else_with(|| Token::new(4));
    assert_eq!(out.0, 4);
    assert_eq!(NEW_COUNT.load(Ordering::SeqCst), 4);
}

#[test]
fn test_drop_releases_payload_once() {
    static DROPS: AtomicUsize = AtomicUsize::new(0);

    struct Tracked;

    impl Drop for Tracked {
        fn drop(&mut self) {
            DROPS.fetch_add(1, Ordering::SeqCst);
        }
    }

    {
        let held = present(Tracked);
        let moved = held;
        assert!(moved.is_present());
    }
    assert_eq!(DROPS.load(Ordering::SeqCst), 1);

    {
        let empty: Maybe<Tracked> = Maybe::nothing();
        assert!(empty.is_absent());
    }
    assert_eq!(DROPS.load(Ordering::SeqCst), 1);

    let consumed = present(Tracked).flat_map(|t| {
        drop(t);
        present(())
    });
    assert!(consumed.is_present());
    assert_eq!(DROPS.load(Ordering::SeqCst), 2);
}

#[test]
fn test_borrowing_map_and_flat_map_ref_on_move_only_payload() {
    static NEW_COUNT: AtomicUsize = AtomicUsize::new(0);

    struct NoCopy {
        id: u32,
    }

    impl NoCopy {
        fn new(id: u32) -> Self {
            NEW_COUNT.fetch_add(1, Ordering::SeqCst);
            NoCopy { id }
        }
    }

    let held = present(NoCopy::new(7));

    let id = held.map(|nc| nc.id);
    assert_eq!(id, present(7));
    assert_eq!(NEW_COUNT.load(Ordering::SeqCst), 1);

    let doubled = held.flat_map_ref(|nc| present(nc.id * 2));
    assert_eq!(doubled, present(14));
    assert_eq!(NEW_COUNT.load(Ordering::SeqCst), 1);

    // the source still owns its payload after both borrows
    assert!(held.is_present());
    assert_eq!(held.get().id, 7);

    let empty: Maybe<NoCopy> = Maybe::nothing();
    assert!(empty.map(|nc| nc.id).is_absent());
    assert!(empty.flat_map_ref(|nc| present(nc.id)).is_absent());
    assert_eq!(NEW_COUNT.load(Ordering::SeqCst), 1);
}
