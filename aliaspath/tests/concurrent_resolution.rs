//! Concurrent resolution tests.
//!
//! Each `resolve` call tracks the aliases it is expanding on its own, so many
//! threads can share one resolver. These tests check that failures in some
//! threads never turn into spurious cycle errors in others.

mod common;

use std::sync::{Arc, RwLock};
use std::thread;

use aliaspath::PathResolver;
use common::default_resolver;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_resolver_is_send_and_sync() {
    assert_send_sync::<PathResolver>();
}

#[test]
fn test_shared_resolver_across_threads() {
    let mut resolver = default_resolver();
    resolver.define("a", "%b%/x").unwrap();
    resolver.define("b", "%a%/y").unwrap();
    let resolver = &resolver;

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                scope.spawn(move || {
                    for _ in 0..200 {
                        if i % 2 == 0 {
                            assert!(resolver.resolve("a").is_err());
                        } else {
                            assert_eq!(
                                resolver.resolve("files").unwrap(),
                                "/srv/app/public/files"
                            );
                        }
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    });
}

#[test]
fn test_resolve_all_consistent_across_threads() {
    let resolver = Arc::new(default_resolver());
    let expected = resolver.resolve_all().unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let resolver = Arc::clone(&resolver);
            thread::spawn(move || resolver.resolve_all().unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_define_serialized_behind_lock() {
    let resolver = Arc::new(RwLock::new(default_resolver()));

    let writers: Vec<_> = (0..4)
        .map(|i| {
            let resolver = Arc::clone(&resolver);
            thread::spawn(move || {
                let name = format!("upload{i}");
                let raw = format!("%files%/{i}");
                resolver.write().unwrap().define(&name, &raw).unwrap();
            })
        })
        .collect();
    for writer in writers {
        writer.join().unwrap();
    }

    let resolver = resolver.read().unwrap();
    for i in 0..4 {
        assert_eq!(
            resolver.resolve(&format!("upload{i}")).unwrap(),
            format!("/srv/app/public/files/{i}")
        );
    }
}
