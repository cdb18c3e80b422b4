//! Integration tests for externally serialized access.
//!
//! Neither component locks internally; these tests drive them from several
//! threads through the lock wrappers and check that nothing is lost.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use pagetree::{OrderedIndex, PageCache, PageId};

/// Writers insert disjoint key ranges while readers search.
#[test]
fn test_shared_index_concurrent_writers() {
    let index = OrderedIndex::<u32, u32>::new().into_shared();
    let mut handles = vec![];

    for t in 0..4u32 {
        let index = Arc::clone(&index);
        handles.push(thread::spawn(move || {
            for k in (t * 250)..((t + 1) * 250) {
                index.write().insert(k, k * 2);
            }
        }));
    }

    for _ in 0..4 {
        let index = Arc::clone(&index);
        handles.push(thread::spawn(move || {
            for k in 0..1000 {
                if let Some(v) = index.read().search(&k) {
                    assert_eq!(*v, k * 2);
                }
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    let index = index.read();
    assert_eq!(index.len(), 1000);
    assert!(index.keys().copied().eq(0..1000));
}

/// Every dirty page evicted under contention reaches the hook exactly once.
#[test]
fn test_shared_cache_concurrent_puts() {
    let flushes = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&flushes);
    let cache = PageCache::with_flush_hook(8, move |_, _: &[u8]| {
        counter.fetch_add(1, Ordering::Relaxed);
    })
    .unwrap()
    .into_shared();

    let mut handles = vec![];
    for t in 0..4u32 {
        let cache = Arc::clone(&cache);
        handles.push(thread::spawn(move || {
            for i in 0..100u32 {
                let page_id = PageId::new(t * 1000 + i);
                let mut cache = cache.lock();
                cache.put(page_id, vec![0u8; 32]);
                cache.put(page_id, vec![1u8; 32]);
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    let mut cache = cache.lock();
    assert_eq!(cache.len(), 8);
    assert_eq!(cache.stats().evictions, 400 - 8);

    cache.flush_all();
    assert_eq!(flushes.load(Ordering::Relaxed), 400);
}
