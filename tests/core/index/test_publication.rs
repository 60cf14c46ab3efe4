//! Publication of the index while readers are already querying

use crate::common::{create_test_services, missing_corpus_services, TestCorpus, HAMLET};
use autocomplete::core::index::{FrequencyIndex, IndexHandle, IndexStatus};
use autocomplete::core::search::AutocompleteService;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

#[test]
fn test_concurrent_readers_see_empty_or_final_result() {
    let handle = Arc::new(IndexHandle::new());
    let service = Arc::new(AutocompleteService::new(Arc::clone(&handle), 25));
    let expected = {
        let reference = Arc::new(IndexHandle::new());
        reference.publish(FrequencyIndex::from_text(HAMLET)).unwrap();
        AutocompleteService::new(reference, 25).complete("t", Some("10"))
    };
    let done = Arc::new(AtomicBool::new(false));

    let readers: Vec<_> = (0..8)
        .map(|_| {
            let service = Arc::clone(&service);
            let expected = expected.clone();
            let done = Arc::clone(&done);
            thread::spawn(move || {
                let mut saw_final = false;
                loop {
                    let finished = done.load(Ordering::Acquire);
                    let result = service.complete("t", Some("10"));
                    if result.is_empty() {
                        assert!(!saw_final, "result went back to empty after publish");
                    } else {
                        assert_eq!(result, expected);
                        saw_final = true;
                    }
                    if finished {
                        break saw_final;
                    }
                }
            })
        })
        .collect();

    let writer = {
        let handle = Arc::clone(&handle);
        thread::spawn(move || {
            let index = FrequencyIndex::from_text(&HAMLET.repeat(200));
            // Publishing a heavier corpus changes counts, not ranking for "t"
            handle.publish(index).unwrap();
        })
    };
    writer.join().unwrap();
    done.store(true, Ordering::Release);

    for reader in readers {
        assert!(reader.join().unwrap(), "reader never saw the published index");
    }
    assert_eq!(handle.status(), IndexStatus::Ready);
}

#[tokio::test]
async fn test_background_build_publishes() {
    let corpus = TestCorpus::new(HAMLET);
    let services = create_test_services(corpus.path());

    assert_eq!(services.index.status(), IndexStatus::Building);
    services.spawn_index_build().await.unwrap();

    assert_eq!(services.index.status(), IndexStatus::Ready);
    assert_eq!(
        services.autocomplete.complete("", Some("3")),
        vec!["to", "the", "a"]
    );
}

#[tokio::test]
async fn test_failed_build_stays_unpublished() {
    let services = missing_corpus_services();
    services.spawn_index_build().await.unwrap();

    assert_eq!(services.index.status(), IndexStatus::Failed);
    assert!(services.index.failure().is_some());
    assert!(services.autocomplete.complete("", None).is_empty());

    // Later attempts cannot sneak an index in
    assert!(services
        .index
        .publish(FrequencyIndex::from_text("late arrival"))
        .is_err());
    assert!(services.autocomplete.complete("", None).is_empty());
}
