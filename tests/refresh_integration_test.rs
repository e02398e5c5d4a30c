use httpmock::prelude::*;
use magnet_trackers::core::trackers::{ANIME_TRACKERS, DEFAULT_TRACKERS, RUSSIAN_TRACKERS};
use magnet_trackers::{HttpTrackerSource, StaticProviderRegistry, TrackerContext, TrackerError};

const BEST_LIST: &str = "udp://tracker.opentrackr.org:1337/announce\n\n\
udp://open.demonii.com:1337/announce\n\n\
udp://best-only.example.net:6969/announce\n\n";

#[tokio::test]
async fn test_refresh_publishes_merged_lists() {
    let server = MockServer::start();
    let list_mock = server.mock(|when, then| {
        when.method(GET).path("/trackers_best.txt");
        then.status(200)
            .header("Content-Type", "text/plain")
            .body(BEST_LIST);
    });

    let context = TrackerContext::new(&StaticProviderRegistry::builtin());
    let refresher = context.refresher(HttpTrackerSource::new(server.url("/trackers_best.txt")));

    let best = refresher.refresh().await.unwrap();

    list_mock.assert();
    assert_eq!(
        best,
        vec![
            "udp://tracker.opentrackr.org:1337/announce",
            "udp://open.demonii.com:1337/announce",
            "udp://best-only.example.net:6969/announce",
        ]
    );

    let snapshot = context.store().snapshot();
    assert_eq!(snapshot.version, 1);
    assert_eq!(&snapshot.all_anime[..3], best.as_slice());
    assert_eq!(&snapshot.all_russian[..3], best.as_slice());

    // Best entries already in the default list are not repeated.
    let expected_anime = 3 + DEFAULT_TRACKERS.len() - 2 + ANIME_TRACKERS.len();
    let expected_russian = 3 + DEFAULT_TRACKERS.len() - 2 + RUSSIAN_TRACKERS.len();
    assert_eq!(snapshot.all_anime.len(), expected_anime);
    assert_eq!(snapshot.all_russian.len(), expected_russian);
}

#[tokio::test]
async fn test_refresh_fails_after_three_attempts() {
    let server = MockServer::start();
    let list_mock = server.mock(|when, then| {
        when.method(GET).path("/trackers_best.txt");
        then.status(503);
    });

    let context = TrackerContext::new(&StaticProviderRegistry::builtin());
    let refresher = context.refresher(HttpTrackerSource::new(server.url("/trackers_best.txt")));

    let err = refresher.refresh().await.unwrap_err();

    list_mock.assert_hits(3);
    match err {
        TrackerError::NetworkError { attempts, source } => {
            assert_eq!(attempts, 3);
            assert!(matches!(*source, TrackerError::HttpStatusError { status: 503 }));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(context.store().version(), 0);
    assert!(context.store().snapshot().all_anime.is_empty());
}

#[tokio::test]
async fn test_failed_refresh_leaves_previous_lists() {
    let server = MockServer::start();
    let mut good_mock = server.mock(|when, then| {
        when.method(GET).path("/trackers_best.txt");
        then.status(200).body(BEST_LIST);
    });

    let context = TrackerContext::new(&StaticProviderRegistry::builtin());
    let refresher = context.refresher(HttpTrackerSource::new(server.url("/trackers_best.txt")));
    refresher.refresh().await.unwrap();
    let before = context.store().snapshot();

    good_mock.delete();
    let failing_mock = server.mock(|when, then| {
        when.method(GET).path("/trackers_best.txt");
        then.status(500);
    });

    assert!(refresher.refresh().await.is_err());

    failing_mock.assert_hits(3);
    assert_eq!(context.store().snapshot(), before);
}

#[tokio::test]
async fn test_empty_list_is_not_an_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/trackers_best.txt");
        then.status(200).body("");
    });

    let context = TrackerContext::new(&StaticProviderRegistry::builtin());
    let refresher = context.refresher(HttpTrackerSource::new(server.url("/trackers_best.txt")));

    let best = refresher.refresh().await.unwrap();

    assert!(best.is_empty());
    let snapshot = context.store().snapshot();
    assert_eq!(snapshot.all_anime[0], DEFAULT_TRACKERS[0]);
    assert_eq!(
        snapshot.all_russian.last().map(String::as_str),
        RUSSIAN_TRACKERS.last().copied()
    );
}

#[test]
fn test_refresh_from_blocking_caller() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/trackers_best.txt");
        then.status(200).body(BEST_LIST);
    });

    let context = TrackerContext::new(&StaticProviderRegistry::builtin());
    let refresher = context.refresher(HttpTrackerSource::new(server.url("/trackers_best.txt")));

    let best = tokio_test::block_on(refresher.refresh()).unwrap();

    assert_eq!(best.len(), 3);
    assert_eq!(context.store().version(), 1);
}
