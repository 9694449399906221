//! Integration tests for the podcast ranker against a mock feed host.
//!
//! Exercise the full fetch → extract → segment → score → sort → truncate
//! pipeline without touching the real feed.

use kuobo_search::{search_podcasts, PodcastConfig, PodcastRanker, SearchError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
<channel>
  <title>扩博智聊</title>
  <link>https://www.ximalaya.com/album/58531642</link>
  <description>扩博智聊</description>
  <item>
    <title>机器人的未来</title>
    <link>https://www.ximalaya.com/sound/1</link>
    <description><![CDATA[<p>今天聊聊机器人</p><p>说在最后</p><p>感谢收听</p>]]></description>
  </item>
  <item>
    <title>自动驾驶</title>
    <link>https://www.ximalaya.com/sound/2</link>
    <description><![CDATA[<p></p><p>自动驾驶</p><p>说在最后</p><p>欢迎订阅</p>]]></description>
  </item>
  <item>
    <title>大模型</title>
    <link>https://www.ximalaya.com/sound/3</link>
    <description><![CDATA[<p>大模型与自动驾驶</p>]]></description>
  </item>
  <item>
    <title>开场</title>
    <link>https://www.ximalaya.com/sound/4</link>
    <description><![CDATA[<p>第一期</p>]]></description>
  </item>
</channel>
</rss>"#;

fn config_for(server: &MockServer, cache_ttl_seconds: u64) -> PodcastConfig {
    PodcastConfig {
        feed_url: format!("{}/album/58531642.xml", server.uri()),
        cache_ttl_seconds,
        ..Default::default()
    }
}

async fn mount_feed(server: &MockServer, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/album/58531642.xml"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/rss+xml")
                .set_body_string(FEED),
        )
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn ranks_best_episode_first() {
    let server = MockServer::start().await;
    mount_feed(&server, 1).await;

    let ranker = PodcastRanker::new(config_for(&server, 0)).expect("ranker");
    let ranked = ranker.search("自动驾驶").await.expect("ranked");

    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0].title, "自动驾驶");
    assert_eq!(ranked[0].link, "https://www.ximalaya.com/sound/2");
    assert_eq!(ranked[0].text, "自动驾驶");
    assert_eq!(ranked[0].score, 10_000);
    assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
}

#[tokio::test]
async fn closing_remarks_are_removed() {
    let server = MockServer::start().await;
    mount_feed(&server, 1).await;

    let ranker = PodcastRanker::new(config_for(&server, 0)).expect("ranker");
    let ranked = ranker.search("机器人的未来").await.expect("ranked");

    let robots = ranked
        .iter()
        .find(|e| e.title == "机器人的未来")
        .expect("robot episode ranked");
    assert_eq!(robots.text, "今天聊聊机器人");
}

#[tokio::test]
async fn disabled_cache_refetches_every_call() {
    let server = MockServer::start().await;
    mount_feed(&server, 2).await;

    let ranker = PodcastRanker::new(config_for(&server, 0)).expect("ranker");
    ranker.search("自动驾驶").await.expect("first");
    ranker.search("机器人").await.expect("second");
}

#[tokio::test]
async fn cache_reuses_feed_until_invalidated() {
    let server = MockServer::start().await;
    mount_feed(&server, 2).await;

    let ranker = PodcastRanker::new(config_for(&server, 600)).expect("ranker");
    ranker.search("自动驾驶").await.expect("first");
    ranker.search("机器人").await.expect("cached");

    ranker.cache().invalidate(&ranker.config().feed_url).await;
    ranker.search("大模型").await.expect("refetched");
}

#[tokio::test]
async fn feed_http_error_is_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let ranker = PodcastRanker::new(config_for(&server, 0)).expect("ranker");
    let result = ranker.search("自动驾驶").await;
    assert!(matches!(result, Err(SearchError::Http(_))));
}

#[tokio::test]
async fn malformed_feed_is_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not a feed"))
        .mount(&server)
        .await;

    let ranker = PodcastRanker::new(config_for(&server, 0)).expect("ranker");
    let result = ranker.search("自动驾驶").await;
    assert!(matches!(result, Err(SearchError::Feed(_))));
}

#[tokio::test]
async fn failed_fetch_is_not_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_feed(&server, 1).await;

    let ranker = PodcastRanker::new(config_for(&server, 600)).expect("ranker");
    assert!(ranker.search("自动驾驶").await.is_err());
    let ranked = ranker.search("自动驾驶").await.expect("second attempt");
    assert_eq!(ranked[0].title, "自动驾驶");
}

#[tokio::test]
async fn search_podcasts_helper_ranks_feed() {
    let server = MockServer::start().await;
    mount_feed(&server, 1).await;

    let config = PodcastConfig {
        max_results: 2,
        ..config_for(&server, 300)
    };
    let ranked = search_podcasts("自动驾驶", &config).await.expect("ranked");
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].title, "自动驾驶");
    assert_eq!(ranked[0].score, 10_000);
}
