use std::env;
use trendwatch::http::default_user_agent;
use trendwatch::reddit::auth::Credentials;
use trendwatch::reddit::client::Posts;
use trendwatch::reddit::service::{PageRequest, RedditService, Service, SortMode};

// These tests talk to the live Reddit API, so they need real credentials in
// TRENDWATCH_CLIENT_ID and TRENDWATCH_CLIENT_SECRET. TRENDWATCH_USER_AGENT
// is optional. Run them with `cargo test -- --ignored`.

fn credentials() -> Credentials {
    let var = |name: &str| env::var(name).unwrap_or_else(|_| panic!("{name} must be set"));
    Credentials::new(
        var("TRENDWATCH_CLIENT_ID"),
        var("TRENDWATCH_CLIENT_SECRET"),
        env::var("TRENDWATCH_USER_AGENT").unwrap_or_else(|_| default_user_agent()),
    )
}

#[tokio::test]
#[ignore]
async fn it_retrieves_a_listing() {
    let service = RedditService::connect(&credentials()).await.unwrap();
    let page = PageRequest {
        forum: "Peptides",
        sort: SortMode::New,
        limit: 5,
        after: None,
    };
    let resp = service.get_listing(page).await.unwrap();
    assert_ne!(resp, "");
}

#[tokio::test]
#[ignore]
async fn it_retrieves_anonymized_posts() {
    let service = RedditService::connect(&credentials()).await.unwrap();
    let posts = Posts::new(&service, "Peptides", SortMode::Hot, 3)
        .collect()
        .await
        .unwrap();
    assert!(posts.len() <= 3);
    for post in posts {
        let json = serde_json::to_string(&post).unwrap();
        assert!(!json.contains("author"), "{json}");
    }
}

#[tokio::test]
#[ignore]
async fn it_rejects_bad_credentials() {
    let credentials = Credentials::new("not-a-client", "not-a-secret", default_user_agent());
    assert!(RedditService::connect(&credentials).await.is_err());
}
