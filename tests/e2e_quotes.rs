//! E2E tests for quote CRUD, daily quote, random quote and authors

mod common;

use common::TestServer;
use dailyquote::data::QuoteStore;
use serde_json::Value;

#[tokio::test]
async fn test_list_seeded_quotes() {
    let server = TestServer::new().await;

    let response = server
        .client
        .get(server.url("/api/v1/quotes"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let quotes: Vec<Value> = response.json().await.unwrap();
    assert_eq!(quotes.len(), 10);

    let daily: Vec<&Value> = quotes
        .iter()
        .filter(|q| q["isDailyQuote"] == true)
        .collect();
    assert_eq!(daily.len(), 1);

    for quote in &quotes {
        assert!(quote["id"].is_i64());
        assert!(quote["text"].is_string());
        assert!(quote["author"].is_string());
        assert!(quote["createdAt"].is_string());
        assert!(quote.get("updatedAt").is_none());
    }
}

#[tokio::test]
async fn test_create_and_get_quote() {
    let server = TestServer::empty().await;

    let created = server
        .create_quote("This is long enough text.", "Tester")
        .await;
    assert_eq!(created["text"], "This is long enough text.");
    assert_eq!(created["author"], "Tester");
    assert_eq!(created["isDailyQuote"], false);

    let id = created["id"].as_i64().unwrap();
    let response = server
        .client
        .get(server.url(&format!("/api/v1/quotes/{}", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let fetched: Value = response.json().await.unwrap();
    for field in ["id", "text", "author", "isDailyQuote"] {
        assert_eq!(fetched[field], created[field], "{}", field);
    }

    let stored = server.state.db.get(id).await.unwrap();
    assert_eq!(stored.created_at, stored.updated_at);
}

#[tokio::test]
async fn test_create_rejects_invalid_input() {
    let server = TestServer::empty().await;

    for body in [
        serde_json::json!({ "text": "Short", "author": "A" }),
        serde_json::json!({ "text": "This is long enough text.", "author": "" }),
        serde_json::json!({ "text": "x".repeat(501), "author": "A" }),
        serde_json::json!({ "text": "This is long enough text.", "author": "y".repeat(101) }),
    ] {
        let response = server
            .client
            .post(server.url("/api/v1/quotes"))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400);

        let json: Value = response.json().await.unwrap();
        assert!(json["error"].is_string());
    }

    // Nothing was persisted
    assert_eq!(server.state.db.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_get_missing_quote() {
    let server = TestServer::new().await;

    let response = server
        .client
        .get(server.url("/api/v1/quotes/999"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    let json: Value = response.json().await.unwrap();
    assert_eq!(json["error"], "Quote not found with id: 999");
}

#[tokio::test]
async fn test_update_quote_keeps_identity_and_daily_flag() {
    let server = TestServer::new().await;
    let daily = server.state.db.get_daily().await.unwrap();

    let response = server
        .client
        .put(server.url(&format!("/api/v1/quotes/{}", daily.id)))
        .json(&serde_json::json!({
            "text": "A completely rewritten quote.",
            "author": "Editor"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["id"], daily.id);
    assert_eq!(updated["text"], "A completely rewritten quote.");
    assert_eq!(updated["author"], "Editor");
    assert_eq!(updated["isDailyQuote"], true);

    let stored = server.state.db.get(daily.id).await.unwrap();
    assert_eq!(stored.created_at, daily.created_at);
    assert!(stored.updated_at >= daily.updated_at);
}

#[tokio::test]
async fn test_update_missing_and_invalid() {
    let server = TestServer::new().await;

    let missing = server
        .client
        .put(server.url("/api/v1/quotes/999"))
        .json(&serde_json::json!({ "text": "This is long enough text.", "author": "A" }))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), 404);

    let invalid = server
        .client
        .put(server.url("/api/v1/quotes/1"))
        .json(&serde_json::json!({ "text": "Short", "author": "A" }))
        .send()
        .await
        .unwrap();
    assert_eq!(invalid.status(), 400);
}

#[tokio::test]
async fn test_delete_quote() {
    let server = TestServer::empty().await;
    let created = server
        .create_quote("A quote that will be deleted.", "Ephemeral")
        .await;
    let url = server.url(&format!("/api/v1/quotes/{}", created["id"]));

    let response = server.client.delete(&url).send().await.unwrap();
    assert_eq!(response.status(), 204);

    let response = server.client.get(&url).send().await.unwrap();
    assert_eq!(response.status(), 404);

    let response = server.client.delete(&url).send().await.unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_deleting_daily_quote_leaves_none_until_rotation() {
    let server = TestServer::new().await;

    let response = server
        .client
        .get(server.url("/api/v1/quotes/daily"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let daily: Value = response.json().await.unwrap();
    assert_eq!(daily["isDailyQuote"], true);

    let response = server
        .client
        .delete(server.url(&format!("/api/v1/quotes/{}", daily["id"])))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 204);

    let response = server
        .client
        .get(server.url("/api/v1/quotes/daily"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
    let json: Value = response.json().await.unwrap();
    assert_eq!(json["error"], "No daily quote available");

    let response = server
        .client
        .post(server.url("/api/v1/quotes/daily/rotate"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let rotated: Value = response.json().await.unwrap();
    assert_eq!(rotated["isDailyQuote"], true);
    assert_ne!(rotated["id"], daily["id"]);

    let response = server
        .client
        .get(server.url("/api/v1/quotes/daily"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_seed_then_rotate_scenario() {
    let server = TestServer::empty().await;
    let store = server.state.db.clone();

    assert_eq!(
        dailyquote::seed::seed_if_empty(store.as_ref()).await.unwrap(),
        10
    );
    assert_eq!(store.count().await.unwrap(), 10);
    assert!(store.get_daily().await.is_err());

    let response = server
        .client
        .post(server.url("/api/v1/quotes/daily/rotate"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let rotated: Value = response.json().await.unwrap();

    let all = store.list_all().await.unwrap();
    let flagged: Vec<_> = all.iter().filter(|q| q.is_daily).collect();
    assert_eq!(flagged.len(), 1);
    assert_eq!(rotated["id"], flagged[0].id);
}

#[tokio::test]
async fn test_daily_and_random_on_empty_store() {
    let server = TestServer::empty().await;

    for (method_is_post, path, message) in [
        (false, "/api/v1/quotes/daily", "No daily quote available"),
        (false, "/api/v1/quotes/random", "No quotes available"),
        (true, "/api/v1/quotes/daily/rotate", "No quotes available"),
    ] {
        let request = if method_is_post {
            server.client.post(server.url(path))
        } else {
            server.client.get(server.url(path))
        };
        let response = request.send().await.unwrap();
        assert_eq!(response.status(), 404, "{}", path);

        let json: Value = response.json().await.unwrap();
        assert_eq!(json["error"], message);
    }
}

#[tokio::test]
async fn test_random_quote() {
    let server = TestServer::new().await;

    let response = server
        .client
        .get(server.url("/api/v1/quotes/random"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let quote: Value = response.json().await.unwrap();
    let id = quote["id"].as_i64().unwrap();
    assert!(server.state.db.get(id).await.is_ok());
}

#[tokio::test]
async fn test_quotes_by_author() {
    let server = TestServer::new().await;

    let response = server
        .client
        .get(server.url("/api/v1/quotes/author/Steve%20Jobs"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let quotes: Vec<Value> = response.json().await.unwrap();
    assert_eq!(quotes.len(), 3);
    assert!(quotes.iter().all(|q| q["author"] == "Steve Jobs"));

    let response = server
        .client
        .get(server.url("/api/v1/quotes/author/Nobody"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let quotes: Vec<Value> = response.json().await.unwrap();
    assert!(quotes.is_empty());
}

#[tokio::test]
async fn test_authors_are_distinct_and_sorted() {
    let server = TestServer::new().await;

    let response = server
        .client
        .get(server.url("/api/v1/quotes/authors"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let authors: Vec<String> = response.json().await.unwrap();
    assert_eq!(
        authors,
        vec![
            "Albert Einstein",
            "Aristotle",
            "Chinese Proverb",
            "Eleanor Roosevelt",
            "John Lennon",
            "Steve Jobs",
            "Tony Robbins",
            "Winston Churchill",
        ]
    );
}

#[tokio::test]
async fn test_concurrent_rotations_and_deletes_keep_single_daily() {
    let server = TestServer::new().await;

    let rotations = (0..10).map(|_| {
        server
            .client
            .post(server.url("/api/v1/quotes/daily/rotate"))
            .send()
    });
    let daily = server.state.db.get_daily().await.unwrap();
    let delete = server
        .client
        .delete(server.url(&format!("/api/v1/quotes/{}", daily.id)))
        .send();

    let (rotation_results, delete_result) =
        tokio::join!(futures::future::join_all(rotations), delete);

    for result in rotation_results {
        assert_eq!(result.unwrap().status(), 200);
    }
    assert_eq!(delete_result.unwrap().status(), 204);

    let flagged = server
        .state
        .db
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .filter(|q| q.is_daily)
        .count();
    assert!(flagged <= 1);
    assert_eq!(server.state.db.count().await.unwrap(), 9);
}

#[tokio::test]
async fn test_create_rejects_nul_characters() {
    let server = TestServer::empty().await;

    for (body, message) in [
        (
            serde_json::json!({ "text": "\u{0}This text is long enough.", "author": "Author" }),
            "Quote text cannot contain NUL characters",
        ),
        (
            serde_json::json!({ "text": "This text is long enough.", "author": "\u{0}Bob" }),
            "Author cannot contain NUL characters",
        ),
    ] {
        let response = server
            .client
            .post(server.url("/api/v1/quotes"))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400);

        let json: Value = response.json().await.unwrap();
        assert_eq!(json["error"], message);
    }

    assert_eq!(server.state.db.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_malformed_requests_get_json_errors() {
    let server = TestServer::new().await;

    let requests = [
        server
            .client
            .post(server.url("/api/v1/quotes"))
            .header("content-type", "application/json")
            .body("{\"text\": "),
        server
            .client
            .post(server.url("/api/v1/quotes"))
            .body("{\"text\": \"This is long enough text.\", \"author\": \"A\"}"),
        server
            .client
            .put(server.url("/api/v1/quotes/1"))
            .header("content-type", "application/json")
            .body("[1, 2, 3]"),
        server.client.get(server.url("/api/v1/quotes/not-a-number")),
        server.client.delete(server.url("/api/v1/quotes/1.5")),
    ];

    for request in requests {
        let response = request.send().await.unwrap();
        assert_eq!(response.status(), 400);

        let json: Value = response.json().await.unwrap();
        assert!(json["error"].is_string());
    }

    assert_eq!(server.state.db.count().await.unwrap(), 10);
}
