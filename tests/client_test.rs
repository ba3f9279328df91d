use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use l8_events_client::artists::EmbeddingPayload;
use l8_events_client::config::ClientOptions;
use l8_events_client::contact::ContactPayload;
use l8_events_client::error::Error;
use l8_events_client::event_artists::NewEventArtist;
use l8_events_client::models::{EmbedPlatform, EventArtist};
use l8_events_client::resource::{OptimisticList, Resource};
use l8_events_client::users::PasswordChange;
use l8_events_client::L8Events;

fn client_for(mock_server: &MockServer) -> L8Events {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("l8_events_client=debug")
        .try_init();
    let options = ClientOptions::default()
        .with_api_url(&mock_server.uri())
        .with_backend_url(&mock_server.uri());
    L8Events::new_with_options(options)
}

#[tokio::test]
async fn list_artists_normalizes_legacy_fields_and_image_urls() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/artists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "1",
                "name": "Sarah Johnson",
                "genre": "Pop",
                "imageUrl": "/uploads/sarah.jpg",
                "socialMedia": "https://legacy.com"
            },
            {
                "id": "2",
                "name": "The Jazz Trio",
                "genre": "Jazz",
                "socialMedia": [{"platform": "instagram", "url": "https://ig.example.com"}]
            }
        ])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let artists = client.artists().list().await.unwrap();

    assert_eq!(artists.len(), 2);
    assert_eq!(
        artists[0].image_url.as_deref(),
        Some(format!("{}/uploads/sarah.jpg", mock_server.uri()).as_str())
    );
    assert_eq!(artists[0].social_media[0].platform, "Legacy");
    assert_eq!(artists[1].social_media[0].platform, "instagram");
}

#[tokio::test]
async fn bearer_token_is_attached_from_the_store() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(header("Authorization", "Bearer admin-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "u1", "email": "admin@l8events.dk", "role": "admin"}
        ])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.tokens().set("admin-token");

    let users = client.users().list().await.unwrap();
    assert_eq!(users[0].email, "admin@l8events.dk");
}

#[tokio::test]
async fn auth_rejection_voids_the_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/contact"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.tokens().set("stale-token");

    let result = client.contact().list().await;
    assert!(matches!(result, Err(Error::SessionExpired)));
    // the store is the single source of truth and has been cleared
    assert_eq!(client.tokens().get(), None);
    assert!(!client.tokens().is_authenticated());
}

#[tokio::test]
async fn validation_failure_surfaces_message_and_raw_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/contact"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "bad field",
            "errors": {"email": "is invalid"}
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let payload = ContactPayload {
        name: "A".to_string(),
        email: "not-an-email".to_string(),
        subject: None,
        message: "hi".to_string(),
    };

    match client.contact().submit(&payload).await {
        Err(Error::Validation { message, details }) => {
            assert_eq!(message, "bad field");
            let details = details.unwrap();
            assert_eq!(details["errors"]["email"], "is invalid");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn unexpected_failures_map_to_a_generic_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    match client.events().list().await {
        Err(Error::Server { status, status_text }) => {
            assert_eq!(status, 500);
            assert_eq!(status_text, "Internal Server Error");
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn no_content_is_an_empty_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/users/u1/password"))
        .and(body_json(json!({
            "currentPassword": "old",
            "newPassword": "new"
        })))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let change = PasswordChange {
        current_password: "old".to_string(),
        new_password: "new".to_string(),
    };
    assert!(client.users().change_password("u1", &change).await.is_ok());
}

#[tokio::test]
async fn event_artist_links_are_deleted_by_id_pair() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/event-artists/event/e1/artist/a1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert!(client.event_artists().delete("e1", "a1").await.is_ok());
}

#[tokio::test]
async fn linking_an_artist_posts_the_id_pair() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/event-artists"))
        .and(body_json(json!({"eventId": "e1", "artistId": "a1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "link1",
            "eventId": "e1",
            "artistId": "a1"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let link = client
        .event_artists()
        .create(&NewEventArtist {
            event_id: "e1".to_string(),
            artist_id: "a1".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(link.id.as_deref(), Some("link1"));
}

#[tokio::test]
async fn embeddings_round_trip_through_the_artist_sub_resource() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/artists/a1/embeddings"))
        .and(body_json(json!({
            "platform": "spotify",
            "embedCode": "<iframe>spotify</iframe>"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "emb1",
            "platform": "spotify",
            "embedCode": "<iframe>spotify</iframe>"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let embedding = client
        .artists()
        .add_embedding(
            "a1",
            &EmbeddingPayload {
                platform: EmbedPlatform::Spotify,
                embed_code: "<iframe>spotify</iframe>".to_string(),
                title: None,
                description: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(embedding.id, "emb1");
    assert_eq!(embedding.platform, EmbedPlatform::Spotify);
}

#[tokio::test]
async fn client_resources_follow_the_configured_retry_policy() {
    let client = L8Events::new_with_options(
        ClientOptions::default()
            .with_max_retries(1)
            .with_retry_backoff(Duration::from_millis(10)),
    );

    let calls = Arc::new(AtomicU32::new(0));
    let counter = calls.clone();
    let resource = client.resource(move || {
        let counter = counter.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            // transport-level failure: nothing listens on the discard port
            let err = reqwest::Client::new()
                .get("http://127.0.0.1:9/unreachable")
                .timeout(Duration::from_millis(250))
                .send()
                .await
                .expect_err("request must fail");
            Err::<Vec<String>, _>(Error::Http(err))
        }
    });

    resource.load().await;

    assert!(resource.state().error.is_some());
    // one attempt plus exactly the single configured retry
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn image_upload_resolves_the_returned_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/artists/upload-image"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "url": "/uploads/new.jpg",
            "filename": "new.jpg"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let uploaded = client
        .artists()
        .upload_image("new.jpg", vec![0xFF, 0xD8, 0xFF])
        .await
        .unwrap();
    assert_eq!(uploaded.url, format!("{}/uploads/new.jpg", mock_server.uri()));
    assert_eq!(uploaded.filename.as_deref(), Some("new.jpg"));
}

#[tokio::test]
async fn gallery_upload_returns_the_created_record() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/gallery/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "g1",
            "url": "/uploads/gallery/g1.jpg",
            "thumbnailUrl": "/uploads/gallery/g1-thumb.jpg",
            "isPublished": false
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let image = client.gallery().upload("g1.jpg", vec![1, 2, 3]).await.unwrap();
    assert_eq!(
        image.thumbnail_url.as_deref(),
        Some(format!("{}/uploads/gallery/g1-thumb.jpg", mock_server.uri()).as_str())
    );
    assert!(!image.is_published);
}

#[tokio::test]
async fn optimistic_unlink_reverts_when_the_server_rejects() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/event-artists/event/e1/artist/a1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let list = OptimisticList::new(vec![EventArtist {
        id: Some("link1".to_string()),
        event_id: "e1".to_string(),
        artist_id: "a1".to_string(),
        artist: None,
    }]);

    let result = list
        .apply(
            |links| links.retain(|l| l.artist_id != "a1"),
            client.event_artists().delete("e1", "a1"),
        )
        .await;

    assert!(result.is_err());
    // the local splice was rolled back to the pre-edit snapshot
    assert_eq!(list.items().len(), 1);
    assert_eq!(list.items()[0].artist_id, "a1");
}

#[tokio::test]
async fn a_resource_wraps_a_list_call_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/venues"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "v1", "name": "Harbor Hall", "city": "Copenhagen"}
        ])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let resource = Resource::new(|| async { client.venues().list().await });

    resource.load().await;
    let state = resource.state();
    assert!(!state.loading);
    assert_eq!(state.error, None);
    assert_eq!(state.data.unwrap()[0].name, "Harbor Hall");

    // refetch reuses the same call unconditionally
    resource.refetch().await;
    assert_eq!(resource.state().data.unwrap().len(), 1);
}
