//! End-to-end tests against a mock GraphQL endpoint.

use instagram_client::{InstagramClient, InstagramError, MediaItem};
use serde_json::{json, Value};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> InstagramClient {
    InstagramClient::new().with_graphql_url(format!("{}/graphql/query", server.uri()))
}

fn carousel_document() -> Value {
    json!({
        "data": {
            "xdt_shortcode_media": {
                "owner": {
                    "username": "natgeo",
                    "full_name": "National Geographic",
                    "is_verified": true,
                    "profile_pic_url": "https://cdn.example/natgeo.jpg",
                    "edge_followed_by": { "count": 1000 }
                },
                "edge_media_to_caption": {
                    "edges": [ { "node": { "text": "From the field." } } ]
                },
                "edge_sidecar_to_children": {
                    "edges": [
                        {
                            "node": {
                                "is_video": true,
                                "video_url": "https://cdn.example/1.mp4",
                                "display_url": "https://cdn.example/1.jpg",
                                "dimensions": { "width": 720, "height": 1280 },
                                "video_view_count": 99
                            }
                        },
                        {
                            "node": {
                                "is_video": false,
                                "display_url": "https://cdn.example/2.jpg",
                                "dimensions": { "width": 1080, "height": 1080 }
                            }
                        }
                    ]
                },
                "clips_music_attribution_info": {
                    "artist_name": "charlie",
                    "song_name": "Original audio",
                    "uses_original_audio": true,
                    "audio_id": "1042861231119239"
                }
            }
        }
    })
}

#[tokio::test]
async fn fetches_and_normalizes_a_post() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(carousel_document()))
        .expect(1)
        .mount(&server)
        .await;

    let post = client_for(&server).fetch_post("DKHRsO_tx_o").await.unwrap();

    assert_eq!(post.url, "https://www.instagram.com/p/DKHRsO_tx_o/");
    assert_eq!(post.description, "From the field.");
    assert_eq!(post.author.username, "natgeo");
    assert_eq!(post.media.len(), 2);
    assert!(matches!(post.media[0], MediaItem::Video(_)));
    assert!(matches!(post.media[1], MediaItem::Image(_)));
    assert!(post.music_info.is_some());
}

#[tokio::test]
async fn sends_the_fingerprint_request_shape() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql/query"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(header("x-ig-app-id", "1217981644879628"))
        .and(header("x-fb-friendly-name", "PolarisPostActionLoadPostQueryQuery"))
        .and(header("x-fb-lsd", "AVrqPT0gJDo"))
        .and(header("referer", "https://www.instagram.com/p/DKEcNBuJIdN/"))
        .and(body_string_contains("doc_id=8845758582119845"))
        .and(body_string_contains("DKEcNBuJIdN"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": {} })))
        .expect(1)
        .mount(&server)
        .await;

    // The request matched everything above; the empty document then maps to
    // the domain-level failure, not a transport one.
    let err = client_for(&server)
        .fetch_post("DKEcNBuJIdN")
        .await
        .unwrap_err();
    assert!(matches!(err, InstagramError::PostNotFound));
}

#[tokio::test]
async fn non_success_status_is_fetch_failed_without_parsing() {
    let server = MockServer::start().await;

    // Body is deliberately not JSON: a parse attempt would surface as
    // MalformedResponse instead of FetchFailed.
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<html>gone</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_post("zzz").await.unwrap_err();
    match err {
        InstagramError::FetchFailed(status) => assert_eq!(status, "404 Not Found"),
        other => panic!("expected FetchFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn invalid_json_body_is_malformed_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("definitely not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_post("zzz").await.unwrap_err();
    assert!(matches!(err, InstagramError::MalformedResponse(_)));
}

#[tokio::test]
async fn extra_header_overrides_the_default() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("x-csrftoken", "rotated-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(carousel_document()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).with_header("X-CSRFToken", "rotated-token");
    client.fetch_post("DKHRsO_tx_o").await.unwrap();
}

#[tokio::test]
async fn fetch_raw_returns_the_unprocessed_document() {
    let server = MockServer::start().await;

    let document = carousel_document();
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(document.clone()))
        .mount(&server)
        .await;

    let raw = client_for(&server).fetch_raw("DKHRsO_tx_o").await.unwrap();
    assert_eq!(raw, document);
}

#[tokio::test]
async fn output_json_shape_matches_the_contract() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(carousel_document()))
        .mount(&server)
        .await;

    let post = client_for(&server).fetch_post("DKHRsO_tx_o").await.unwrap();
    let value = serde_json::to_value(&post).unwrap();

    assert_eq!(value["media"][0]["type"], "video");
    assert_eq!(value["media"][0]["viewCount"], 99);
    // carousel children fall back to display_url for the thumbnail
    assert_eq!(value["media"][0]["thumbnailUrl"], "https://cdn.example/1.jpg");
    // the image variant never serializes video-only attributes
    assert!(value["media"][1].get("duration").is_none());
    assert_eq!(value["musicInfo"]["isOriginalAudio"], true);
    assert_eq!(value["author"]["followersCount"], 1000);
}
