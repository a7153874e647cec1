//! The two-step photo upload and tagging flows.

mod common;

use common::{Canned, StubApi};
use photocomp_api::{ApiClient, NewPhoto};
use photocomp_types::UserId;
use serde_json::json;
use url::Url;

fn client_for(stub: &StubApi) -> ApiClient {
    ApiClient::new(Url::parse(&stub.base_url).expect("stub base url"))
}

#[tokio::test]
async fn photo_upload_announces_then_puts_bytes() {
    // Separate host for the presigned upload, like production storage.
    let uploads = StubApi::start(vec![Canned::ok("")]).await;
    let upload_url = format!("{}/uploads/summit.jpg", uploads.base_url);

    let stub = StubApi::start(vec![Canned::ok(
        json!({
            "photo": {
                "id": "photo-1",
                "eventId": "evt-1",
                "fileName": "summit.jpg",
                "url": "https://cdn.example.com/signed/summit.jpg"
            },
            "uploadUrl": upload_url
        })
        .to_string(),
    )])
    .await;

    let client = client_for(&stub);
    let upload = client
        .request_photo_upload(
            "jwt-abc",
            "org-1",
            "evt-1",
            &NewPhoto {
                file_name: "summit.jpg".to_string(),
                content_type: "image/jpeg".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(upload.photo.id.as_str(), "photo-1");

    client
        .upload_photo_bytes(&upload.upload_url, "image/jpeg", vec![0xFF, 0xD8, 0xFF])
        .await
        .unwrap();

    let announce = stub.requests();
    assert_eq!(announce[0].method, "POST");
    assert_eq!(announce[0].target, "/organizations/org-1/events/evt-1/photos");
    assert_eq!(announce[0].authorization.as_deref(), Some("Bearer jwt-abc"));
    assert!(announce[0].body.contains("\"fileName\":\"summit.jpg\""));

    let put = uploads.requests();
    assert_eq!(put[0].method, "PUT");
    assert_eq!(put[0].target, "/uploads/summit.jpg");
    assert_eq!(put[0].content_type.as_deref(), Some("image/jpeg"));
    // Presigned URLs carry their own authorization.
    assert_eq!(put[0].authorization, None);
}

#[tokio::test]
async fn tag_photo_posts_user_ids() {
    let stub = StubApi::start(vec![Canned::ok("{}")]).await;

    let client = client_for(&stub);
    client
        .tag_photo(
            "jwt-abc",
            "org-1",
            "evt-1",
            "photo-1",
            &[UserId::from("user-9"), UserId::from("user-12")],
        )
        .await
        .unwrap();

    let requests = stub.requests();
    assert_eq!(requests[0].method, "POST");
    assert_eq!(
        requests[0].target,
        "/organizations/org-1/events/evt-1/photos/photo-1/tags"
    );
    assert_eq!(requests[0].body, r#"{"userIds":["user-9","user-12"]}"#);
}
