mod common;

use axum::http::StatusCode;
use common::{get_page, post_form, test_app};

#[tokio::test]
async fn index_renders_an_empty_list() {
    let app = test_app();
    let (status, html) = get_page(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Users"));
    assert!(html.contains("/add"));
}

#[tokio::test]
async fn add_form_flow_creates_a_user_and_redirects_with_flash() {
    let app = test_app();

    let (status, html) = get_page(&app, "/add").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("name=\"password\""));

    let (status, location) =
        post_form(&app, "/add", "name=Ann&email=ann%40x.com&password=p1").await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/?flash=User+added+successfully!"));

    let (status, html) = get_page(&app, location.as_deref().unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("User added successfully!"));
    assert!(html.contains("Ann"));
    assert!(html.contains("ann@x.com"));
}

#[tokio::test]
async fn adding_a_duplicate_email_surfaces_a_conflict_page() {
    let app = test_app();

    post_form(&app, "/add", "name=Ann&email=ann%40x.com&password=p1").await;
    let (status, _) = post_form(&app, "/add", "name=Ann+2&email=ann%40x.com&password=p2").await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn edit_form_is_prefilled_and_updates_the_user() {
    let app = test_app();

    post_form(&app, "/add", "name=Ann&email=ann%40x.com&password=p1").await;

    let (status, html) = get_page(&app, "/update/1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("value=\"Ann\""));
    assert!(html.contains("value=\"ann@x.com\""));
    // password is never echoed back
    assert!(html.contains("leave blank to keep current"));

    // blank password keeps the stored credential
    let (status, location) =
        post_form(&app, "/update/1", "name=Anna&email=ann%40x.com&password=").await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(
        location.as_deref(),
        Some("/?flash=User+updated+successfully!")
    );

    let (_, html) = get_page(&app, "/").await;
    assert!(html.contains("Anna"));
}

#[tokio::test]
async fn delete_requires_confirmation_and_a_post() {
    let app = test_app();

    post_form(&app, "/add", "name=Ann&email=ann%40x.com&password=p1").await;

    // GET renders the confirmation page and must not delete
    let (status, html) = get_page(&app, "/delete/1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Confirm delete"));
    assert!(html.contains("action=\"/delete/1\""));

    let (_, html) = get_page(&app, "/").await;
    assert!(html.contains("Ann"), "GET /delete must not remove the user");

    let (status, location) = post_form(&app, "/delete/1", "").await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(
        location.as_deref(),
        Some("/?flash=User+deleted+successfully!")
    );

    let (_, html) = get_page(&app, "/").await;
    assert!(!html.contains("ann@x.com"));
}

#[tokio::test]
async fn unknown_ids_render_not_found_pages() {
    let app = test_app();

    for uri in ["/update/999", "/delete/999"] {
        let (status, html) = get_page(&app, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(html.contains("No such user"));
    }

    let (status, _) = post_form(&app, "/update/999", "name=X&email=x%40x.com&password=").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = post_form(&app, "/delete/999", "").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
