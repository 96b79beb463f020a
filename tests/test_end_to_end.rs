mod common;

use std::net::SocketAddr;

use common::{memory_state, sample_input};
use fitness_feedback::{
    client::{
        ClientConfig, ClientError, FeedbackApi, FeedbackClient, HttpFeedbackApi, Session,
        SessionUser, SubmitOutcome,
    },
    create_app,
    models::Rating,
};
use uuid::Uuid;

async fn spawn_server() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = create_app(memory_state(), Vec::new());

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

fn http_api(addr: SocketAddr) -> HttpFeedbackApi {
    HttpFeedbackApi::new(ClientConfig::new(format!("http://{addr}/")))
}

#[tokio::test]
async fn test_http_api_round_trip() {
    let api = http_api(spawn_server().await);

    let created = api.create(&sample_input("U1")).await.unwrap();
    assert_eq!(created.rating, Rating::ThreeStars);

    let listed = api.list("U1").await.unwrap();
    assert_eq!(listed, vec![created.clone()]);

    api.delete(created.id).await.unwrap();
    assert!(api.list("U1").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_http_api_maps_404_to_not_found() {
    let api = http_api(spawn_server().await);
    let id = Uuid::new_v4();

    assert_eq!(api.delete(id).await, Err(ClientError::NotFound));
    assert_eq!(
        api.update(id, &sample_input("U1")).await.unwrap_err(),
        ClientError::NotFound
    );
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = http_api(addr).list("U1").await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
}

#[tokio::test]
async fn test_client_over_http() {
    let addr = spawn_server().await;
    let session = Session::logged_in(SessionUser {
        id: "U1".into(),
        name: None,
        email: None,
    });
    let mut client = FeedbackClient::new(http_api(addr), &session);
    client.load().await;

    client.set_name("A");
    client.set_email("a@x.com");
    client.set_rating(Some(Rating::ThreeStars));
    client.set_message("good");
    assert!(matches!(client.submit().await, SubmitOutcome::Created(_)));
    assert_eq!(client.feedbacks().len(), 1);

    let id = client.feedbacks()[0].id;
    client.delete(id, |_| true).await;
    assert!(client.feedbacks().is_empty());
}

#[tokio::test]
async fn test_owner_ids_with_url_delimiters_are_encoded() {
    let api = http_api(spawn_server().await);

    for owner in ["team/a", "u#1", "u?x=1", "100%"] {
        let created = api.create(&sample_input(owner)).await.unwrap();
        assert_eq!(created.owner_id, owner);

        let listed = api.list(owner).await.unwrap();
        assert_eq!(listed, vec![created], "listing for {owner}");
    }

    assert!(api.list("team").await.unwrap().is_empty());
    assert!(api.list("u").await.unwrap().is_empty());
}
