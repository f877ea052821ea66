mod common;

use common::mock_listing::{MockListing, MockResponse};
use common::six_resources;
use folio::config::ResourcesConfig;
use folio::resources::ResourceClient;
use folio::ui::app::UiCommand;
use folio::ui::events::AppEvent;
use folio::ui::runtime::handle_commands;
use std::sync::mpsc as std_mpsc;
use std::time::Duration;
use tokio::sync::mpsc;

async fn next_event(rx: std_mpsc::Receiver<AppEvent>) -> Option<AppEvent> {
    tokio::task::spawn_blocking(move || rx.recv_timeout(Duration::from_secs(5)).ok())
        .await
        .unwrap()
}

#[tokio::test]
async fn fetch_command_posts_loaded_event() {
    let body = serde_json::to_string(&six_resources()).unwrap();
    let server = MockListing::start(MockResponse::json(body)).await;
    let client = ResourceClient::new(&ResourcesConfig {
        endpoint: server.endpoint(),
        limit: 5,
    });

    let (command_tx, command_rx) = mpsc::channel(4);
    let (event_tx, event_rx) = std_mpsc::channel();
    tokio::spawn(handle_commands(command_rx, client, event_tx));

    command_tx.send(UiCommand::FetchResources).await.unwrap();

    match next_event(event_rx).await {
        Some(AppEvent::ResourcesLoaded(Ok(resources))) => assert_eq!(resources.len(), 5),
        _ => panic!("Expected a successful ResourcesLoaded event"),
    }
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn failed_fetch_posts_error_event() {
    let server = MockListing::start(MockResponse::error(500)).await;
    let client = ResourceClient::new(&ResourcesConfig {
        endpoint: server.endpoint(),
        limit: 5,
    });

    let (command_tx, command_rx) = mpsc::channel(4);
    let (event_tx, event_rx) = std_mpsc::channel();
    tokio::spawn(handle_commands(command_rx, client, event_tx));

    command_tx.send(UiCommand::FetchResources).await.unwrap();

    match next_event(event_rx).await {
        Some(AppEvent::ResourcesLoaded(Err(_))) => {}
        _ => panic!("Expected a failed ResourcesLoaded event"),
    }
}
