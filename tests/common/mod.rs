//! Shared test utilities: a mock listing server and resource fixtures.

#![allow(dead_code)]

pub mod mock_listing;

use folio::resources::CodingResource;
use std::net::TcpListener;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub fn resource(id: i64, topics: &[&str], levels: &[&str]) -> CodingResource {
    CodingResource {
        id,
        description: format!("Resource {id}"),
        url: format!("http://resource{id}.example"),
        types: vec!["tutorial".to_string()],
        topics: topics.iter().map(|s| s.to_string()).collect(),
        levels: levels.iter().map(|s| s.to_string()).collect(),
    }
}

/// Six resources, the first tagged `js`/`beginner` like the listing sample.
pub fn six_resources() -> Vec<CodingResource> {
    vec![
        resource(1, &["js"], &["beginner"]),
        resource(2, &["css", "html"], &["beginner"]),
        resource(3, &["js", "react"], &["advanced"]),
        resource(4, &["python"], &["intermediate"]),
        resource(5, &["js"], &["intermediate"]),
        resource(6, &["go"], &["advanced"]),
    ]
}
