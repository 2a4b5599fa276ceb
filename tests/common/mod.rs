//! A tiny in-process HTTP server standing in for the translation endpoint.
#![allow(dead_code, clippy::unwrap_used)]

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

pub type Query = HashMap<String, String>;

pub struct StubServer {
    url: String,
    requests: Arc<Mutex<Vec<Query>>>,
}

impl StubServer {
    /// Starts a server answering every request with `handler(query)`,
    /// which returns the HTTP status and the JSON body.
    pub fn start<F>(handler: F) -> Self
    where
        F: Fn(&Query) -> (u16, String) + Send + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!(
            "http://{}/language/translate/v2",
            listener.local_addr().unwrap()
        );
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { break };
                let Some(query) = read_query(&stream) else {
                    continue;
                };

                let (status, body) = handler(&query);
                seen.lock().unwrap().push(query);

                let response = format!(
                    "HTTP/1.1 {status} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    reason(status),
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
                let _ = stream.flush();
            }
        });

        Self { url, requests }
    }

    /// Starts a server that translates phrases through a fixed table.
    /// Phrases missing from the table get `500 Internal Server Error`.
    pub fn with_table(table: &[(&str, &str)]) -> Self {
        let table: HashMap<String, String> = table
            .iter()
            .map(|(phrase, translation)| ((*phrase).to_string(), (*translation).to_string()))
            .collect();

        Self::start(move |query| match table.get(&query["q"]) {
            Some(translation) => (200, translation_body(translation)),
            None => (500, r#"{"error":{"code":500}}"#.to_string()),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn requests(&self) -> Vec<Query> {
        self.requests.lock().unwrap().clone()
    }
}

/// A Google Translate v2 response body with a single translation.
pub fn translation_body(text: &str) -> String {
    serde_json::json!({ "data": { "translations": [ { "translatedText": text } ] } }).to_string()
}

fn read_query(stream: &TcpStream) -> Option<Query> {
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();
    reader.read_line(&mut request_line).ok()?;

    loop {
        let mut header = String::new();
        if reader.read_line(&mut header).ok()? == 0 || header == "\r\n" {
            break;
        }
    }

    let target = request_line.split_whitespace().nth(1)?;
    let url = reqwest::Url::parse(&format!("http://stub{target}")).ok()?;
    Some(url.query_pairs().into_owned().collect())
}

const fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        403 => "Forbidden",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
