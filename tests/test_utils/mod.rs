#![allow(dead_code)]

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

pub const END_TO_END_MARKUP: &str = r#"<html><script>kmtBoot.setProps("{\"page\":{\"_embedded\":{\"tour\":{\"name\":\"R\",\"_embedded\":{\"coordinates\":{\"items\":[{\"lat\":1.0,\"lng\":2.0,\"alt\":3.0}]}}}}}}");</script></html>"#;

pub fn tour_page() -> String {
    fs::read_to_string("./tests/data/tour_page.html").unwrap()
}

/// A local HTTP server that answers exactly one request.
pub struct OneShotServer {
    pub url: String,
    handle: JoinHandle<String>,
}

impl OneShotServer {
    pub fn start(status: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/tour/123456", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {status}\r\n\
             Content-Type: text/html; charset=utf-8\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\r\n{body}",
            body.len()
        );

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut head = String::new();
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                    break;
                }
                head.push_str(&line);
            }
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
            head
        });

        OneShotServer { url, handle }
    }

    /// The request line and headers the server received.
    pub fn request_head(self) -> String {
        self.handle.join().unwrap()
    }
}
