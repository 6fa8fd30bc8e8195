//! Shared fixtures for the integration tests

#![allow(dead_code)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

/// White page with black filled rectangles, `(x, y, width, height)`
pub fn page_with_rects(width: u32, height: u32, rects: &[(u32, u32, u32, u32)]) -> RgbImage {
    let mut page = RgbImage::from_pixel(width, height, Rgb([255, 255, 255]));
    for &(x, y, w, h) in rects {
        for py in y..y + h {
            for px in x..x + w {
                page.put_pixel(px, py, Rgb([0, 0, 0]));
            }
        }
    }
    page
}

/// Save a page as PNG in `dir`
pub fn write_png(dir: &Path, name: &str, page: RgbImage) -> PathBuf {
    let path = dir.join(name);
    DynamicImage::ImageRgb8(page).save_with_format(&path, ImageFormat::Png).unwrap();
    path
}

/// The page used by most tests: one 135x90 figure on a 400x300 page
pub fn single_figure_page(dir: &Path) -> PathBuf {
    write_png(dir, "page.png", page_with_rects(400, 300, &[(100, 80, 135, 90)]))
}

/// Chat completions envelope around `content`
pub fn chat_body(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-test",
        "choices": [{"index": 0, "message": {"role": "assistant", "content": content}}]
    }).to_string()
}

/// HTTP responder answering exactly one request
pub struct MockServer {
    pub url: String,
    handle: JoinHandle<String>,
}

impl MockServer {
    /// Start a responder that replies with `status` and `body`
    pub fn start(status: u16, body: String) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/v1/chat/completions", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream);

            let mut request = String::new();
            let mut content_length = 0usize;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                if let Some((name, value)) = line.split_once(':') {
                    if name.trim().eq_ignore_ascii_case("content-length") {
                        content_length = value.trim().parse().unwrap();
                    }
                }
                request.push_str(&line);
                if line == "\r\n" || line.is_empty() {
                    break;
                }
            }

            let mut body_bytes = vec![0u8; content_length];
            reader.read_exact(&mut body_bytes).unwrap();
            request.push_str(&String::from_utf8_lossy(&body_bytes));

            let reason = if status == 200 { "OK" } else { "Error" };
            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status, reason, body.len(), body);
            let mut stream = reader.into_inner();
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();

            request
        });

        MockServer { url, handle }
    }

    /// Wait for the request and return it as text
    pub fn received_request(self) -> String {
        self.handle.join().unwrap()
    }
}
