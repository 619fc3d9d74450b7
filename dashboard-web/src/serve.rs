//! Static file server for the dashboard
//!
//! Serves the built app from `dist/`. Unknown paths get `index.html` so the
//! client-side router can handle deep links.

#[cfg(not(target_arch = "wasm32"))]
mod server {
    use std::fs;
    use std::io::{BufRead, BufReader, Write};
    use std::net::{TcpListener, TcpStream};
    use std::path::{Component, Path, PathBuf};

    use tracing::{debug, error, info, warn};
    use tracing_subscriber::EnvFilter;

    const DEFAULT_ADDR: &str = "127.0.0.1:8080";
    const DIST_DIR: &str = "dist";
    const INDEX_FILE: &str = "index.html";

    pub fn run() {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_from_env("ASSETI_LOG_LEVEL"))
            .unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();

        let addr = std::env::var("ASSETI_SERVE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
        let listener = match TcpListener::bind(&addr) {
            Ok(listener) => listener,
            Err(e) => {
                error!("failed to bind {}: {}", addr, e);
                std::process::exit(1);
            }
        };

        info!("Asseti dashboard running at http://{}", addr);
        info!("Serving from {}/ directory", DIST_DIR);

        let root = Path::new(DIST_DIR);
        for stream in listener.incoming() {
            match stream {
                Ok(stream) => handle_client(stream, root),
                Err(e) => warn!("connection error: {}", e),
            }
        }
    }

    fn handle_client(mut stream: TcpStream, root: &Path) {
        let request_line = match BufReader::new(&mut stream).lines().next() {
            Some(Ok(line)) => line,
            _ => {
                warn!("failed to read request line");
                return;
            }
        };

        let request_path = request_line.split_whitespace().nth(1).unwrap_or("/");
        let file_path = resolve_path(root, request_path);
        debug!("{} -> {}", request_path, file_path.display());

        let response = match fs::read(&file_path) {
            Ok(body) => Response::ok(content_type(&file_path), body),
            Err(e) => {
                error!("could not read {}: {}", file_path.display(), e);
                Response::not_found()
            }
        };

        if let Err(e) = response.write_to(&mut stream) {
            warn!("failed to write response: {}", e);
        }
    }

    struct Response {
        status: &'static str,
        content_type: &'static str,
        body: Vec<u8>,
    }

    impl Response {
        fn ok(content_type: &'static str, body: Vec<u8>) -> Self {
            Self { status: "200 OK", content_type, body }
        }

        fn not_found() -> Self {
            Self {
                status: "404 NOT FOUND",
                content_type: "text/html; charset=utf-8",
                body: b"<!DOCTYPE html><html><body><h1>Not found</h1><p>Run trunk build first.</p></body></html>".to_vec(),
            }
        }

        fn write_to(&self, stream: &mut impl Write) -> std::io::Result<()> {
            write!(
                stream,
                "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                self.status,
                self.content_type,
                self.body.len()
            )?;
            stream.write_all(&self.body)?;
            stream.flush()
        }
    }

    /// Map a request target to a file under `root`.
    ///
    /// Query strings are dropped. Anything that is not an existing regular
    /// file, or that tries to leave `root`, resolves to the index.
    pub(crate) fn resolve_path(root: &Path, request_path: &str) -> PathBuf {
        let index = root.join(INDEX_FILE);
        let path = request_path.split(['?', '#']).next().unwrap_or("/");
        let relative = Path::new(path.trim_start_matches('/'));

        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if relative.as_os_str().is_empty() || escapes {
            return index;
        }

        let candidate = root.join(relative);
        if candidate.is_file() {
            candidate
        } else {
            index
        }
    }

    pub(crate) fn content_type(path: &Path) -> &'static str {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("html") => "text/html; charset=utf-8",
            Some("css") => "text/css",
            Some("js") => "application/javascript",
            Some("wasm") => "application/wasm",
            Some("json") => "application/json",
            Some("svg") => "image/svg+xml",
            Some("png") => "image/png",
            Some("ico") => "image/x-icon",
            _ => "application/octet-stream",
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn dist_fixture(name: &str) -> PathBuf {
            let root = std::env::temp_dir().join(format!("asseti-serve-{}-{}", name, std::process::id()));
            fs::create_dir_all(root.join("assets")).unwrap();
            fs::write(root.join(INDEX_FILE), "<html></html>").unwrap();
            fs::write(root.join("app.wasm"), [0u8, 97, 115, 109]).unwrap();
            fs::write(root.join("assets/logo.svg"), "<svg/>").unwrap();
            root
        }

        #[test]
        fn test_root_serves_index() {
            let root = dist_fixture("root");
            assert_eq!(resolve_path(&root, "/"), root.join(INDEX_FILE));
            assert_eq!(resolve_path(&root, ""), root.join(INDEX_FILE));
        }

        #[test]
        fn test_existing_file_is_served() {
            let root = dist_fixture("existing");
            assert_eq!(resolve_path(&root, "/app.wasm"), root.join("app.wasm"));
            assert_eq!(resolve_path(&root, "/assets/logo.svg?v=2"), root.join("assets/logo.svg"));
        }

        #[test]
        fn test_client_routes_fall_back_to_index() {
            let root = dist_fixture("spa");
            assert_eq!(resolve_path(&root, "/portfolio"), root.join(INDEX_FILE));
            assert_eq!(resolve_path(&root, "/assets"), root.join(INDEX_FILE));
        }

        #[test]
        fn test_parent_segments_are_rejected() {
            let root = dist_fixture("traversal");
            assert_eq!(resolve_path(&root, "/../Cargo.toml"), root.join(INDEX_FILE));
            assert_eq!(resolve_path(&root, "/assets/../../secret"), root.join(INDEX_FILE));
        }

        #[test]
        fn test_content_types() {
            assert_eq!(content_type(Path::new("index.html")), "text/html; charset=utf-8");
            assert_eq!(content_type(Path::new("app_bg.wasm")), "application/wasm");
            assert_eq!(content_type(Path::new("logo.svg")), "image/svg+xml");
            assert_eq!(content_type(Path::new("README")), "application/octet-stream");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    server::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {}
