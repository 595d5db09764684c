use portfolio_core::{
    source_for, FileProjectSource, HttpProjectSource, MediaKind, ProjectSource, SourceError,
};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;

/// Serves one HTTP response on a local port and reports the raw request head.
fn serve_once(status_line: &'static str, body: &'static str) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/projects.json", listener.local_addr().unwrap());
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let read = stream.read(&mut buf).unwrap();
            if read == 0 {
                break;
            }
            head.extend_from_slice(&buf[..read]);
        }
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
        tx.send(String::from_utf8_lossy(&head).to_string()).unwrap();
    });
    (url, rx)
}

#[test]
fn file_source_loads_and_tolerates_missing_optional_fields() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "soloProjects": [
                {{"id": "p1", "title": "Maze VR", "description": "A VR maze demo",
                  "media": [{{"url": "clip.mp4"}}, {{"url": "shot.png", "label": "Shot"}}],
                  "codeBlocks": [{{"label": "Move", "code": "x < y"}}]}}
            ],
            "teamProjects": [
                {{"title": "Play & Learn", "details": ["Kids app"], "media": [{{"url": "a.webm", "type": "image"}}]}}
            ]
        }}"#
    )
    .unwrap();

    let source = FileProjectSource::new(file.path());
    let mut data = source.load().unwrap();
    data.assign_ids();

    let solo = &data.solo_projects[0];
    assert_eq!(solo.id(), "p1");
    assert_eq!(solo.media.len(), 2);
    assert_eq!(portfolio_core::resolve_kind(&solo.media[0]), MediaKind::Video);
    assert_eq!(solo.media[1].label, "Shot");
    assert_eq!(solo.code_blocks[0].code, "x < y");

    let team = &data.team_projects[0];
    assert_eq!(team.id(), "team_play-learn");
    assert!(team.responsibilities.is_empty());
    assert_eq!(portfolio_core::resolve_kind(&team.media[0]), MediaKind::Image);
}

#[test]
fn missing_top_level_arrays_default_to_empty() {
    let data = portfolio_core::MemoryProjectSource::ok("{}").load().unwrap();
    assert!(data.solo_projects.is_empty());
    assert!(data.team_projects.is_empty());
}

#[test]
fn missing_file_is_an_io_error_naming_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("projects.json");
    let source = source_for(path.to_str().unwrap());
    let err = source.load().unwrap_err();
    assert!(matches!(err, SourceError::Io { .. }));
    assert!(err.to_string().contains("projects.json"));
}

#[test]
fn http_404_is_a_status_error_and_request_disables_caching() {
    let (url, requests) = serve_once("404 Not Found", "");
    let err = HttpProjectSource::new(url).load().unwrap_err();

    assert!(matches!(err, SourceError::Status { status: 404, .. }));
    assert_eq!(err.to_string(), "Could not load projects.json (HTTP 404)");

    let head = requests.recv().unwrap().to_ascii_lowercase();
    assert!(head.starts_with("get /projects.json "));
    assert!(head.contains("cache-control: no-store"));
}

#[test]
fn http_success_decodes_document() {
    let (url, _requests) = serve_once("200 OK", r#"{"soloProjects":[{"title":"Maze VR"}]}"#);
    let data = source_for(&url).load().unwrap();
    assert_eq!(data.solo_projects[0].title, "Maze VR");
    assert!(data.team_projects.is_empty());
}
