#![cfg(feature = "serve")]

use opd_deck::serve::{self, ServeError, ServerConfig};
use std::net::{IpAddr, Ipv4Addr, TcpListener};

fn local_config(port: u16) -> ServerConfig {
    ServerConfig {
        port,
        bind: IpAddr::V4(Ipv4Addr::LOCALHOST),
        open_browser: false,
        ..Default::default()
    }
}

#[test]
fn test_port_already_bound() {
    let held = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).unwrap();
    let port = held.local_addr().unwrap().port();

    let runtime = tokio::runtime::Runtime::new().unwrap();
    let result = runtime.block_on(serve::run(&local_config(port)));
    match result {
        Err(ServeError::PortInUse { port: p }) => assert_eq!(p, port),
        other => panic!("expected PortInUse, got {other:?}"),
    }
}

#[test]
fn test_serves_files_until_shutdown() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("test-cors-fix.html"), "<h1>cors</h1>").unwrap();

    let listener = serve::bind(&local_config(0)).unwrap();
    let port = listener.local_addr().unwrap().port();
    let root = dir.path().to_path_buf();

    let runtime = tokio::runtime::Runtime::new().unwrap();
    let (tx, rx) = tokio::sync::oneshot::channel::<()>();
    let server = runtime.spawn(async move {
        serve::serve(listener, &root, async {
            let _ = rx.await;
        })
        .await
    });

    let base = format!("http://127.0.0.1:{port}");
    let page = reqwest::blocking::get(format!("{base}/test-cors-fix.html")).unwrap();
    assert_eq!(page.status(), 200);
    assert_eq!(page.text().unwrap(), "<h1>cors</h1>");

    let missing = reqwest::blocking::get(format!("{base}/nope.html")).unwrap();
    assert_eq!(missing.status(), 404);

    tx.send(()).unwrap();
    runtime.block_on(server).unwrap().unwrap();

    // The port is free again once the server has stopped.
    assert!(TcpListener::bind((Ipv4Addr::LOCALHOST, port)).is_ok());
}
