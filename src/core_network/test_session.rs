//! End-to-end session tests over real sockets: one task runs the control
//! loop, the test plays the client on both channels.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::{TcpListener, TcpStream};

use crate::core_network::network::handle_connection;

fn temp_base(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("ferroftpd-{}-{}-{}", tag, std::process::id(), nanos));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

struct TestClient {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
}

impl TestClient {
    /// Spawns a session task for a fresh socket pair and consumes the
    /// greeting.
    async fn connect(base: &Path) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (connected, accepted) = tokio::join!(TcpStream::connect(addr), listener.accept());
        let (server_side, _) = accepted.unwrap();
        let base = base.to_path_buf();
        tokio::spawn(async move {
            let _ = handle_connection(server_side, base).await;
        });

        let (read_half, write_half) = connected.unwrap().into_split();
        let mut client = Self {
            reader: BufReader::new(read_half),
            writer: write_half,
        };
        client.expect(220).await;
        client
    }

    async fn send(&mut self, line: &str) {
        self.writer
            .write_all(format!("{}\r\n", line).as_bytes())
            .await
            .unwrap();
    }

    async fn read_reply(&mut self) -> String {
        let mut line = String::new();
        self.reader.read_line(&mut line).await.unwrap();
        line.trim_end().to_string()
    }

    async fn expect(&mut self, code: u16) -> String {
        let line = self.read_reply().await;
        assert!(
            line.starts_with(&format!("{} ", code)),
            "expected reply {}, got '{}'",
            code,
            line
        );
        line
    }

    async fn login(&mut self) {
        self.send("USER bob").await;
        self.expect(331).await;
        self.send("PASS x").await;
        self.expect(230).await;
    }

    /// Binds a local data listener and announces it with PORT.
    async fn announce_data_port(&mut self) -> TcpListener {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        self.send(&format!("PORT 127,0,0,1,{},{}", port >> 8, port & 0xff))
            .await;
        self.expect(200).await;
        listener
    }
}

async fn read_data_connection(listener: &TcpListener) -> Vec<u8> {
    let (mut socket, _) = listener.accept().await.unwrap();
    let mut data = Vec::new();
    socket.read_to_end(&mut data).await.unwrap();
    data
}

#[tokio::test]
async fn login_and_directory_walk() {
    let base = temp_base("walk");
    let mut client = TestClient::connect(&base).await;

    client.send("USER bob").await;
    client.expect(331).await;
    client.send("PASS x").await;
    client.expect(230).await;

    client.send("PWD").await;
    assert_eq!(client.read_reply().await, "257 /");

    client.send("CWD /nonexistent").await;
    client.expect(550).await;

    client.send("MKD sub").await;
    assert_eq!(
        client.read_reply().await,
        "257 \"/sub\" directory created"
    );

    client.send("CWD sub").await;
    client.expect(250).await;
    client.send("PWD").await;
    assert_eq!(client.read_reply().await, "257 /sub/");

    client.send("CDUP").await;
    client.expect(250).await;
    client.send("PWD").await;
    assert_eq!(client.read_reply().await, "257 /");

    client.send("QUIT").await;
    client.expect(221).await;

    std::fs::remove_dir_all(&base).unwrap();
}

#[tokio::test]
async fn commands_are_gated_until_login() {
    let base = temp_base("gate");
    let mut client = TestClient::connect(&base).await;

    for command in ["PWD", "TYPE I", "PORT 127,0,0,1,4,1", "STOR upload.txt", "NOOP"] {
        client.send(command).await;
        client.expect(530).await;
    }
    // the gate fired before any filesystem action
    assert!(!base.join("upload.txt").exists());

    client.send("PASS x").await;
    client.expect(503).await;

    client.login().await;
    client.send("NOOP").await;
    client.expect(200).await;

    std::fs::remove_dir_all(&base).unwrap();
}

#[tokio::test]
async fn unknown_and_malformed_commands_get_the_generic_reply() {
    let base = temp_base("unknown");
    let mut client = TestClient::connect(&base).await;
    client.login().await;

    client.send("FROB x").await;
    assert_eq!(client.read_reply().await, "500 'FROB x': command not understood.");

    // missing required argument surfaces the same way
    client.send("MKD").await;
    assert_eq!(client.read_reply().await, "500 'MKD': command not understood.");

    client.send("PORT 1,2,3").await;
    client.expect(500).await;

    std::fs::remove_dir_all(&base).unwrap();
}

#[tokio::test]
async fn type_rejects_unknown_codes_and_keeps_state() {
    let base = temp_base("type");
    std::fs::write(base.join("lines.txt"), b"a\nb").unwrap();
    let mut client = TestClient::connect(&base).await;
    client.login().await;

    // ASCII default: LF goes out as CR LF, so SIZE counts it twice
    client.send("SIZE lines.txt").await;
    assert_eq!(client.read_reply().await, "213 4");

    client.send("TYPE I").await;
    client.expect(200).await;
    client.send("TYPE Q").await;
    assert_eq!(client.read_reply().await, "500 TYPE: invalid argument 'Q'");

    // the failed TYPE left the binary representation in place
    client.send("SIZE lines.txt").await;
    assert_eq!(client.read_reply().await, "213 3");

    std::fs::remove_dir_all(&base).unwrap();
}

#[tokio::test]
async fn stor_refuses_to_overwrite() {
    let base = temp_base("stor-exists");
    std::fs::write(base.join("present.txt"), b"original").unwrap();
    let mut client = TestClient::connect(&base).await;
    client.login().await;

    client.send("STOR present.txt").await;
    assert_eq!(client.read_reply().await, "550 File exists in that location.");
    assert_eq!(std::fs::read(base.join("present.txt")).unwrap(), b"original");

    std::fs::remove_dir_all(&base).unwrap();
}

#[tokio::test]
async fn retr_without_port_reports_no_data_connection() {
    let base = temp_base("no-port");
    std::fs::write(base.join("file.bin"), b"data").unwrap();
    let mut client = TestClient::connect(&base).await;
    client.login().await;

    client.send("RETR file.bin").await;
    client.expect(500).await;

    std::fs::remove_dir_all(&base).unwrap();
}

#[tokio::test]
async fn retr_transforms_per_representation() {
    let base = temp_base("retr");
    let content = b"line1\nline2\r\nend";
    std::fs::write(base.join("file.txt"), content).unwrap();
    let mut client = TestClient::connect(&base).await;
    client.login().await;

    let data_listener = client.announce_data_port().await;

    // default ASCII: CR dropped, LF sent as CR LF
    client.send("RETR file.txt").await;
    let data = read_data_connection(&data_listener).await;
    client.expect(150).await;
    client.expect(226).await;
    assert_eq!(data, b"line1\r\nline2\r\nend");

    // binary: byte-identical, reusing the remembered endpoint
    client.send("TYPE I").await;
    client.expect(200).await;
    client.send("RETR file.txt").await;
    let data = read_data_connection(&data_listener).await;
    client.expect(150).await;
    client.expect(226).await;
    assert_eq!(data, content);

    std::fs::remove_dir_all(&base).unwrap();
}

#[tokio::test]
async fn stor_receives_and_transcodes() {
    let base = temp_base("stor");
    let mut client = TestClient::connect(&base).await;
    client.login().await;

    let data_listener = client.announce_data_port().await;

    client.send("STOR upload.txt").await;
    let (mut data_socket, _) = data_listener.accept().await.unwrap();
    data_socket.write_all(b"up\r\nload\r\n").await.unwrap();
    drop(data_socket);

    client.expect(150).await;
    client.expect(226).await;
    assert_eq!(
        std::fs::read(base.join("upload.txt")).unwrap(),
        b"up\nload\n"
    );

    std::fs::remove_dir_all(&base).unwrap();
}

#[tokio::test]
async fn list_and_nlst_over_the_data_connection() {
    let base = temp_base("list");
    std::fs::write(base.join("notes.txt"), b"0123456789").unwrap();
    let mut client = TestClient::connect(&base).await;
    client.login().await;

    let data_listener = client.announce_data_port().await;

    client.send("NLST").await;
    let data = read_data_connection(&data_listener).await;
    client.expect(150).await;
    client.expect(226).await;
    assert_eq!(data, b"notes.txt\r\n");

    client.send("LIST").await;
    let data = read_data_connection(&data_listener).await;
    client.expect(150).await;
    client.expect(226).await;
    let listing = String::from_utf8(data).unwrap();
    assert!(listing.starts_with("total 1\r\n"), "listing: {}", listing);
    let entry = listing.lines().nth(1).unwrap();
    assert!(entry.starts_with("-rwxrwxrwx   1 ftp      ftp      "), "entry: {}", entry);
    assert!(entry.contains("      10 "), "entry: {}", entry);
    assert!(entry.ends_with(" notes.txt"), "entry: {}", entry);

    client.send("LIST missing").await;
    assert_eq!(client.read_reply().await, "550 No such directory.");

    std::fs::remove_dir_all(&base).unwrap();
}

#[tokio::test]
async fn rein_drops_authentication_and_state() {
    let base = temp_base("rein");
    let mut client = TestClient::connect(&base).await;
    client.login().await;

    client.send("MKD sub").await;
    client.expect(257).await;
    client.send("CWD sub").await;
    client.expect(250).await;

    client.send("REIN").await;
    client.expect(220).await;

    client.send("PWD").await;
    client.expect(530).await;

    client.login().await;
    client.send("PWD").await;
    assert_eq!(client.read_reply().await, "257 /");

    std::fs::remove_dir_all(&base).unwrap();
}

#[tokio::test]
async fn filesystem_mutations_round_trip() {
    let base = temp_base("fs");
    std::fs::write(base.join("victim.txt"), b"bye").unwrap();
    let mut client = TestClient::connect(&base).await;
    client.login().await;

    client.send("MKD sub").await;
    client.expect(257).await;
    client.send("MKD sub").await;
    assert_eq!(client.read_reply().await, "550 sub: file exists");

    client.send("RMD sub").await;
    client.expect(250).await;
    assert!(!base.join("sub").exists());

    client.send("RMD sub").await;
    client.expect(550).await;

    client.send("DELE victim.txt").await;
    client.expect(250).await;
    assert!(!base.join("victim.txt").exists());

    client.send("DELE victim.txt").await;
    client.expect(550).await;

    client.send("SIZE nothing.txt").await;
    client.expect(550).await;

    std::fs::remove_dir_all(&base).unwrap();
}
