/// Output surface: tagged append-only log plus transient notifications,
/// and the collector that streams a child's stdout/stderr into it.
use std::io::{BufRead, BufReader, Read, Write};
use std::process::{ChildStderr, ChildStdout};
use std::sync::mpsc::{channel, Sender};
use std::sync::Mutex;
use std::thread;

/// Transient status message shown after a step finishes
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Failure(String),
}

/// Append-only destination for compiler output and notifications.
///
/// Shared by concurrent invocations, so implementations take `&self`.
pub trait OutputSink: Send + Sync {
    fn append_line(&self, line: &str);
    fn notify(&self, notification: Notification);
}

/// Console sink: log lines on stdout tagged with the source file name,
/// notifications on stderr.
pub struct ConsoleSink {
    tag: String,
    show_notifications: bool,
}

impl ConsoleSink {
    pub fn new(tag: impl Into<String>, show_notifications: bool) -> Self {
        Self {
            tag: tag.into(),
            show_notifications,
        }
    }
}

impl OutputSink for ConsoleSink {
    fn append_line(&self, line: &str) {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let _ = writeln!(out, "[{}] {}", self.tag, line);
    }

    fn notify(&self, notification: Notification) {
        if !self.show_notifications {
            return;
        }
        match notification {
            Notification::Success(msg) => eprintln!("✅ {}", msg),
            Notification::Failure(msg) => eprintln!("❌ {}", msg),
        }
    }
}

/// Sink that keeps everything in memory
#[derive(Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
    notifications: Mutex<Vec<Notification>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .map(|n| n.clone())
            .unwrap_or_default()
    }
}

impl OutputSink for MemorySink {
    fn append_line(&self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_string());
        }
    }

    fn notify(&self, notification: Notification) {
        if let Ok(mut notifications) = self.notifications.lock() {
            notifications.push(notification);
        }
    }
}

/// Forward stdout and stderr to `sink` line by line as they arrive.
///
/// Returns the combined transcript in arrival order once both streams close.
pub fn stream_lines(
    stdout: Option<ChildStdout>,
    stderr: Option<ChildStderr>,
    sink: &dyn OutputSink,
) -> String {
    let (tx, rx) = channel();

    let stdout_handle = stdout.map(|stream| {
        let tx = tx.clone();
        thread::spawn(move || forward_stream(stream, tx))
    });
    let stderr_handle = stderr.map(|stream| {
        let tx = tx.clone();
        thread::spawn(move || forward_stream(stream, tx))
    });
    // Receiver ends once every reader thread has dropped its sender.
    drop(tx);

    let mut transcript = String::new();
    for line in rx {
        sink.append_line(&line);
        transcript.push_str(&line);
        transcript.push('\n');
    }

    if let Some(handle) = stdout_handle {
        let _ = handle.join();
    }
    if let Some(handle) = stderr_handle {
        let _ = handle.join();
    }

    transcript
}

fn forward_stream<R: Read>(stream: R, tx: Sender<String>) {
    let mut reader = BufReader::new(stream);
    let mut buffer = Vec::new();

    loop {
        buffer.clear();
        match reader.read_until(b'\n', &mut buffer) {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buffer);
                let line = line.trim_end_matches(&['\n', '\r'][..]);
                if tx.send(line.to_string()).is_err() {
                    break;
                }
            }
            Err(e) => {
                log::warn!("Stopped reading child output: {}", e);
                break;
            }
        }
    }
}
