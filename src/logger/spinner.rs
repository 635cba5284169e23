use std::io::{IsTerminal, Write};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use crate::config::constants::SPINNER_FRAME_MS;
use crate::errors::ErrorHandler;

/// Loading indicator on stderr. Draws frames only when stderr is a terminal;
/// otherwise the final success/failure line is all that is printed.
pub struct Spinner {
    message: String,
    animation_chars: Vec<&'static str>,
    animate: bool,
    stop_sender: Option<mpsc::UnboundedSender<()>>,
    task_handle: Option<JoinHandle<()>>,
}

impl Spinner {
    pub fn new(message: &str) -> Self {
        let animation_chars = vec!["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

        Self {
            message: message.to_string(),
            animation_chars,
            animate: std::io::stderr().is_terminal(),
            stop_sender: None,
            task_handle: None,
        }
    }

    pub fn start(&mut self) {
        if !self.animate || self.task_handle.is_some() {
            return;
        }

        let (stop_tx, mut stop_rx) = mpsc::unbounded_channel();
        let message = self.message.clone();
        let animation_chars = self.animation_chars.clone();

        let handle = tokio::spawn(async move {
            let mut frame = 0;
            let mut interval = tokio::time::interval(tokio::time::Duration::from_millis(SPINNER_FRAME_MS));

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        eprint!("\r{} {} ", animation_chars[frame], message);
                        let _ = std::io::stderr().flush();
                        frame = (frame + 1) % animation_chars.len();
                    }
                    _ = stop_rx.recv() => {
                        break;
                    }
                }
            }
        });

        self.stop_sender = Some(stop_tx);
        self.task_handle = Some(handle);
    }

    async fn halt(&mut self) {
        if let Some(sender) = self.stop_sender.take() {
            let _ = sender.send(());
        }

        if let Some(handle) = self.task_handle.take() {
            let _ = handle.await;
        }

        if self.animate {
            eprint!("\r\x1b[K");
        }
    }

    pub async fn succeed(&mut self, final_message: &str) {
        self.halt().await;
        eprintln!("✅ {}", final_message);
        let _ = std::io::stderr().flush();
    }

    pub async fn fail(&mut self, error_message: &str) {
        self.halt().await;
        eprintln!("{}", ErrorHandler::error_color(&format!("❌ {}", error_message)));
        let _ = std::io::stderr().flush();
    }
}
