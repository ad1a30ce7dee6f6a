use anyhow::{Context, Result};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use super::BrowserConfig;
use super::application::{
    catalog_client::CatalogApi, debouncer::Debouncer, search_service::SearchService,
};
use super::constants::{DOUBLE_CTRL_C_TIMEOUT_SECS, EXIT_PROMPT, MESSAGE_CLEAR_DELAY_MS};
use super::domain::models::{SearchOutcome, SearchResponse, WorkerRequest, WorkerResponse};
use super::ui::{app_state::AppState, app_state::ViewSnapshot, commands::Command, events::Message};

/// Everything the event loop drives, minus the terminal: the state machine,
/// the debounce timer, the message timer and the worker thread.
pub struct Controller {
    state: AppState,
    debouncer: Debouncer<String>,
    worker_sender: Sender<WorkerRequest>,
    worker_receiver: Receiver<WorkerResponse>,
    message_deadline: Option<Instant>,
    last_ctrl_c_press: Option<Instant>,
    should_quit: bool,
}

impl Controller {
    pub fn new(config: &BrowserConfig, api: Arc<dyn CatalogApi>) -> Self {
        let service = SearchService::new(api);
        let (worker_sender, worker_receiver) = Self::start_worker(service);

        Self {
            state: AppState::new(config.kind, &config.base_url, config.page_size),
            debouncer: Debouncer::new(config.debounce),
            worker_sender,
            worker_receiver,
            message_deadline: None,
            last_ctrl_c_press: None,
            should_quit: false,
        }
    }

    fn start_worker(service: SearchService) -> (Sender<WorkerRequest>, Receiver<WorkerResponse>) {
        let (request_tx, request_rx) = mpsc::channel::<WorkerRequest>();
        let (response_tx, response_rx) = mpsc::channel::<WorkerResponse>();

        thread::spawn(move || {
            while let Ok(request) = request_rx.recv() {
                let response = match request {
                    WorkerRequest::LoadCatalog => match service.load_catalog() {
                        Ok(items) => WorkerResponse::CatalogLoaded(items),
                        Err(e) => WorkerResponse::CatalogLoadFailed(format!("{e:#}")),
                    },
                    WorkerRequest::Search(request) => {
                        WorkerResponse::Search(service.search(request))
                    }
                };
                if response_tx.send(response).is_err() {
                    break;
                }
            }
            tracing::debug!("worker thread exiting");
        });

        (request_tx, response_rx)
    }

    /// Kicks off the catalog load.
    pub fn start(&mut self, now: Instant) {
        let command = self.state.start();
        self.execute_command(command, now);
    }

    pub fn on_query_change(&mut self, raw_query: String) {
        self.on_query_change_at(raw_query, Instant::now());
    }

    pub fn on_query_change_at(&mut self, raw_query: String, now: Instant) {
        self.handle_message_at(Message::QueryChanged(raw_query), now);
    }

    pub fn handle_message(&mut self, message: Message) {
        self.handle_message_at(message, Instant::now());
    }

    pub fn handle_message_at(&mut self, message: Message, now: Instant) {
        let command = self.state.update(message);
        self.execute_command(command, now);
    }

    /// One pass of the loop's timers: drains worker responses, fires the
    /// debounced search and clears expired messages.
    pub fn tick(&mut self, now: Instant) {
        while let Ok(response) = self.worker_receiver.try_recv() {
            self.apply_worker_response(response, now);
        }

        if let Some(query) = self.debouncer.poll(now) {
            self.handle_message_at(Message::SearchTriggered(query), now);
        }

        if self.message_deadline.is_some_and(|deadline| now >= deadline) {
            self.message_deadline = None;
            self.handle_message_at(Message::ClearStatus, now);
        }
    }

    /// Returns true when this press should end the session.
    pub fn handle_ctrl_c(&mut self, now: Instant) -> bool {
        let timeout = Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS);
        if let Some(last_press) = self.last_ctrl_c_press {
            if now.duration_since(last_press) < timeout {
                self.should_quit = true;
                return true;
            }
        }
        self.last_ctrl_c_press = Some(now);
        self.handle_message_at(Message::SetStatus(EXIT_PROMPT.to_string()), now);
        self.execute_command(Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS), now);
        false
    }

    fn apply_worker_response(&mut self, response: WorkerResponse, now: Instant) {
        let message = match response {
            WorkerResponse::CatalogLoaded(items) => Message::CatalogLoaded(items),
            WorkerResponse::CatalogLoadFailed(error) => Message::CatalogLoadFailed(error),
            WorkerResponse::Search(response) => Message::SearchFinished(response),
        };
        self.handle_message_at(message, now);
    }

    fn execute_command(&mut self, command: Command, now: Instant) {
        match command {
            Command::None => {}
            Command::LoadCatalog => {
                if self.worker_sender.send(WorkerRequest::LoadCatalog).is_err() {
                    self.handle_message_at(
                        Message::CatalogLoadFailed("worker thread is gone".to_string()),
                        now,
                    );
                }
            }
            Command::ScheduleSearch(query) => {
                self.debouncer.schedule(query, now);
            }
            Command::CancelScheduledSearch => {
                self.debouncer.cancel();
            }
            Command::ExecuteSearch(request) => {
                let id = request.id;
                if self
                    .worker_sender
                    .send(WorkerRequest::Search(request))
                    .is_err()
                {
                    let response = SearchResponse {
                        id,
                        outcome: SearchOutcome::Failed("worker thread is gone".to_string()),
                    };
                    self.handle_message_at(Message::SearchFinished(response), now);
                }
            }
            Command::CopyToClipboard(text) => {
                let message = match copy_to_clipboard(&text) {
                    Ok(()) => format!("✓ Copied: {text}"),
                    Err(e) => {
                        tracing::warn!("clipboard copy failed: {e:#}");
                        format!("Failed to copy: {e}")
                    }
                };
                self.handle_message_at(Message::SetStatus(message), now);
                self.execute_command(Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS), now);
            }
            Command::ScheduleClearMessage(delay) => {
                self.message_deadline = Some(now + Duration::from_millis(delay));
            }
            Command::Quit => {
                self.should_quit = true;
            }
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        self.state.snapshot()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn search_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Blocks until the worker answers once, then applies the response.
    #[cfg(test)]
    pub(crate) fn wait_for_worker(&mut self, timeout: Duration) -> bool {
        match self.worker_receiver.recv_timeout(timeout) {
            Ok(response) => {
                self.apply_worker_response(response, Instant::now());
                true
            }
            Err(_) => false,
        }
    }
}

fn clipboard_command() -> Result<std::process::Command> {
    use std::process::Command;

    #[cfg(target_os = "macos")]
    {
        Ok(Command::new("pbcopy"))
    }

    #[cfg(target_os = "linux")]
    {
        let mut command = Command::new("xclip");
        command.args(["-selection", "clipboard"]);
        Ok(command)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        Err(anyhow::anyhow!("Clipboard not supported on this platform"))
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use std::io::Write;
    use std::process::Stdio;

    let mut command = clipboard_command()?;
    let program = command.get_program().to_string_lossy().into_owned();
    let mut child = command
        .stdin(Stdio::piped())
        .spawn()
        .with_context(|| format!("Failed to spawn {program}"))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .with_context(|| format!("Failed to write to {program}"))?;
    }

    child
        .wait()
        .with_context(|| format!("Failed to wait for {program}"))?;
    Ok(())
}
