//! Application lifecycle management.
//!
//! This module contains the core lifecycle methods for the `App`:
//! - `new()` - Creates a new application instance
//! - `run()` - Main event loop
//! - The request dispatcher task
//! - Startup loads

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::Instant;
use tokio::sync::mpsc;

use crate::client::NodeClient;
use crate::constants::TICK_RATE;
use crate::tui::Tui;
use crate::ui;

use super::{ApiRequest, App, AppConfig, AppMessage, DataState, NodeStore, UiState};

// ============================================================================
// Lifecycle Methods
// ============================================================================

impl App {
    /// Creates a new App instance for the given configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = NodeClient::new(config.api_base_url.clone(), config.http_config())?;
        Ok(Self::with_client(config, client))
    }

    pub(crate) fn with_client(config: AppConfig, client: NodeClient) -> Self {
        let (request_tx, request_rx) = mpsc::unbounded_channel();
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            store: NodeStore::new(),
            data: DataState::new(),
            ui: UiState::new(),
            config,
            exit: false,
            request_tx,
            request_rx: Some(request_rx),
            message_tx,
            message_rx,
            client,
        }
    }

    /// Runs the main application loop.
    ///
    /// # Errors
    /// Returns an error if the terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        self.start_background_tasks();
        self.load_node_info();
        self.refresh_transactions();

        let mut last_tick = Instant::now();
        terminal.draw(|frame| ui::render(self, frame))?;

        while !self.exit {
            let had_messages = self.process_messages();

            let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
            let mut needs_draw = had_messages;

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                        needs_draw = true;
                    }
                    Event::Resize(_, _) => needs_draw = true,
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                if self.ui.tick_toast() {
                    needs_draw = true;
                }
                last_tick = Instant::now();
            }

            if needs_draw || self.ui.toast.is_some() {
                terminal.draw(|frame| ui::render(self, frame))?;
            }
        }

        tracing::info!("Exiting");
        Ok(())
    }

    // ========================================================================
    // Requests
    // ========================================================================

    /// Hands a request to the dispatcher.
    pub(crate) fn request(&self, request: ApiRequest) {
        tracing::debug!("Queueing {request:?}");
        // Receiver may be dropped during shutdown - safe to ignore
        let _ = self.request_tx.send(request);
    }

    /// Issues the identity and peer loads. Called once at startup.
    pub(crate) fn load_node_info(&self) {
        self.request(ApiRequest::Identity);
        self.request(ApiRequest::Peers);
    }

    /// Reloads the displayed transaction listing.
    pub(crate) fn refresh_transactions(&self) {
        self.request(ApiRequest::Transactions(self.data.scope));
    }

    // ========================================================================
    // Background Tasks
    // ========================================================================

    pub(super) fn start_background_tasks(&mut self) {
        let Some(request_rx) = self.request_rx.take() else {
            return;
        };
        let message_tx = self.message_tx.clone();
        let client = self.client.clone();

        tokio::spawn(async move {
            Self::dispatch_requests(request_rx, message_tx, client).await;
        });
    }

    async fn dispatch_requests(
        mut request_rx: mpsc::UnboundedReceiver<ApiRequest>,
        message_tx: mpsc::UnboundedSender<AppMessage>,
        client: NodeClient,
    ) {
        while let Some(request) = request_rx.recv().await {
            let client = client.clone();
            let message_tx = message_tx.clone();
            tokio::spawn(async move {
                if let Some(message) = Self::execute_request(&client, request).await {
                    // Receiver may be dropped during shutdown - safe to ignore
                    let _ = message_tx.send(message);
                }
            });
        }
    }

    /// Runs one request to completion.
    ///
    /// Load failures are logged and yield no message; creation requests
    /// always yield one.
    async fn execute_request(client: &NodeClient, request: ApiRequest) -> Option<AppMessage> {
        match request {
            ApiRequest::Identity => match client.get_me().await {
                Ok(identity) => Some(AppMessage::IdentityLoaded(identity)),
                Err(e) => {
                    tracing::warn!("Loading node identity failed: {e}");
                    None
                }
            },
            ApiRequest::Peers => match client.get_peers().await {
                Ok(peers) => Some(AppMessage::PeersLoaded(peers)),
                Err(e) => {
                    tracing::warn!("Loading peers failed: {e}");
                    None
                }
            },
            ApiRequest::Transactions(scope) => match client.get_transactions(scope).await {
                Ok(payloads) => Some(AppMessage::TransactionsLoaded(scope, payloads)),
                Err(e) => {
                    tracing::warn!("Loading {} failed: {e}", scope.endpoint());
                    None
                }
            },
            ApiRequest::Create(create) => {
                let message = client.submit(&create).await;
                tracing::info!(
                    "{} finished (status {:?}, success {})",
                    create.endpoint(),
                    message.status,
                    message.is_success()
                );
                Some(AppMessage::CreationCompleted(message))
            }
        }
    }
}
