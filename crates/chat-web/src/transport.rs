//! HTTP chat hook
//!
//! `ChatHook` implementation that posts the conversation to a chat endpoint
//! and streams the assistant's reply back as plain text.

use std::fmt::Display;
use std::sync::Mutex;

use chat_core::{
    ChatError, ChatHook, ChatRequest, ChatStatus, ChatStore, Message, Result, TextStreamDecoder,
    Turn, UserInput,
};
use futures::future::{AbortHandle, abortable};
use futures::{Stream, StreamExt};
use leptos::prelude::*;
use leptos::task::spawn_local;
use reqwest::Url;

/// Chat hook speaking the text-stream transport
///
/// State lives in a signal, so every getter is a tracked read. One request
/// runs at a time; `stop` (or a newer `send_message`) aborts it, which drops
/// the underlying fetch.
pub struct HttpChatHook {
    endpoint: String,
    state: RwSignal<ChatStore>,
    in_flight: Mutex<Option<AbortHandle>>,
}

impl HttpChatHook {
    /// Create a hook posting to `endpoint`
    ///
    /// Must be called inside a reactive owner (a component or root).
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            state: RwSignal::new(ChatStore::new()),
            in_flight: Mutex::new(None),
        }
    }

    fn abort_in_flight(&self) {
        let handle = match self.in_flight.lock() {
            Ok(mut slot) => slot.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        if let Some(handle) = handle {
            handle.abort();
        }
    }

    fn track(&self, handle: AbortHandle) {
        match self.in_flight.lock() {
            Ok(mut slot) => *slot = Some(handle),
            Err(poisoned) => *poisoned.into_inner() = Some(handle),
        }
    }
}

impl ChatHook for HttpChatHook {
    fn messages(&self) -> Vec<Message> {
        self.state.with(|store| store.messages().to_vec())
    }

    fn status(&self) -> ChatStatus {
        self.state.with(ChatStore::status)
    }

    fn error(&self) -> Option<ChatError> {
        self.state.with(|store| store.error().cloned())
    }

    fn send_message(&self, input: UserInput) {
        self.abort_in_flight();

        let Some((turn, request)) = self.state.try_update(|store| store.begin_turn(input)) else {
            tracing::warn!("chat state disposed; dropping message");
            return;
        };

        let state = self.state;
        let endpoint = self.endpoint.clone();
        let (task, handle) = abortable(async move {
            match stream_reply(&endpoint, &request, turn, state).await {
                Ok(()) => state.update(|store| {
                    store.finish(turn);
                }),
                Err(err) => state.update(|store| {
                    store.fail(turn, err);
                }),
            }
        });
        self.track(handle);

        spawn_local(async move {
            if task.await.is_err() {
                tracing::debug!("chat request aborted");
            }
        });
    }

    fn stop(&self) {
        self.abort_in_flight();
        self.state.update(|store| {
            store.stop();
        });
    }
}

/// Origin of the page hosting the app, if running in a browser window
fn page_origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}

/// Resolve the configured endpoint to an absolute URL
///
/// Absolute URLs are used as-is; paths such as `/api/chat` are joined onto
/// `origin`.
pub fn endpoint_url(origin: Option<&str>, api_url: &str) -> Result<Url> {
    if let Ok(url) = Url::parse(api_url) {
        return Ok(url);
    }
    let origin = origin.ok_or_else(|| {
        ChatError::Config(format!("cannot resolve {api_url:?} without a page origin"))
    })?;
    Url::parse(origin)
        .and_then(|base| base.join(api_url))
        .map_err(|e| ChatError::Config(format!("invalid chat endpoint {api_url:?}: {e}")))
}

/// Turn a non-success response into an API error
///
/// A body that cannot be read is logged and treated as empty.
fn api_error<E: Display>(status: u16, body: std::result::Result<String, E>) -> ChatError {
    let body = body.unwrap_or_else(|err| {
        tracing::warn!(status, error = %err, "failed to read error response body");
        String::new()
    });
    ChatError::from_response(status, &body)
}

/// Decode a streamed text body, handing every delta to `apply`
///
/// Returns the number of bytes received.
pub async fn read_text_stream<S, B, E>(body: S, mut apply: impl FnMut(&str)) -> Result<usize>
where
    S: Stream<Item = std::result::Result<B, E>>,
    B: AsRef<[u8]>,
    E: Display,
{
    let mut body = std::pin::pin!(body);
    let mut decoder = TextStreamDecoder::new();
    let mut received = 0usize;

    while let Some(chunk) = body.next().await {
        let chunk = chunk.map_err(|e| ChatError::Transport(e.to_string()))?;
        let bytes = chunk.as_ref();
        received += bytes.len();
        let delta = decoder.push(bytes)?;
        apply(&delta);
    }
    decoder.finish()?;

    Ok(received)
}

/// Post the request and feed the streamed body into the store
async fn stream_reply(
    endpoint: &str,
    request: &ChatRequest,
    turn: Turn,
    state: RwSignal<ChatStore>,
) -> Result<()> {
    let url = endpoint_url(page_origin().as_deref(), endpoint)?;
    tracing::info!(
        url = %url,
        messages = request.messages.len(),
        "sending chat request"
    );

    let response = reqwest::Client::new()
        .post(url)
        .json(request)
        .send()
        .await
        .map_err(|e| ChatError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(api_error(status.as_u16(), response.text().await));
    }

    let received = read_text_stream(response.bytes_stream(), |delta| {
        state.update(|store| {
            store.apply_delta(turn, delta);
        });
    })
    .await?;

    tracing::debug!(bytes = received, "chat response complete");
    Ok(())
}
