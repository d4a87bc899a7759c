//! Follow-up chat about an analyzed chart.
//!
//! Unlike analysis, chat never fails: errors are logged and replaced by a
//! fixed apology.

use chartxo_core::{ChatTurn, ImagePayload};

use crate::cancel::CancelToken;
use crate::prompt::{CHAT_EMPTY_REPLY, CHAT_ERROR_REPLY, chat_prompt};
use crate::transport::GenerativeTransport;
use crate::wire::GenerateContentRequest;

pub struct ChatClient<T> {
    transport: T,
}

impl<T: GenerativeTransport> ChatClient<T> {
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Reply to `message` given the prior `transcript`. Always returns text.
    pub async fn reply(&self, image: &ImagePayload, message: &str, transcript: &[ChatTurn]) -> String {
        let request = GenerateContentRequest::image_and_text(image, chat_prompt(message, transcript));
        match self.transport.generate(&request).await {
            Ok(text) if text.trim().is_empty() => CHAT_EMPTY_REPLY.to_string(),
            Ok(text) => text,
            Err(e) => {
                tracing::error!(error = %e, "chat request failed");
                CHAT_ERROR_REPLY.to_string()
            }
        }
    }

    /// Like [`Self::reply`]; `None` when `token` fires first.
    pub async fn reply_cancellable(
        &self,
        image: &ImagePayload,
        message: &str,
        transcript: &[ChatTurn],
        token: &CancelToken,
    ) -> Option<String> {
        if token.is_cancelled() {
            return None;
        }
        tokio::select! {
            biased;
            () = token.cancelled() => None,
            reply = self.reply(image, message, transcript) => Some(reply),
        }
    }
}

/// A conversation about one chart image. Owns the transcript.
#[derive(Debug, Clone)]
pub struct ChatSession {
    image: ImagePayload,
    transcript: Vec<ChatTurn>,
}

impl ChatSession {
    #[must_use]
    pub const fn new(image: ImagePayload) -> Self {
        Self {
            image,
            transcript: Vec::new(),
        }
    }

    #[must_use]
    pub fn transcript(&self) -> &[ChatTurn] {
        &self.transcript
    }

    /// Send a message. The client sees only the turns before this one; both
    /// the message and the reply (fallbacks included) are then recorded.
    pub async fn send<T: GenerativeTransport>(&mut self, client: &ChatClient<T>, message: &str) -> String {
        let reply = client.reply(&self.image, message, &self.transcript).await;
        self.transcript.push(ChatTurn::user(message));
        self.transcript.push(ChatTurn::assistant(reply.clone()));
        reply
    }

    /// Like [`Self::send`]. A cancelled send records the user turn only.
    pub async fn send_cancellable<T: GenerativeTransport>(
        &mut self,
        client: &ChatClient<T>,
        message: &str,
        token: &CancelToken,
    ) -> Option<String> {
        let reply = client
            .reply_cancellable(&self.image, message, &self.transcript, token)
            .await;
        self.transcript.push(ChatTurn::user(message));
        if let Some(reply) = &reply {
            self.transcript.push(ChatTurn::assistant(reply.clone()));
        }
        reply
    }
}
