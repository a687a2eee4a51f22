//! Chat operations and the asynchronous answer wait loop.

use vectorator_data::{Chat, ChatMessage, NewChat, ProcessingState, RenameChat, TenantScope};

use super::{expect_success, VectoratorClient};
use crate::error::{Error, Result};
use crate::route::Route;
use crate::TRACING_TARGET_CHAT;

/// Display name given to chats created on the caller's behalf.
const DEFAULT_CHAT_NAME: &str = "new chat";

impl VectoratorClient {
    /// Lists the project's chats, without message histories.
    pub async fn list_chats(&self, tenant: &TenantScope, project: &str) -> Result<Vec<Chat>> {
        let response = self
            .request(&Route::ChatList { tenant, project })?
            .send()
            .await?;

        Ok(expect_success(response).await?.json().await?)
    }

    /// Creates a chat, optionally seeded with initial messages.
    ///
    /// A seeded user message triggers asynchronous answering; the returned
    /// chat is then typically not yet `DONE`. An empty chat starts `DONE`.
    pub async fn create_chat(
        &self,
        tenant: &TenantScope,
        project: &str,
        name: &str,
        messages: Vec<ChatMessage>,
    ) -> Result<Chat> {
        tracing::debug!(
            target: TRACING_TARGET_CHAT,
            tenant = %tenant,
            project,
            name,
            seeded_messages = messages.len(),
            "Creating chat"
        );

        let payload = NewChat {
            name: name.to_string(),
            tenant_scope: tenant.clone(),
            project: project.to_string(),
            messages,
        };

        let response = self
            .request(&Route::ChatCreate { tenant, project })?
            .json(&payload)
            .send()
            .await?;

        Ok(expect_success(response).await?.json().await?)
    }

    /// Fetches a chat with its full message history.
    ///
    /// Always a fresh fetch; the client never serves a cached chat.
    pub async fn get_chat(&self, tenant: &TenantScope, project: &str, id: i64) -> Result<Chat> {
        let response = self
            .request(&Route::ChatGet {
                tenant,
                project,
                id,
            })?
            .send()
            .await?;

        Ok(expect_success(response).await?.json().await?)
    }

    /// Fetches only a chat's processing state.
    ///
    /// Much lighter than [`get_chat`](Self::get_chat); preferred inside
    /// wait loops.
    pub async fn chat_status(
        &self,
        tenant: &TenantScope,
        project: &str,
        id: i64,
    ) -> Result<ProcessingState> {
        let response = self
            .request(&Route::ChatStatus {
                tenant,
                project,
                id,
            })?
            .send()
            .await?;

        Ok(expect_success(response).await?.json().await?)
    }

    /// Appends a user message, triggering asynchronous answering.
    ///
    /// The returned chat reflects the state at append time and is usually
    /// not yet `DONE`.
    pub async fn add_message(
        &self,
        tenant: &TenantScope,
        project: &str,
        id: i64,
        message: ChatMessage,
    ) -> Result<Chat> {
        tracing::debug!(
            target: TRACING_TARGET_CHAT,
            tenant = %tenant,
            project,
            id,
            "Appending chat message"
        );

        let response = self
            .request(&Route::ChatMessageAdd {
                tenant,
                project,
                id,
            })?
            .json(&message)
            .send()
            .await?;

        Ok(expect_success(response).await?.json().await?)
    }

    /// Renames a chat.
    pub async fn rename_chat(
        &self,
        tenant: &TenantScope,
        project: &str,
        id: i64,
        name: &str,
    ) -> Result<Chat> {
        let payload = RenameChat {
            name: name.to_string(),
        };

        let response = self
            .request(&Route::ChatRename {
                tenant,
                project,
                id,
            })?
            .json(&payload)
            .send()
            .await?;

        Ok(expect_success(response).await?.json().await?)
    }

    /// Deletes a chat.
    pub async fn delete_chat(&self, tenant: &TenantScope, project: &str, id: i64) -> Result<()> {
        tracing::debug!(
            target: TRACING_TARGET_CHAT,
            tenant = %tenant,
            project,
            id,
            "Deleting chat"
        );

        let response = self
            .request(&Route::ChatDelete {
                tenant,
                project,
                id,
            })?
            .send()
            .await?;

        expect_success(response).await?;
        Ok(())
    }

    /// Asks a question and blocks until the answer is available.
    ///
    /// Appends the question to the chat identified by `chat_id`, or creates
    /// a fresh chat seeded with it. Then polls the chat status up to the
    /// configured attempt budget, sleeping the configured interval between
    /// polls, and finishes with one full fetch of the chat.
    ///
    /// Dropping the returned future between polls cancels the wait; the
    /// backend keeps answering regardless.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Timeout`] if the final fetch does not observe the
    /// `DONE` state, whether the chat failed or simply was not finished
    /// within the budget.
    pub async fn ask_and_wait(
        &self,
        tenant: &TenantScope,
        project: &str,
        question: &str,
        chat_id: Option<i64>,
    ) -> Result<Chat> {
        let question = ChatMessage::user(question);
        let chat = match chat_id {
            Some(id) => self.add_message(tenant, project, id, question).await?,
            None => {
                self.create_chat(tenant, project, DEFAULT_CHAT_NAME, vec![question])
                    .await?
            }
        };

        let id = chat.id;
        let attempts = self.config().poll_attempts;
        let interval = self.config().poll_interval;

        for attempt in 1..=attempts {
            let state = self.chat_status(tenant, project, id).await?;

            tracing::debug!(
                target: TRACING_TARGET_CHAT,
                id,
                attempt,
                state = %state,
                "Polled chat status"
            );

            if state.is_done() {
                break;
            }
            if attempt < attempts {
                tokio::time::sleep(interval).await;
            }
        }

        let chat = self.get_chat(tenant, project, id).await?;
        if !chat.processing_state.is_done() {
            tracing::warn!(
                target: TRACING_TARGET_CHAT,
                id,
                attempts,
                state = %chat.processing_state,
                "Chat did not reach DONE within the polling budget"
            );
            return Err(Error::timeout(id, attempts));
        }

        Ok(chat)
    }
}
