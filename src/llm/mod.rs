//! LLM module for therapy-summary
//!
//! Builds summary prompts and sends them to a chat-completion provider.

mod client;
mod openai;
mod prompts;

pub use client::{build_provider, request_completion, ChatMessage, CompletionProvider, Role};
pub use openai::OpenAiClient;
pub use prompts::{build_summary_messages, build_user_prompt, SYSTEM_PROMPT};
