//! AI operations for comfort responses.
//!
//! This module provides integration with an OpenAI-compatible chat completion
//! API and the prompts sent to it.
//!
//! # Module Structure
//!
//! - `chat`: HTTP client for the chat completion API
//! - `prompts`: Prompt builders and the canned human friend response
//!
//! # Example
//!
//! ```no_run
//! use moodbuddy::ai::{comfort_prompt, ChatClient};
//! use moodbuddy::sentiment::classify;
//! use std::time::Duration;
//!
//! let client = ChatClient::new("https://api.groq.com/openai/v1", "key", Duration::from_secs(30))?;
//! let mood = "I feel a bit low";
//! let reply = client.chat("llama3-8b-8192", &comfort_prompt(mood, &classify(mood)))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod chat;
pub mod prompts;

// Re-export commonly used types
pub use chat::{ChatClient, Message};
pub use prompts::{comfort_prompt, human_friend_response};
