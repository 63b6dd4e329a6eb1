//! Revision agent built on an LLM client

pub mod prompt;
pub mod tutor;

pub use prompt::{
    EXPLAIN_SYSTEM_PROMPT, EXPLAIN_USER_TEMPLATE, QCM_SYSTEM_PROMPT, QCM_USER_TEMPLATE,
};
pub use tutor::{Operation, TutorAgent};
