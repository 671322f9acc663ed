//! Miraim Onboarding - Conversational Sign-up and Login Flow Engine
//!
//! This crate implements the chat-style onboarding wizard used by the
//! Miraim matchmaking service: a fixed per-mode step sequence, per-step
//! input validation, and transcript management for the conversation UI.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
