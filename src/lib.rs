//! VibeSync wellness core
//!
//! Mood classification, static wellness recommendations and gamification
//! (vibe points, levels, badges) behind a single in-memory state container.
//!
//! ⚠️ DISCLAIMER:
//! This is NOT a medical or diagnostic tool.

pub mod analyzer;
pub mod catalog;
pub mod chat;
pub mod community;
pub mod config;
pub mod error;
pub mod gamification;
pub mod models;
pub mod recommendation;
pub mod simulation;
pub mod state;
pub mod storage;
pub mod validation;
