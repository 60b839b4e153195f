//! Daily Reflect - Guided Daily-Reflection Journaling Engine
//!
//! This crate implements the scheduling and state engine behind a
//! topic-based journaling practice: a 7-day prompt cycle per topic,
//! one persisted record per calendar day, and lightweight insights.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
