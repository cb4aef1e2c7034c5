//! Paralog Bot - Conversational WhatsApp data collection.
//!
//! This crate collects parameter-log records from end users over WhatsApp:
//! a scripted five-field dialogue (value, unit, date, evidence URL, evidence
//! name) validated inline, persisted to PostgreSQL, and re-requested on a
//! 24-hour cycle.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
