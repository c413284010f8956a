//! Core Kernel - Foundational types and utilities for the billing system
//!
//! This crate provides the fundamental building blocks used across the domain
//! and interface crates:
//! - Money type for rupee amounts with precise decimal arithmetic
//! - Amount-in-words conversion using the Indian numbering system

pub mod money;
pub mod words;

pub use money::{Money, MoneyError};
pub use words::{convert_amount_to_words, rupees_in_words, WordsError};
