//! sommelier-gateway: wine and food-pairing advice over HTTP, backed by an LLM provider.
//! Hexagonal layout: domain ← usecases ← ports → adapters.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
