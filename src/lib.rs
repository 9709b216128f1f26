//! Storefront Library
//!
//! This library provides the core functionality for a single-page storefront:
//! a static product catalog with category filtering, per-session shopping
//! carts, a product detail selection state, and MCP (Model Context Protocol)
//! support for driving the storefront from assistant tool calls.

// Domain modules
pub mod cart;
pub mod catalog;
pub mod mcp;
pub mod selection;

// Infrastructure
pub mod config;
pub mod router;
