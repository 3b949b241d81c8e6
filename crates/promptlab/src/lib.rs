//! PromptLab Domain Library
//!
//! Core domain types and interfaces for the PromptLab prompt catalog.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Prompt, Collection)
//!   - `value_objects/`: Immutable value types (Patch)
//!   - `template/`: Placeholder parsing and rendering
//!   - `search`: Conjunctive prompt filtering with deterministic ordering
//!   - `errors`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use promptlab::domain::{Prompt, Collection, Template};
//! use promptlab::ports::{PromptRepository, CollectionRepository};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    filter_and_sort, Collection, DomainError, Patch, Prompt, PromptFilter, Template,
};
pub use ports::{CollectionRepository, PromptRepository};
