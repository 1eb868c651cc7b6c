//! Server-side API backend and business logic.
//!
//! This module contains the complete backend for the student records API. The
//! backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Creation defaults, update semantics and statistics
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Tracing, database connection and CORS setup
//! - **Router** (`router`) - Axum route configuration
//! - **Documentation** (`doc`) - OpenAPI document served through Swagger UI
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to the student controller
//! 2. **Controller** extracts parameters, converts DTOs to params, calls service
//! 3. **Service** applies business rules and calls the repository
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Controller** converts domain models to DTOs and returns the HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod doc;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
