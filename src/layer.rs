//! # Layer Trait
//!
//! Tower-style middleware composition for filesystem backends.
//!
//! ## Overview
//!
//! The [`Layer`] trait enables composable middleware that wraps backends to
//! add functionality like caching, retrying, rate limiting, or logging,
//! without the backend itself needing to know about it.
//!
//! ## How It Works
//!
//! ```text
//! Backend ──▶ Layer::layer() ──▶ Wrapped Backend
//! ```
//!
//! Each middleware provides:
//! 1. A wrapper struct that implements the six [`FileSystem`] component
//!    traits by delegating to (and augmenting) an inner backend.
//! 2. A `Layer` implementation that constructs the wrapper.
//!
//! ## Example
//!
//! The `Layer` pattern separates middleware configuration from wrapping:
//!
//! ```rust
//! use vfs_contract::Layer;
//!
//! struct RetryConfig {
//!     max_attempts: u32,
//! }
//!
//! struct RetryLayer {
//!     config: RetryConfig,
//! }
//!
//! struct RetryMiddleware<B> {
//!     inner: B,
//!     config: RetryConfig,
//! }
//!
//! impl<B> Layer<B> for RetryLayer {
//!     type Backend = RetryMiddleware<B>;
//!
//!     fn layer(self, backend: B) -> Self::Backend {
//!         RetryMiddleware {
//!             inner: backend,
//!             config: self.config,
//!         }
//!     }
//! }
//! ```
//!
//! ## Fluent Composition
//!
//! Use [`LayerExt`] for fluent chaining:
//!
//! ```rust
//! use vfs_contract::LayerExt;
//!
//! // Hypothetical usage (requires concrete backends):
//! // let backend = MemoryFileSystem::new()
//! //     .layer(RetryLayer::new(3))
//! //     .layer(TracingLayer::new());
//! ```

use crate::FileSystem;

/// A layer that wraps a backend to add functionality.
///
/// Inspired by Tower's `Layer` trait, this enables composable middleware.
/// Each middleware provides a corresponding `Layer` implementation.
///
/// # Type Parameters
///
/// - `B`: The backend type being wrapped (must implement [`FileSystem`]).
///
/// # Design Notes
///
/// - `layer(self, backend)` consumes both the layer and the backend.
/// - The resulting `Backend` type must also implement `FileSystem`.
///
/// # Example
///
/// ```rust
/// use vfs_contract::Layer;
///
/// struct LoggingMiddleware<B> {
///     inner: B,
///     prefix: String,
/// }
///
/// struct LoggingLayer {
///     prefix: String,
/// }
///
/// impl<B> Layer<B> for LoggingLayer {
///     type Backend = LoggingMiddleware<B>;
///
///     fn layer(self, backend: B) -> Self::Backend {
///         LoggingMiddleware {
///             inner: backend,
///             prefix: self.prefix,
///         }
///     }
/// }
/// ```
pub trait Layer<B> {
    /// The resulting backend type after applying this layer.
    ///
    /// For middleware that preserves filesystem behavior, this type
    /// should implement the same component traits as the input backend
    /// `B`.
    type Backend;

    /// Wrap the given backend with this layer's functionality.
    ///
    /// Consumes both the layer configuration and the backend, returning a
    /// new wrapped backend.
    fn layer(self, backend: B) -> Self::Backend;
}

/// Extension trait for fluent layer composition.
///
/// Provides the `.layer()` method on any [`FileSystem`] backend for
/// ergonomic chaining.
///
/// # Example
///
/// ```rust
/// use vfs_contract::{FileSystem, LayerExt, Layer};
///
/// fn compose_backend<B: FileSystem, L: Layer<B>>(backend: B, layer: L) -> L::Backend {
///     backend.layer(layer)
/// }
/// ```
pub trait LayerExt: FileSystem + Sized {
    /// Apply a layer to this backend.
    ///
    /// Returns the wrapped backend with the layer's functionality added.
    fn layer<L: Layer<Self>>(self, layer: L) -> L::Backend {
        layer.layer(self)
    }
}

impl<B: FileSystem> LayerExt for B {}
