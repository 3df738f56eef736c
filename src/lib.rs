//! # Campus Orders
//!
//! > **Order placement and fulfillment for campus cafeterias, built from resource actors.**
//!
//! Students and faculty place orders at a cafeteria; the cafeteria's owner prepares
//! them and hands them over against a six-digit pickup code; administrators see
//! everything. This crate implements that workflow: building an order from a cart
//! with an exact total, assigning a collision-free pickup code, moving orders
//! through their lifecycle, and checking every read and change against the
//! caller's relationship to the order.
//!
//! ## Architecture Notes
//!
//! ### 1. Resource Actors
//! Every stored resource (users, cafeterias, menu items, orders) is owned by a
//! generic [`ResourceActor`](framework::ResourceActor) running in its own Tokio task.
//! Requests to one actor are processed one at a time, so an order insert and its
//! pickup-code uniqueness check happen in a single step.
//!
//! ### 2. Type-Safe Error Handling
//! Each actor defines its own error type (`UserError`, `CatalogError`, `OrderError`).
//! [`OrderError`](order_actor::OrderError) is the error of the whole workflow and
//! wraps the others with `#[from]`.
//!
//! ### 3. Explicit Principal
//! There is no ambient security context. The [`Caller`](model::Caller) is resolved
//! once through [`UserClient::principal`](clients::UserClient::principal) and passed
//! into every order operation.
//!
//! ### 4. Observability
//! `tracing` everywhere, with `#[instrument]` spans on client and service calls.
//! See the [`lifecycle::tracing`] module.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic actor, its client and the [`mock`](framework::mock) utilities.
//!
//! ### 2. The Workflow ([`ordering`])
//! Builder, pickup codes, status machine, access policy and the
//! [`OrderService`](ordering::OrderService) tying them together.
//!
//! ### 3. The Orchestrator ([`lifecycle`])
//! [`OrderSystem`](lifecycle::OrderSystem) spins up the actors and the service;
//! [`SystemConfig`](lifecycle::SystemConfig) holds the settings.
//!
//! ### 4. The Interface ([`clients`])
//! Domain-specific wrappers around the generic client. [`OrderClient`](clients::OrderClient)
//! is the order repository.
//!
//! ### 5. The Resources ([`user_actor`], [`catalog_actor`], [`order_actor`], [`model`])
//! Entity types and their `ActorEntity` implementations.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod catalog_actor;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod ordering;
pub mod user_actor;
