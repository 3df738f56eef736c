//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the actors behind the order workflow.
//!
//! **Key Responsibilities:**
//! 1. **Actor Creation** - Instantiate all actors and their clients
//! 2. **Dependency Injection** - Wire actors together via context injection
//! 3. **Service Assembly** - Build the [`OrderService`](crate::ordering::OrderService)
//!    on top of the clients
//! 4. **Graceful Shutdown** - Coordinate clean termination of all actors
//! 5. **Configuration & Observability** - [`SystemConfig`] and [`setup_tracing`]
//!
//! ## Dependency Injection via Context
//!
//! Actors are created without dependencies and receive them in `run(context)`:
//!
//! ```rust,ignore
//! impl ActorEntity for MenuItem {
//!     type Context = ResourceClient<Cafeteria>; // refuses items for unknown cafeterias
//! }
//!
//! impl ActorEntity for Order {
//!     type Context = TransitionMode; // strict or permissive status updates
//! }
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - Wait for all actor tasks to finish
//!
//! The menu item actor holds a cafeteria client in its context, so the cafeteria
//! actor stops only after the menu item actor has. The dependency graph is
//! acyclic, which is all channel-closure shutdown needs.

pub mod config;
pub mod order_system;
pub mod tracing;

pub use self::config::*;
pub use self::order_system::*;
pub use self::tracing::*;
