//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing`
//! crate. The format is compact and hides the module prefix (`with_target(false)`);
//! actors tag their lines with `entity_type` instead.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup, shutdown and final store size
//! - **Repository Operations**: create, get, update, delete, list and lookups
//! - **Access Decisions**: every grant at `info`, every denial at `warn`
//! - **Errors**: refused creates, transitions and unique-key clashes at `warn`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Workflow milestones and access decisions
//! RUST_LOG=info cargo run
//!
//! # Full payloads and every actor request
//! RUST_LOG=debug cargo run
//!
//! # Only the order workflow
//! RUST_LOG=campus_orders::ordering=debug cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO create_order: Created entity_type="Order" id=order_1 size=1 cafeteria_id=cafeteria_1 user_id=user_2 lines=2
//! INFO create_order: Order placed order_id=order_1 pickup_code=482913 total=15.00 ...
//! WARN delete_order: Access denied caller=user_4 order_id=order_1 operation=Delete
//! ```
//!
//! Spans from `#[instrument]` show inline before the message, so each line carries
//! the operation it belongs to.

/// Installs the global subscriber. Reads the filter from `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact() // Compact format shows spans inline (e.g., "create_order:")
        .init();
}
