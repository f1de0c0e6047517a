//! Cheeseria catalog server.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌──────────────────────────────────────────────┐
//!                        │                 CATALOG SERVER               │
//!                        │                                              │
//!     Client Request     │  ┌──────────┐   ┌──────────┐   ┌──────────┐  │
//!     ───────────────────┼─▶│ security │──▶│   http   │──▶│ catalog  │  │
//!                        │  │cors/limit│   │ handlers │   │  store   │  │
//!                        │  └──────────┘   └────┬─────┘   └──────────┘  │
//!                        │                      │                       │
//!     Client Response    │  ┌──────────┐        │                       │
//!     ◀──────────────────┼──│ headers  │◀───────┘                       │
//!                        │  └──────────┘                                │
//!                        │                                              │
//!                        │  config · observability · lifecycle          │
//!                        └──────────────────────────────────────────────┘
//! ```

use cheeseria::lifecycle::startup;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    startup::start().await
}
