//! # Signup Form Test Suite
//!
//! Cross-subsystem flows that drive the form, the location session and the
//! storage adapters together.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── flows.rs        # User journeys through the signup form
//!     ├── persistence.rs  # Token reuse across restarts with file storage
//!     └── schema.rs       # Signup schema through the bare form engine
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p sf-tests
//! cargo test -p sf-tests integration::flows
//! ```

pub mod integration;
