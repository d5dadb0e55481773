//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let badge = factory::create_badge(&db).await?;
//!
//! let badge = factory::badge::BadgeFactory::new(&db)
//!     .user("123456789")
//!     .flags(["DEVELOPER", "SUPPORTER"])
//!     .build()
//!     .await?;
//! ```

pub mod badge;
pub mod helpers;

pub use badge::create_badge;
