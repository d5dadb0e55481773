pub use super::badge::Entity as Badge;
