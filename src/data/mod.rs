//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models so the
//! service layer never touches entities directly.

pub mod badge;

#[cfg(test)]
mod test;
