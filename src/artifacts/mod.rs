pub mod branch;
pub mod checkout;
pub mod core;
pub mod objects;
pub mod stage;
