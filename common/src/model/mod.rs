pub mod generation;
pub mod record;
