pub mod associate;
pub mod department;
