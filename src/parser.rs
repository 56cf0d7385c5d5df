pub mod load;
pub mod obj;
