pub mod errors;
pub mod db;
pub mod bag;
pub mod cuboid;

#[cfg(test)]
mod tests;
