pub mod deck;
pub mod grade;
