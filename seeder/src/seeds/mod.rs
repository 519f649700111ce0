pub mod booking;
pub mod casting;
pub mod drinks;
pub mod trivia;
