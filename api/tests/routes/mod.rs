mod auth_test;
mod casting_test;
mod coffee_test;
mod health_test;
mod trivia_test;
