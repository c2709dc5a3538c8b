pub mod exchange;
pub mod keypad;
pub mod loans;
pub mod savings;
