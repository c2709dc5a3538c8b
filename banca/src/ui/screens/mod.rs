pub mod auth;
pub mod card_payment;
pub mod exchange;
pub mod goals;
pub mod loan;
pub mod logs_screen;
pub mod product;
pub mod profile;
pub mod qr;
pub mod services;
pub mod statement;
pub mod tabs;
pub mod transfer;
pub mod view_screen;
