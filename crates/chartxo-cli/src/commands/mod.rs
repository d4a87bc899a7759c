pub mod analyze;
pub mod chat;
pub mod dispatch;
pub mod game;
pub mod history;
pub mod onboard;
pub mod plans;
pub mod profile;
pub mod schema;
pub mod serve_payments;
pub mod theme;
