//! SeaORM entities for the portal tables.
//!
//! Each module maps one table created by the [`migration`](crate::migration)
//! steps. Relations mirror the foreign keys: sessions and emails belong to a
//! user, selected interns belong to the application they were chosen from.

pub mod application;
pub mod email;
pub mod selected_intern;
pub mod session;
pub mod user;

pub use application::Entity as Application;
pub use email::Entity as Email;
pub use selected_intern::Entity as SelectedIntern;
pub use session::Entity as Session;
pub use user::Entity as User;
