pub use super::account::Entity as Account;
pub use super::session::Entity as Session;
pub use super::user::Entity as User;
pub use super::verification::Entity as Verification;
