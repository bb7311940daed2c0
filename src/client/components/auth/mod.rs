pub mod sign_in_button;
pub mod sign_out_button;

pub use sign_in_button::SignInButton;
pub use sign_out_button::SignOutButton;
