mod login_user;

pub use login_user::*;
