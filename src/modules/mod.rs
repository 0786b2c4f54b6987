pub mod auth;
pub mod greeting;
pub mod students;

pub use self::auth::model::LoginRequest;
pub use self::students::model::Student;
