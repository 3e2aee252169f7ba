pub use super::booking::Entity as Booking;
pub use super::location::Entity as Location;
pub use super::room::Entity as Room;
pub use super::user::Entity as User;
