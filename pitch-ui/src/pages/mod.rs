mod contribute;
mod create;
mod detail;
mod home;

pub use contribute::Contribute;
pub use create::CreateProject;
pub use detail::PitchDeck;
pub use home::Home;
