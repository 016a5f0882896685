//! Reusable UI components

mod button;
mod filter_pills;
mod input;
mod ocean_wave;
mod stat_card;
mod toast;

pub use button::*;
pub use filter_pills::*;
pub use input::*;
pub use ocean_wave::*;
pub use stat_card::*;
pub use toast::*;
