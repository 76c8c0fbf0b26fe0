//! Value Objects - Immutable, identity-less domain primitives

mod category;
mod language_code;
mod language_hint;
mod locale_profile;

pub use category::Category;
pub use language_code::LanguageCode;
pub use language_hint::LanguageHint;
pub use locale_profile::LocaleProfile;
