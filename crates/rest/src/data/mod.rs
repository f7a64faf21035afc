//! The transport-independent data model of the uniform call.
//!
//! Everything a request or response is made of lives here: statuses,
//! ordered header lists, negotiation preferences, cookies, authentication
//! challenges, conditions and entities. Methods and media types reuse the
//! `http` and `mime` crates directly — [`http::Method`] already carries
//! arbitrary extension tokens and [`mime::Mime`] the `*/*` wildcard range,
//! so neither is wrapped.

mod status;
pub use status::Status;

mod header;
pub use header::Header;
pub use header::HeaderList;

mod preference;
pub use preference::Preference;
pub use preference::PreferenceList;

mod metadata;
pub use metadata::CharacterSet;
pub use metadata::Encoding;
pub use metadata::Language;

mod cookie;
pub use cookie::Cookie;
pub use cookie::CookieSetting;

mod challenge;
pub use challenge::ChallengeRequest;
pub use challenge::ChallengeResponse;
pub use challenge::ChallengeScheme;

mod conditions;
pub use conditions::Conditions;
pub use conditions::Tag;

mod entity;
pub use entity::Entity;

mod client_info;
pub use client_info::ClientInfo;

mod server_info;
pub use server_info::ServerInfo;
