//! Profile passthrough endpoints

mod avatar;
mod profile;
mod promote;
mod social_links;

pub use avatar::upload_avatar;
pub use profile::{get_profile, update_profile};
pub use promote::promote_to_organizer;
pub use social_links::{delete_social_link, list_social_links, upsert_social_link};
