//! User-scoped data access
//!
//! Every operation here takes the authenticated user's id and filters on it;
//! no query can read or mutate another user's rows. Deletes check ownership
//! by including `user_id` in the WHERE clause and treating zero affected rows
//! as `NotFound`.

pub mod habits;
pub mod media;
pub mod reflections;
pub mod rewards;
