//! Diesel table definitions for the PostgreSQL schema.
//!
//! The schema and its migrations are owned by an external collaborator;
//! these definitions must match that schema exactly. Regenerate with
//! `diesel print-schema` when it changes.

diesel::table! {
    /// Registered users, seeded externally.
    users (id) {
        /// Primary key, server-assigned.
        id -> Int4,
        /// Login name; expected unique, matched exactly.
        username -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Published articles, managed externally.
    articles (id) {
        /// Primary key, server-assigned.
        id -> Int4,
        /// Byline author name.
        author -> Varchar,
        /// Headline.
        title -> Varchar,
        /// Full article body.
        content -> Text,
        /// Teaser shown in listings.
        preview -> Varchar,
        /// Estimated reading time in minutes.
        minutes_to_read -> Int4,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}
