//! Diesel table definitions.
//!
//! Must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Registered users. `seq` records insertion order.
    users (id) {
        id -> Uuid,
        seq -> Int8,
        username -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Exercise entries. `user_id` is not a foreign key.
    exercises (id) {
        id -> Uuid,
        seq -> Int8,
        user_id -> Uuid,
        description -> Text,
        duration_minutes -> Int8,
        performed_on -> Date,
        created_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(users, exercises);
