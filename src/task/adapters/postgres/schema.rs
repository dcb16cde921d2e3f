//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Persistence-assigned identifier.
        id -> Int8,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Completed flag, defaults to false.
        completed -> Bool,
    }
}
