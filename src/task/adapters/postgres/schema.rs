//! Diesel schema for task record persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional task description.
        description -> Nullable<Varchar>,
        /// Task status, constrained to the closed status set by a check
        /// constraint in the deployed schema.
        #[max_length = 50]
        status -> Varchar,
    }
}
