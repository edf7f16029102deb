//! Diesel schema for board persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning project identifier.
        project_id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional long-form description.
        description -> Nullable<Text>,
        /// Lifecycle status.
        #[max_length = 50]
        status -> Varchar,
        /// Priority level.
        #[max_length = 50]
        priority -> Varchar,
        /// Estimated effort in hours.
        estimated_hours -> Float8,
        /// Accumulated effort in hours.
        actual_hours -> Float8,
        /// Optional due date.
        due_date -> Nullable<Date>,
        /// Optional completion date.
        completed_date -> Nullable<Date>,
        /// Optional assignee identifier.
        assigned_to -> Nullable<Uuid>,
        /// Optional parent task identifier.
        parent_task_id -> Nullable<Uuid>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Project records.
    projects (id) {
        /// Project identifier.
        id -> Uuid,
        /// Project name.
        #[max_length = 255]
        name -> Varchar,
        /// Optional owning department label.
        #[max_length = 100]
        department -> Nullable<Varchar>,
        /// Managing user identifier.
        manager_id -> Uuid,
        /// Lifecycle status.
        #[max_length = 50]
        status -> Varchar,
        /// Optional allocated budget.
        budget -> Nullable<Float8>,
        /// Optional spend to date.
        actual_cost -> Nullable<Float8>,
        /// Completion percentage in `[0, 100]`.
        completion_percentage -> Float8,
    }
}

diesel::table! {
    /// User records.
    users (id) {
        /// User identifier.
        id -> Uuid,
        /// Login name.
        #[max_length = 80]
        username -> Varchar,
        /// Display name.
        #[max_length = 120]
        full_name -> Varchar,
        /// Resolved role.
        #[max_length = 50]
        role -> Varchar,
        /// Optional department label.
        #[max_length = 100]
        department -> Nullable<Varchar>,
        /// Whether the user can receive work.
        is_active -> Bool,
    }
}

diesel::allow_tables_to_appear_in_same_query!(tasks, projects, users);
