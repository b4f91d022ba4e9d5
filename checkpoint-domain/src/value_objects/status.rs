// Lifecycle status value objects

categorical_tag! {
    /// Custody state of a logged item. New items start out HELD.
    ItemStatus ("item status") {
        Held => "HELD",
        Released => "RELEASED",
    }
}

categorical_tag! {
    StudentStatus ("student status") {
        Enrolled => "ENROLLED",
        Outsider => "OUTSIDER",
        Suspended => "SUSPENDED",
    }
}
