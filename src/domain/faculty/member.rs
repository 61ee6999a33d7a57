use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Faculty {
    pub id: Uuid,
    pub name: String,
    pub designation: String,
    pub department: String,
    pub email: String,
    pub phone: String,
    pub specialization: String,
    pub image_url: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone)]
pub struct NewFaculty {
    pub name: String,
    pub designation: String,
    pub department: String,
    pub email: String,
    pub phone: String,
    pub specialization: String,
    pub image_url: Option<String>,
}

/// Partial update; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct FacultyChanges {
    pub name: Option<String>,
    pub designation: Option<String>,
    pub department: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub specialization: Option<String>,
    pub image_url: Option<String>,
}
