//! Enrollment entity model.

use enrollment_core::types::DbId;
use sqlx::FromRow;

/// A row from the `students` table.
///
/// Optional columns are `Option` because rows written outside this service
/// may hold NULL; rows written by the repository use the empty string.
#[derive(Debug, Clone, FromRow)]
pub struct Enrollment {
    pub id: DbId,
    pub student_type: Option<String>,
    pub previous_school: Option<String>,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub address: String,
    pub date_of_birth: String,
    pub place_of_birth: String,
    pub contact_number: String,
    pub gender: String,
    pub citizenship: String,
    pub status: String,
    pub father_name: Option<String>,
    pub father_contact: Option<String>,
    pub father_occupation: Option<String>,
    pub mother_name: Option<String>,
    pub mother_contact: Option<String>,
    pub mother_occupation: Option<String>,
    pub elementary_school: Option<String>,
    pub elementary_year: Option<String>,
    pub junior_high_school: Option<String>,
    pub junior_high_year: Option<String>,
    pub senior_high_school: Option<String>,
    pub senior_high_year: Option<String>,
    pub course_selected: String,
    pub academic_year: Option<String>,
    pub semester: Option<String>,
    pub signature: Option<String>,
    pub gcash_number: Option<String>,
    pub date_created: Option<String>,
}
