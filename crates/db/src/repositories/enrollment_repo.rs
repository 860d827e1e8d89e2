//! Repository for the `students` table.

use enrollment_core::enrollment::{FieldMap, NewEnrollment};
use enrollment_core::types::{now_timestamp, DbId};
use sqlx::sqlite::SqliteConnection;
use sqlx::Connection;

use crate::models::enrollment::Enrollment;

/// Column list for `students` queries.
const COLUMNS: &str = "\
    id, student_type, previous_school, first_name, middle_name, last_name, \
    address, date_of_birth, place_of_birth, contact_number, gender, \
    citizenship, status, father_name, father_contact, father_occupation, \
    mother_name, mother_contact, mother_occupation, elementary_school, \
    elementary_year, junior_high_school, junior_high_year, senior_high_school, \
    senior_high_year, course_selected, academic_year, semester, \
    signature, gcash_number, date_created";

/// Insert-only access to enrollment records. There is no update or delete.
pub struct EnrollmentRepo;

impl EnrollmentRepo {
    /// Insert one enrollment built from submitted form fields.
    ///
    /// `date_created` is stamped with the current time; a client-supplied
    /// value is ignored. Returns the new rowid.
    pub async fn insert(
        conn: &mut SqliteConnection,
        fields: &FieldMap,
    ) -> Result<DbId, sqlx::Error> {
        let record = NewEnrollment::from_fields(fields);

        let missing = record.missing_required();
        if !missing.is_empty() {
            tracing::debug!(?missing, "Enrollment lacks required fields, expecting rejection");
        }

        Self::create(conn, &record, &now_timestamp()).await
    }

    /// Insert a typed record with an explicit creation timestamp.
    ///
    /// The insert runs in its own transaction. If the engine rejects it the
    /// transaction is dropped uncommitted and no row is visible.
    pub async fn create(
        conn: &mut SqliteConnection,
        record: &NewEnrollment,
        date_created: &str,
    ) -> Result<DbId, sqlx::Error> {
        let mut tx = conn.begin().await?;

        let result = sqlx::query(
            "INSERT INTO students ( \
                student_type, previous_school, first_name, middle_name, last_name, \
                address, date_of_birth, place_of_birth, contact_number, gender, \
                citizenship, status, father_name, father_contact, father_occupation, \
                mother_name, mother_contact, mother_occupation, elementary_school, \
                elementary_year, junior_high_school, junior_high_year, senior_high_school, \
                senior_high_year, course_selected, academic_year, semester, \
                signature, gcash_number, date_created \
             ) VALUES ( \
                ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, \
                ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20, \
                ?21, ?22, ?23, ?24, ?25, ?26, ?27, ?28, ?29, ?30 \
             )",
        )
        .bind(&record.student_type)
        .bind(&record.previous_school)
        .bind(&record.first_name)
        .bind(&record.middle_name)
        .bind(&record.last_name)
        .bind(&record.address)
        .bind(&record.date_of_birth)
        .bind(&record.place_of_birth)
        .bind(&record.contact_number)
        .bind(&record.gender)
        .bind(&record.citizenship)
        .bind(&record.status)
        .bind(&record.father_name)
        .bind(&record.father_contact)
        .bind(&record.father_occupation)
        .bind(&record.mother_name)
        .bind(&record.mother_contact)
        .bind(&record.mother_occupation)
        .bind(&record.elementary_school)
        .bind(&record.elementary_year)
        .bind(&record.junior_high_school)
        .bind(&record.junior_high_year)
        .bind(&record.senior_high_school)
        .bind(&record.senior_high_year)
        .bind(&record.course_selected)
        .bind(&record.academic_year)
        .bind(&record.semester)
        .bind(&record.signature)
        .bind(&record.gcash_number)
        .bind(date_created)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(result.last_insert_rowid())
    }

    /// Find an enrollment by ID.
    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> Result<Option<Enrollment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = ?1");
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Number of stored enrollments.
    pub async fn count(conn: &mut SqliteConnection) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM students")
            .fetch_one(&mut *conn)
            .await?;
        Ok(count)
    }
}
