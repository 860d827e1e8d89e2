//! Schema initialization for the `students` table.

use sqlx::sqlite::SqliteConnection;

/// DDL for the enrollment table. Safe to run repeatedly.
const CREATE_STUDENTS: &str = "\
    CREATE TABLE IF NOT EXISTS students (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        student_type TEXT,
        previous_school TEXT,
        first_name TEXT NOT NULL,
        middle_name TEXT,
        last_name TEXT NOT NULL,
        address TEXT NOT NULL,
        date_of_birth TEXT NOT NULL,
        place_of_birth TEXT NOT NULL,
        contact_number TEXT NOT NULL,
        gender TEXT NOT NULL,
        citizenship TEXT NOT NULL,
        status TEXT NOT NULL,
        father_name TEXT,
        father_contact TEXT,
        father_occupation TEXT,
        mother_name TEXT,
        mother_contact TEXT,
        mother_occupation TEXT,
        elementary_school TEXT,
        elementary_year TEXT,
        junior_high_school TEXT,
        junior_high_year TEXT,
        senior_high_school TEXT,
        senior_high_year TEXT,
        course_selected TEXT NOT NULL,
        academic_year TEXT,
        semester TEXT,
        signature TEXT,
        gcash_number TEXT,
        date_created TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )";

/// Create the `students` table if it does not exist yet.
pub async fn ensure_schema(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_STUDENTS).execute(&mut *conn).await?;
    Ok(())
}

/// Run a trivial query to confirm the database answers.
pub async fn health_check(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(&mut *conn).await?;
    Ok(())
}
