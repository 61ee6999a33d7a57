use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::application::ports::faculty_repository::FacultyRepository;
use crate::domain::faculty::member::{Faculty, FacultyChanges, NewFaculty};
use crate::infrastructure::db::PgPool;

const COLUMNS: &str =
    "id, name, designation, department, email, phone, specialization, image_url, created_at";

pub struct SqlxFacultyRepository {
    pub pool: PgPool,
}

impl SqlxFacultyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_faculty(r: PgRow) -> Faculty {
    Faculty {
        id: r.get("id"),
        name: r.get("name"),
        designation: r.get("designation"),
        department: r.get("department"),
        email: r.get("email"),
        phone: r.get("phone"),
        specialization: r.get("specialization"),
        image_url: r.get("image_url"),
        created_at: r.get("created_at"),
    }
}

#[async_trait]
impl FacultyRepository for SqlxFacultyRepository {
    async fn list(&self) -> anyhow::Result<Vec<Faculty>> {
        let sql = format!("SELECT {COLUMNS} FROM faculty ORDER BY created_at ASC");
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(map_faculty).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Faculty>> {
        let sql = format!("SELECT {COLUMNS} FROM faculty WHERE id = $1");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(map_faculty))
    }

    async fn create(&self, member: &NewFaculty) -> anyhow::Result<Faculty> {
        let sql = format!(
            r#"INSERT INTO faculty (name, designation, department, email, phone, specialization, image_url)
               VALUES ($1, $2, $3, $4, $5, $6, $7)
               RETURNING {COLUMNS}"#
        );
        let row = sqlx::query(&sql)
            .bind(&member.name)
            .bind(&member.designation)
            .bind(&member.department)
            .bind(&member.email)
            .bind(&member.phone)
            .bind(&member.specialization)
            .bind(member.image_url.as_deref())
            .fetch_one(&self.pool)
            .await?;
        Ok(map_faculty(row))
    }

    async fn update(&self, id: Uuid, changes: &FacultyChanges) -> anyhow::Result<Option<Faculty>> {
        // NULL binds keep the current column value
        let sql = format!(
            r#"UPDATE faculty SET
                   name = COALESCE($2, name),
                   designation = COALESCE($3, designation),
                   department = COALESCE($4, department),
                   email = COALESCE($5, email),
                   phone = COALESCE($6, phone),
                   specialization = COALESCE($7, specialization),
                   image_url = COALESCE($8, image_url)
               WHERE id = $1
               RETURNING {COLUMNS}"#
        );
        let row = sqlx::query(&sql)
            .bind(id)
            .bind(changes.name.as_deref())
            .bind(changes.designation.as_deref())
            .bind(changes.department.as_deref())
            .bind(changes.email.as_deref())
            .bind(changes.phone.as_deref())
            .bind(changes.specialization.as_deref())
            .bind(changes.image_url.as_deref())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(map_faculty))
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM faculty WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
