use crate::models::associate::{
    Associate, AssociateFilter, AssociatePatch, FieldValue, NewAssociate,
};
use sqlx::postgres::PgConnection;
use sqlx::{Connection, Postgres, QueryBuilder};
use log::info;

const SELECT_ASSOCIATES: &str =
    "SELECT id, name, hire_date, manager, department FROM associates_info";

/// Moves the `SERIAL` sequence past the highest stored id, so rows inserted
/// with an explicit id never collide with later generated ones.
pub const SYNC_ID_SEQUENCE: &str = r#"
    SELECT setval(
        pg_get_serial_sequence('associates_info', 'id'),
        (SELECT MAX(id) FROM associates_info)
    )
"#;

/// Escapes LIKE metacharacters so user input matches literally.
pub fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

pub async fn list(conn: &mut PgConnection) -> Result<Vec<Associate>, sqlx::Error> {
    sqlx::query_as::<_, Associate>(&format!("{} ORDER BY id ASC", SELECT_ASSOCIATES))
        .fetch_all(conn)
        .await
}

pub fn lookup_query(filter: &AssociateFilter) -> QueryBuilder<'static, Postgres> {
    let mut query_builder: QueryBuilder<'static, Postgres> = QueryBuilder::new(SELECT_ASSOCIATES);
    query_builder.push(" WHERE ");
    let mut conditions = query_builder.separated(" AND ");

    if let Some(id) = filter.id {
        conditions.push("id = ");
        conditions.push_bind_unseparated(id);
    }
    let text_criteria = [
        ("name", &filter.name),
        ("manager", &filter.manager),
        ("department", &filter.department),
    ];
    for (column, value) in text_criteria {
        if let Some(value) = value {
            conditions.push(format!("{} ILIKE ", column));
            conditions.push_bind_unseparated(format!("%{}%", escape_like(value)));
        }
    }

    query_builder.push(" ORDER BY id ASC");
    query_builder
}

pub async fn lookup(
    conn: &mut PgConnection,
    filter: &AssociateFilter,
) -> Result<Vec<Associate>, sqlx::Error> {
    let mut query_builder = lookup_query(filter);
    info!("Executing query: {} with filter {:?}", query_builder.sql(), filter);
    query_builder.build_query_as::<Associate>().fetch_all(conn).await
}

pub async fn insert(
    conn: &mut PgConnection,
    new: &NewAssociate,
) -> Result<Associate, sqlx::Error> {
    sqlx::query_as::<_, Associate>(
        r#"
        INSERT INTO associates_info (name, hire_date, manager, department)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, hire_date, manager, department
        "#,
    )
    .bind(&new.name)
    .bind(new.hire_date)
    .bind(&new.manager)
    .bind(&new.department)
    .fetch_one(conn)
    .await
}

pub async fn insert_with_id(
    conn: &mut PgConnection,
    id: i32,
    new: &NewAssociate,
) -> Result<Associate, sqlx::Error> {
    let mut tx = conn.begin().await?;
    let created = sqlx::query_as::<_, Associate>(
        r#"
        INSERT INTO associates_info (id, name, hire_date, manager, department)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, hire_date, manager, department
        "#,
    )
    .bind(id)
    .bind(&new.name)
    .bind(new.hire_date)
    .bind(&new.manager)
    .bind(&new.department)
    .fetch_one(&mut *tx)
    .await?;
    sqlx::query(SYNC_ID_SEQUENCE).execute(&mut *tx).await?;
    tx.commit().await?;
    Ok(created)
}

/// Callers must reject an empty patch first; `SET` needs at least one assignment.
pub fn update_query(id: i32, patch: &AssociatePatch) -> QueryBuilder<'_, Postgres> {
    let mut query_builder: QueryBuilder<'_, Postgres> =
        QueryBuilder::new("UPDATE associates_info SET ");
    let mut separated = query_builder.separated(", ");
    for (column, value) in patch.assignments() {
        separated.push(format!("{} = ", column));
        match value {
            FieldValue::Text(text) => separated.push_bind_unseparated(text),
            FieldValue::Date(date) => separated.push_bind_unseparated(date),
        };
    }
    query_builder.push(" WHERE id = ");
    query_builder.push_bind(id);
    query_builder
}

pub async fn update(
    conn: &mut PgConnection,
    id: i32,
    patch: &AssociatePatch,
) -> Result<u64, sqlx::Error> {
    let mut query_builder = update_query(id, patch);
    info!("Executing query: {} for id {}", query_builder.sql(), id);
    let result = query_builder.build().execute(conn).await?;
    Ok(result.rows_affected())
}

pub async fn delete(conn: &mut PgConnection, id: i32) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM associates_info WHERE id = $1")
        .bind(id)
        .execute(conn)
        .await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn like_metacharacters_are_escaped() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("eng"), "eng");
    }

    #[test]
    fn lookup_joins_supplied_criteria_with_and() {
        let filter = AssociateFilter {
            id: Some(7),
            department: Some("eng".into()),
            ..Default::default()
        };
        let query_builder = lookup_query(&filter);
        assert_eq!(
            query_builder.sql(),
            "SELECT id, name, hire_date, manager, department FROM associates_info \
             WHERE id = $1 AND department ILIKE $2 ORDER BY id ASC"
        );
    }

    #[test]
    fn update_sets_only_supplied_fields_in_order() {
        let patch = AssociatePatch {
            manager: Some("Dana".into()),
            hire_date: NaiveDate::from_ymd_opt(2024, 2, 29),
            ..Default::default()
        };
        let query_builder = update_query(3, &patch);
        assert_eq!(
            query_builder.sql(),
            "UPDATE associates_info SET hire_date = $1, manager = $2 WHERE id = $3"
        );
    }

    #[test]
    fn sequence_sync_targets_the_id_column() {
        let sql = SYNC_ID_SEQUENCE.split_whitespace().collect::<Vec<_>>().join(" ");
        assert!(sql.contains("setval( pg_get_serial_sequence('associates_info', 'id'),"));
        assert!(sql.contains("(SELECT MAX(id) FROM associates_info)"));
    }
}
