//! PostgreSQL implementation of PaymentRepository.
//!
//! Provides persistent storage for Payment aggregates using PostgreSQL.

use crate::domain::foundation::{DomainError, ErrorCode, PaymentId, Timestamp};
use crate::domain::payment::{Payment, PaymentMethod, PaymentStatus};
use crate::ports::{PaymentFilter, PaymentRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const PAYMENT_COLUMNS: &str = "id, cpf, description, amount, payment_method, status, \
                               external_id, created_at, updated_at";

/// PostgreSQL implementation of the PaymentRepository port.
pub struct PostgresPaymentRepository {
    pool: PgPool,
}

impl PostgresPaymentRepository {
    /// Creates a new PostgresPaymentRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a payment.
#[derive(Debug, sqlx::FromRow)]
struct PaymentRow {
    id: Uuid,
    cpf: String,
    description: String,
    amount: Decimal,
    payment_method: String,
    status: String,
    external_id: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PaymentRow> for Payment {
    type Error = DomainError;

    fn try_from(row: PaymentRow) -> Result<Self, Self::Error> {
        Ok(Payment {
            id: PaymentId::from_uuid(row.id),
            cpf: row.cpf,
            description: row.description,
            amount: row.amount,
            payment_method: parse_method(&row.payment_method)?,
            status: parse_status(&row.status)?,
            external_id: row.external_id,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

fn parse_method(s: &str) -> Result<PaymentMethod, DomainError> {
    s.parse().map_err(|_| corrupt_column("payment_method", s))
}

fn parse_status(s: &str) -> Result<PaymentStatus, DomainError> {
    s.parse().map_err(|_| corrupt_column("status", s))
}

fn corrupt_column(column: &str, value: &str) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Invalid {} value: {}", column, value),
    )
    .with_detail("column", column)
    .with_detail("value", value)
}

/// Appends the WHERE clause, ordering and pagination for a filter.
fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &PaymentFilter) {
    builder.push(" WHERE TRUE");

    if let Some(cpf) = &filter.cpf {
        builder.push(" AND cpf = ").push_bind(cpf.clone());
    }
    if let Some(method) = filter.payment_method {
        builder.push(" AND payment_method = ").push_bind(method.as_str());
    }
    if let Some(status) = filter.status {
        builder.push(" AND status = ").push_bind(status.as_str());
    }
    if let Some(start) = filter.start_date {
        builder.push(" AND created_at >= ").push_bind(*start.as_datetime());
    }
    if let Some(end) = filter.end_date {
        builder.push(" AND created_at <= ").push_bind(*end.as_datetime());
    }

    builder.push(" ORDER BY created_at DESC");

    if let Some(take) = filter.take {
        builder.push(" LIMIT ").push_bind(i64::from(take));
    }
    if let Some(skip) = filter.skip {
        builder.push(" OFFSET ").push_bind(i64::from(skip));
    }
}

#[async_trait]
impl PaymentRepository for PostgresPaymentRepository {
    async fn save(&self, payment: &Payment) -> Result<Payment, DomainError> {
        let row: PaymentRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO payments (
                id, cpf, description, amount, payment_method, status,
                external_id, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {}
            "#,
            PAYMENT_COLUMNS
        ))
        .bind(payment.id.as_uuid())
        .bind(&payment.cpf)
        .bind(&payment.description)
        .bind(payment.amount)
        .bind(payment.payment_method.as_str())
        .bind(payment.status.as_str())
        .bind(&payment.external_id)
        .bind(payment.created_at.as_datetime())
        .bind(payment.updated_at.as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(payment_id = %payment.id, error = %e, "Failed to insert payment");
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to save payment: {}", e))
        })?;

        Payment::try_from(row)
    }

    async fn update(&self, payment: &Payment) -> Result<Payment, DomainError> {
        let row: Option<PaymentRow> = sqlx::query_as(&format!(
            r#"
            UPDATE payments SET
                status = $2,
                external_id = $3,
                updated_at = $4
            WHERE id = $1
            RETURNING {}
            "#,
            PAYMENT_COLUMNS
        ))
        .bind(payment.id.as_uuid())
        .bind(payment.status.as_str())
        .bind(&payment.external_id)
        .bind(payment.updated_at.as_datetime())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(payment_id = %payment.id, error = %e, "Failed to update payment");
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to update payment: {}", e))
        })?;

        match row {
            Some(row) => Payment::try_from(row),
            None => Err(DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update payment: no row with id {}", payment.id),
            )),
        }
    }

    async fn find_by_id(&self, id: &PaymentId) -> Result<Option<Payment>, DomainError> {
        let row: Option<PaymentRow> = sqlx::query_as(&format!(
            "SELECT {} FROM payments WHERE id = $1",
            PAYMENT_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to find payment: {}", e))
        })?;

        row.map(Payment::try_from).transpose()
    }

    async fn find_all(&self, filter: &PaymentFilter) -> Result<Vec<Payment>, DomainError> {
        let mut builder = QueryBuilder::<Postgres>::new(format!(
            "SELECT {} FROM payments",
            PAYMENT_COLUMNS
        ));
        push_filter(&mut builder, filter);

        let rows: Vec<PaymentRow> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(ErrorCode::DatabaseError, format!("Failed to list payments: {}", e))
            })?;

        rows.into_iter().map(Payment::try_from).collect()
    }
}
