use async_trait::async_trait;
use chrono::Utc;
use contracts::domain::a001_invoice::aggregate::{Invoice, InvoiceId};
use contracts::domain::common::{AggregateRoot, EntityMetadata};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use super::store::InvoiceStore;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_invoice")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub custom_id: i32,
    pub issue_date: Option<String>,
    pub customer_name: String,
    pub total_cost: f64,
    pub status: Option<String>,
    pub extra_json: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Invoice {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
        let extra = serde_json::from_str::<Map<String, Value>>(&m.extra_json).unwrap_or_else(|e| {
            tracing::warn!("a001_invoice {}: unreadable extra_json ({})", m.id, e);
            Map::new()
        });

        Invoice {
            id: InvoiceId(uuid),
            custom_id: m.custom_id,
            issue_date: m.issue_date,
            customer_name: m.customer_name,
            total_cost: m.total_cost,
            status: m.status,
            metadata,
            extra,
        }
    }
}

fn to_active(aggregate: &Invoice) -> anyhow::Result<ActiveModel> {
    Ok(ActiveModel {
        id: Set(aggregate.id.value().to_string()),
        custom_id: Set(aggregate.custom_id),
        issue_date: Set(aggregate.issue_date.clone()),
        customer_name: Set(aggregate.customer_name.clone()),
        total_cost: Set(aggregate.total_cost),
        status: Set(aggregate.status.clone()),
        extra_json: Set(serde_json::to_string(&aggregate.extra)?),
        is_deleted: Set(aggregate.metadata.is_deleted),
        created_at: Set(Some(aggregate.metadata.created_at)),
        updated_at: Set(Some(aggregate.metadata.updated_at)),
        version: Set(aggregate.metadata.version),
    })
}

/// SQLite-backed invoice store
#[derive(Clone)]
pub struct SeaOrmInvoiceStore {
    conn: DatabaseConnection,
}

impl SeaOrmInvoiceStore {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl InvoiceStore for SeaOrmInvoiceStore {
    async fn insert(&self, invoice: &Invoice) -> anyhow::Result<Option<Invoice>> {
        let saved = to_active(invoice)?.insert(&self.conn).await?;
        tracing::debug!("{}: inserted {}", Invoice::full_name(), saved.id);
        Ok(Some(saved.into()))
    }

    async fn list_active(&self) -> anyhow::Result<Vec<Invoice>> {
        let items = Entity::find()
            .filter(Column::IsDeleted.eq(false))
            .order_by_asc(Column::CreatedAt)
            .all(&self.conn)
            .await?
            .into_iter()
            .map(Into::into)
            .collect();
        Ok(items)
    }

    async fn get_by_id(&self, id: InvoiceId) -> anyhow::Result<Option<Invoice>> {
        let result = Entity::find_by_id(id.value().to_string())
            .one(&self.conn)
            .await?;
        Ok(result.map(Into::into))
    }

    async fn update(&self, invoice: &Invoice) -> anyhow::Result<bool> {
        let mut active = to_active(invoice)?;
        active.id = NotSet;
        active.created_at = NotSet;
        active.is_deleted = NotSet;
        let result = Entity::update_many()
            .set(active)
            .filter(Column::Id.eq(invoice.id.value().to_string()))
            .filter(Column::IsDeleted.eq(false))
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected > 0)
    }

    async fn soft_delete(&self, id: InvoiceId) -> anyhow::Result<bool> {
        use sea_orm::sea_query::Expr;
        let result = Entity::update_many()
            .col_expr(Column::IsDeleted, Expr::value(true))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(Column::Id.eq(id.value().to_string()))
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected > 0)
    }

    async fn hard_delete(&self, id: InvoiceId) -> anyhow::Result<bool> {
        let result = Entity::delete_by_id(id.value().to_string())
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected > 0)
    }

    async fn custom_id_exists(&self, custom_id: i32) -> anyhow::Result<bool> {
        let found = Entity::find()
            .filter(Column::CustomId.eq(custom_id))
            .one(&self.conn)
            .await?;
        Ok(found.is_some())
    }
}
