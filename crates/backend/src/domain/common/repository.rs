use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use contracts::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, Record, RecordDto, RecordId,
    ResourceFields, ResourceKind,
};
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveValue, Order, QueryFilter, QueryOrder, Set, SqlErr};

use super::{RecordStore, StoreError};

/// Общая таблица записей всех справочников.
/// Специфичные поля лежат в `payload` (JSON), уникальность кода
/// обеспечивается индексом `(resource_type, code)`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "resource_record")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub resource_type: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub payload: String,
    pub is_deleted: bool,
    pub created_at: String,
    pub updated_at: String,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// RFC 3339 с микросекундами: строки сортируются так же, как время
pub fn format_timestamp(dt: &chrono::DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(s: &str) -> Option<chrono::DateTime<Utc>> {
    chrono::DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Хранилище записей справочника `F` поверх SQLite (sea-orm)
pub struct SqlRecordStore<F> {
    conn: DatabaseConnection,
    _fields: PhantomData<fn() -> F>,
}

impl<F: ResourceFields> SqlRecordStore<F> {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self {
            conn,
            _fields: PhantomData,
        }
    }

    fn resource_type() -> &'static str {
        Record::<F>::collection_name()
    }

    fn kind() -> ResourceKind {
        F::descriptor().kind
    }

    fn corrupt(id: &str, reason: impl ToString) -> StoreError {
        StoreError::Corrupt {
            kind: Self::kind(),
            id: id.to_string(),
            reason: reason.to_string(),
        }
    }

    fn to_record(m: Model) -> Result<Record<F>, StoreError> {
        let id = RecordId::from_string(&m.id).map_err(|e| Self::corrupt(&m.id, e))?;
        let fields: F = serde_json::from_str(&m.payload)?;
        let created_at = parse_timestamp(&m.created_at)
            .ok_or_else(|| Self::corrupt(&m.id, format!("bad created_at {}", m.created_at)))?;
        let updated_at = parse_timestamp(&m.updated_at)
            .ok_or_else(|| Self::corrupt(&m.id, format!("bad updated_at {}", m.updated_at)))?;

        let metadata = EntityMetadata {
            created_at,
            updated_at,
            is_deleted: m.is_deleted,
            version: m.version,
        };

        Ok(Record {
            base: BaseAggregate::restore(id, m.code, m.description, m.comment, metadata),
            fields,
        })
    }

    fn map_write_error(code: &str, err: DbErr) -> StoreError {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => StoreError::DuplicateIdentifier {
                kind: Self::kind(),
                code: code.to_string(),
            },
            _ => StoreError::Database(err),
        }
    }

    async fn find_live(&self, id: RecordId) -> Result<Option<Model>, StoreError> {
        let model = Entity::find_by_id(id.as_string())
            .filter(Column::ResourceType.eq(Self::resource_type()))
            .filter(Column::IsDeleted.eq(false))
            .one(&self.conn)
            .await?;
        Ok(model)
    }
}

#[async_trait]
impl<F: ResourceFields> RecordStore<F> for SqlRecordStore<F> {
    async fn list(&self) -> Result<Vec<Record<F>>, StoreError> {
        Entity::find()
            .filter(Column::ResourceType.eq(Self::resource_type()))
            .filter(Column::IsDeleted.eq(false))
            .order_by_asc(Column::CreatedAt)
            .order_by(Expr::cust("rowid"), Order::Asc)
            .all(&self.conn)
            .await?
            .into_iter()
            .map(Self::to_record)
            .collect()
    }

    async fn get_by_id(&self, id: RecordId) -> Result<Option<Record<F>>, StoreError> {
        self.find_live(id).await?.map(Self::to_record).transpose()
    }

    async fn create(&self, code: &str, draft: RecordDto<F>) -> Result<Record<F>, StoreError> {
        let mut record = Record::<F>::new_for_insert(code.to_string(), draft);
        record.base.metadata = EntityMetadata::inserted_at(Utc::now());
        let now = record.base.metadata.created_at;

        let active = ActiveModel {
            id: Set(record.base.id.as_string()),
            resource_type: Set(Self::resource_type().to_string()),
            code: Set(record.base.code.clone()),
            description: Set(record.base.description.clone()),
            comment: Set(record.base.comment.clone()),
            payload: Set(serde_json::to_string(&record.fields)?),
            is_deleted: Set(false),
            created_at: Set(format_timestamp(&now)),
            updated_at: Set(format_timestamp(&now)),
            version: Set(record.base.metadata.version),
        };
        active
            .insert(&self.conn)
            .await
            .map_err(|e| Self::map_write_error(code, e))?;

        Ok(record)
    }

    async fn update(&self, id: RecordId, dto: &RecordDto<F>) -> Result<Record<F>, StoreError> {
        let model = self
            .find_live(id)
            .await?
            .ok_or_else(|| StoreError::NotFound(id.as_string()))?;
        let mut record = Self::to_record(model)?;

        record.update(dto);
        record.before_write();
        record.base.metadata.increment_version();

        let active = ActiveModel {
            id: Set(record.base.id.as_string()),
            resource_type: ActiveValue::NotSet,
            code: ActiveValue::NotSet,
            description: Set(record.base.description.clone()),
            comment: Set(record.base.comment.clone()),
            payload: Set(serde_json::to_string(&record.fields)?),
            is_deleted: ActiveValue::NotSet,
            created_at: ActiveValue::NotSet,
            updated_at: Set(format_timestamp(&record.base.metadata.updated_at)),
            version: Set(record.base.metadata.version),
        };
        active.update(&self.conn).await?;

        Ok(record)
    }

    async fn delete(&self, id: RecordId) -> Result<(), StoreError> {
        let result = Entity::update_many()
            .col_expr(Column::IsDeleted, Expr::value(true))
            .col_expr(Column::UpdatedAt, Expr::value(format_timestamp(&Utc::now())))
            .filter(Column::Id.eq(id.as_string()))
            .filter(Column::ResourceType.eq(Self::resource_type()))
            .filter(Column::IsDeleted.eq(false))
            .exec(&self.conn)
            .await?;

        if result.rows_affected == 0 {
            return Err(StoreError::NotFound(id.as_string()));
        }
        Ok(())
    }

    async fn find_most_recently_created(&self) -> Result<Option<Record<F>>, StoreError> {
        Entity::find()
            .filter(Column::ResourceType.eq(Self::resource_type()))
            .order_by_desc(Column::CreatedAt)
            .order_by(Expr::cust("rowid"), Order::Desc)
            .one(&self.conn)
            .await?
            .map(Self::to_record)
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::open_in_memory;
    use contracts::domain::a001_discount::aggregate::{DiscountDto, DiscountFields};
    use contracts::domain::a002_tax::aggregate::{TaxDto, TaxFields};

    fn discount(description: &str, percentage: f64) -> DiscountDto {
        DiscountDto {
            description: description.into(),
            fields: DiscountFields {
                percentage,
                is_active: true,
            },
            ..Default::default()
        }
    }

    async fn store() -> SqlRecordStore<DiscountFields> {
        let conn = open_in_memory().await.unwrap();
        SqlRecordStore::new(conn)
    }

    #[tokio::test]
    async fn test_create_and_list_in_creation_order() {
        let store = store().await;
        store.create("DES1", discount("Welcome", 5.0)).await.unwrap();
        store.create("DES2", discount("Big order", 20.0)).await.unwrap();
        let created = store.create("DES3", discount("Referral", 10.0)).await.unwrap();
        assert_eq!(created.base.metadata.version, 1);

        let items = store.list().await.unwrap();
        let codes: Vec<_> = items.iter().map(|r| r.base.code.as_str()).collect();
        assert_eq!(codes, vec!["DES1", "DES2", "DES3"]);
        assert_eq!(items[2], created);
    }

    #[tokio::test]
    async fn test_duplicate_code_is_reported() {
        let store = store().await;
        store.create("DES1", discount("Welcome", 5.0)).await.unwrap();
        let err = store.create("DES1", discount("Again", 5.0)).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::DuplicateIdentifier { kind: ResourceKind::Discount, ref code } if code == "DES1"
        ));
    }

    #[tokio::test]
    async fn test_resource_types_are_isolated() {
        let conn = open_in_memory().await.unwrap();
        let discounts = SqlRecordStore::<DiscountFields>::new(conn.clone());
        let taxes = SqlRecordStore::<TaxFields>::new(conn);

        discounts.create("DES1", discount("Welcome", 5.0)).await.unwrap();
        let tax = TaxDto {
            description: "VAT".into(),
            fields: TaxFields {
                rate: 21.0,
                is_active: true,
            },
            ..Default::default()
        };
        taxes.create("IMP1", tax).await.unwrap();

        assert_eq!(discounts.list().await.unwrap().len(), 1);
        assert_eq!(taxes.list().await.unwrap()[0].fields.rate, 21.0);
        let last = taxes.find_most_recently_created().await.unwrap().unwrap();
        assert_eq!(last.base.code, "IMP1");
    }

    #[tokio::test]
    async fn test_update_keeps_code_and_bumps_version() {
        let store = store().await;
        let created = store.create("DES1", discount("Welcome", 5.0)).await.unwrap();

        let mut form = discount("Welcome back", 7.5);
        form.code = Some("DES42".into());
        let updated = store.update(created.base.id, &form).await.unwrap();
        assert_eq!(updated.base.code, "DES1");
        assert_eq!(updated.base.metadata.version, 2);

        let loaded = store.get_by_id(created.base.id).await.unwrap().unwrap();
        assert_eq!(loaded.base.description, "Welcome back");
        assert_eq!(loaded.fields.percentage, 7.5);
        assert_eq!(loaded.base.metadata.created_at, created.base.metadata.created_at);

        let missing = store.update(RecordId::new_v4(), &form).await.unwrap_err();
        assert!(matches!(missing, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_is_soft_and_keeps_allocation_history() {
        let store = store().await;
        store.create("DES1", discount("Welcome", 5.0)).await.unwrap();
        let last = store.create("DES2", discount("Big order", 20.0)).await.unwrap();

        store.delete(last.base.id).await.unwrap();
        assert!(matches!(
            store.delete(last.base.id).await.unwrap_err(),
            StoreError::NotFound(_)
        ));
        assert_eq!(store.list().await.unwrap().len(), 1);
        assert!(store.get_by_id(last.base.id).await.unwrap().is_none());

        let most_recent = store.find_most_recently_created().await.unwrap().unwrap();
        assert_eq!(most_recent.base.code, "DES2");
    }

    #[tokio::test]
    async fn test_empty_store_has_no_most_recent() {
        let store = store().await;
        assert!(store.find_most_recently_created().await.unwrap().is_none());
    }
}
