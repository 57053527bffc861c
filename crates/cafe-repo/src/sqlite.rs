use async_trait::async_trait;
use cafe_types::domain::order::{Order, OrderProduct, OrderStatus};
use cafe_types::domain::product::{Product, ProductSellingStatus, ProductType};
use cafe_types::domain::timestamps::Timestamps;
use cafe_types::ports::{OrderRepository, ProductRepository, RepoError};
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{FromRow, SqlitePool};
use std::str::FromStr;
use uuid::Uuid;

const MIGRATIONS: [&str; 3] = [
    include_str!("../migrations/0001_create_products.sql"),
    include_str!("../migrations/0002_create_orders.sql"),
    include_str!("../migrations/0003_create_order_products.sql"),
];

// Stays well under SQLite's bound-variable limit.
const IN_CHUNK_SIZE: usize = 500;

const PRODUCT_COLUMNS: &str =
    "id, product_number, product_type, selling_status, name, price, created_at, updated_at";

#[derive(Clone)]
pub struct SqliteRepo {
    pool: SqlitePool,
}

fn db_err(e: impl ToString) -> RepoError {
    RepoError::DbError(e.to_string())
}

fn parse_ts(s: &str) -> Result<DateTime<Utc>, RepoError> {
    Ok(DateTime::parse_from_rfc3339(s)
        .map_err(db_err)?
        .with_timezone(&Utc))
}

fn placeholders(n: usize) -> String {
    vec!["?"; n].join(", ")
}

#[derive(FromRow)]
struct DbProduct {
    id: String,
    product_number: String,
    product_type: String,
    selling_status: String,
    name: String,
    price: i64,
    created_at: String,
    updated_at: String,
}

impl DbProduct {
    fn into_product(self) -> Result<Product, RepoError> {
        Ok(Product {
            id: Uuid::parse_str(&self.id).map_err(db_err)?,
            product_number: self.product_number,
            product_type: ProductType::from_str(&self.product_type).map_err(db_err)?,
            selling_status: ProductSellingStatus::from_str(&self.selling_status)
                .map_err(db_err)?,
            name: self.name,
            price: self.price,
            timestamps: Timestamps {
                created_at: parse_ts(&self.created_at)?,
                updated_at: parse_ts(&self.updated_at)?,
            },
        })
    }
}

#[derive(FromRow)]
struct DbScannedProduct {
    rowid: i64,
    #[sqlx(flatten)]
    product: DbProduct,
}

#[derive(FromRow)]
struct DbOrder {
    id: String,
    status: String,
    total_price: i64,
    registered_at: String,
    created_at: String,
    updated_at: String,
}

#[derive(FromRow)]
struct DbOrderLine {
    line_id: String,
    line_created_at: String,
    line_updated_at: String,
    #[sqlx(flatten)]
    product: DbProduct,
}

impl DbOrderLine {
    fn into_order_product(self) -> Result<OrderProduct, RepoError> {
        Ok(OrderProduct {
            id: Uuid::parse_str(&self.line_id).map_err(db_err)?,
            timestamps: Timestamps {
                created_at: parse_ts(&self.line_created_at)?,
                updated_at: parse_ts(&self.line_updated_at)?,
            },
            product: self.product.into_product()?,
        })
    }
}

impl DbOrder {
    fn into_order(self, lines: Vec<DbOrderLine>) -> Result<Order, RepoError> {
        let order_products = lines
            .into_iter()
            .map(DbOrderLine::into_order_product)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Order {
            id: Uuid::parse_str(&self.id).map_err(db_err)?,
            status: OrderStatus::from_str(&self.status).map_err(db_err)?,
            total_price: self.total_price,
            registered_at: parse_ts(&self.registered_at)?,
            order_products,
            timestamps: Timestamps {
                created_at: parse_ts(&self.created_at)?,
                updated_at: parse_ts(&self.updated_at)?,
            },
        })
    }
}

impl SqliteRepo {
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        for ddl in MIGRATIONS {
            sqlx::query(ddl).execute(&pool).await?;
        }

        Ok(Self { pool })
    }

    /// Loads products whose `column` matches any of `values`, in `rowid` order.
    async fn fetch_products<'a>(
        &self,
        column: &str,
        values: impl IntoIterator<Item = &'a str>,
    ) -> Result<Vec<Product>, RepoError> {
        let mut values: Vec<&str> = values.into_iter().collect();
        values.sort_unstable();
        values.dedup();

        let mut rows: Vec<DbScannedProduct> = Vec::new();
        for chunk in values.chunks(IN_CHUNK_SIZE) {
            let sql = format!(
                "SELECT rowid AS rowid, {PRODUCT_COLUMNS} FROM products WHERE {column} IN ({})",
                placeholders(chunk.len())
            );
            let mut query = sqlx::query_as::<_, DbScannedProduct>(&sql);
            for v in chunk {
                query = query.bind(*v);
            }
            rows.extend(query.fetch_all(&self.pool).await.map_err(db_err)?);
        }

        rows.sort_by_key(|r| r.rowid);
        rows.into_iter()
            .map(|r| r.product.into_product())
            .collect::<Result<Vec<_>, _>>()
    }
}

#[async_trait]
impl ProductRepository for SqliteRepo {
    async fn save_all(&self, products: Vec<Product>) -> Result<Vec<Product>, RepoError> {
        let mut tx = self.pool.begin().await.map_err(db_err)?;
        for p in &products {
            sqlx::query(
                "INSERT INTO products (id, product_number, product_type, selling_status, name, price, created_at, updated_at)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(p.id.to_string())
            .bind(&p.product_number)
            .bind(p.product_type.as_str())
            .bind(p.selling_status.as_str())
            .bind(&p.name)
            .bind(p.price)
            .bind(p.timestamps.created_at.to_rfc3339())
            .bind(p.timestamps.updated_at.to_rfc3339())
            .execute(&mut *tx)
            .await
            .map_err(db_err)?;
        }
        tx.commit().await.map_err(db_err)?;
        Ok(products)
    }

    async fn find_all_by_selling_status_in(
        &self,
        statuses: &[ProductSellingStatus],
    ) -> Result<Vec<Product>, RepoError> {
        self.fetch_products(
            "selling_status",
            statuses.iter().map(ProductSellingStatus::as_str),
        )
        .await
    }

    async fn find_all_by_product_number_in(
        &self,
        product_numbers: &[String],
    ) -> Result<Vec<Product>, RepoError> {
        self.fetch_products("product_number", product_numbers.iter().map(String::as_str))
            .await
    }
}

#[async_trait]
impl OrderRepository for SqliteRepo {
    async fn save(&self, order: Order) -> Result<Order, RepoError> {
        let mut tx = self.pool.begin().await.map_err(db_err)?;
        sqlx::query(
            "INSERT INTO orders (id, status, total_price, registered_at, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(order.id.to_string())
        .bind(order.status.as_str())
        .bind(order.total_price)
        .bind(order.registered_at.to_rfc3339())
        .bind(order.timestamps.created_at.to_rfc3339())
        .bind(order.timestamps.updated_at.to_rfc3339())
        .execute(&mut *tx)
        .await
        .map_err(db_err)?;

        for (position, line) in order.order_products.iter().enumerate() {
            sqlx::query(
                "INSERT INTO order_products (id, order_id, product_id, position, created_at, updated_at)
                 VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(line.id.to_string())
            .bind(order.id.to_string())
            .bind(line.product.id.to_string())
            .bind(position as i64)
            .bind(line.timestamps.created_at.to_rfc3339())
            .bind(line.timestamps.updated_at.to_rfc3339())
            .execute(&mut *tx)
            .await
            .map_err(db_err)?;
        }
        tx.commit().await.map_err(db_err)?;
        Ok(order)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, RepoError> {
        let row: Option<DbOrder> = sqlx::query_as(
            "SELECT id, status, total_price, registered_at, created_at, updated_at FROM orders WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;
        let Some(row) = row else {
            return Ok(None);
        };

        let lines: Vec<DbOrderLine> = sqlx::query_as(
            "SELECT op.id AS line_id, op.created_at AS line_created_at, op.updated_at AS line_updated_at,
                    p.id, p.product_number, p.product_type, p.selling_status, p.name, p.price,
                    p.created_at, p.updated_at
             FROM order_products op
             JOIN products p ON p.id = op.product_id
             WHERE op.order_id = ?
             ORDER BY op.position",
        )
        .bind(id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        row.into_order(lines).map(Some)
    }
}
