use std::time::Duration;

use anyhow::Context;
use cafe_types::domain::product::{ProductSellingStatus, ProductType};
use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone)]
pub struct CafeClientBuilder {
    base: Url,
    headers: HeaderMap,
    timeout: Option<Duration>,
    client: Option<reqwest::Client>,
}

#[derive(Clone)]
pub struct CafeClient {
    base: Url,
    client: reqwest::Client,
}

impl CafeClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        Self::builder(base_url)?.build()
    }

    pub fn builder(base_url: &str) -> anyhow::Result<CafeClientBuilder> {
        let base = Url::parse(base_url).context("invalid base url")?;
        Ok(CafeClientBuilder {
            base,
            headers: HeaderMap::new(),
            timeout: None,
            client: None,
        })
    }

    fn url(&self, path: &str) -> anyhow::Result<Url> {
        self.base.join(path).context("failed to join url")
    }

    pub async fn get_selling_products(&self) -> anyhow::Result<Vec<ProductPayload>> {
        let res = self
            .client
            .get(self.url("api/v1/products/selling")?)
            .send()
            .await?
            .error_for_status()?;
        let products: Vec<ProductPayload> = res.json().await?;
        tracing::debug!(count = products.len(), "fetched selling products");
        Ok(products)
    }

    pub async fn create_order<I, S>(&self, product_numbers: I) -> anyhow::Result<OrderPayload>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let req = CreateOrderRequest {
            product_numbers: product_numbers.into_iter().map(Into::into).collect(),
        };
        let res = self
            .client
            .post(self.url("api/v1/orders/new")?)
            .json(&req)
            .send()
            .await?
            .error_for_status()?;
        let order: OrderPayload = res.json().await?;
        tracing::debug!(order_id = %order.id, total_price = order.total_price, "created order");
        Ok(order)
    }
}

impl CafeClientBuilder {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_header(
        mut self,
        key: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> anyhow::Result<Self> {
        let header_name =
            HeaderName::from_bytes(key.as_ref().as_bytes()).context("invalid header name")?;
        let header_value = HeaderValue::from_str(value.as_ref()).context("invalid header value")?;
        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    pub fn with_reqwest_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> anyhow::Result<CafeClient> {
        if let Some(client) = self.client {
            return Ok(CafeClient {
                base: self.base,
                client,
            });
        }

        let mut builder = reqwest::Client::builder();
        if !self.headers.is_empty() {
            builder = builder.default_headers(self.headers);
        }
        if let Some(t) = self.timeout {
            builder = builder.timeout(t);
        }
        let client = builder.build()?;
        Ok(CafeClient {
            base: self.base,
            client,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
struct CreateOrderRequest {
    product_numbers: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProductPayload {
    pub id: Uuid,
    pub product_number: String,
    pub product_type: ProductType,
    pub selling_status: ProductSellingStatus,
    pub name: String,
    pub price: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OrderPayload {
    pub id: Uuid,
    pub total_price: i64,
    pub registered_at: DateTime<Utc>,
    pub products: Vec<ProductPayload>,
}
