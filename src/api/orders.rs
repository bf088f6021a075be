use super::client::ApiClient;
use crate::error::Result;
use crate::models::Order;
use reqwest::Method;

impl ApiClient {
    /// Check out the current cart into an order.
    pub async fn create_order(
        &self,
        delivery_address: &str,
        contact_phone: Option<&str>,
    ) -> Result<Order> {
        let mut query = vec![("deliveryAddress", delivery_address.to_string())];
        if let Some(phone) = contact_phone {
            query.push(("contactPhone", phone.to_string()));
        }
        self.request(Method::POST, "/orders", &query, None).await
    }

    pub async fn orders(&self) -> Result<Vec<Order>> {
        self.request(Method::GET, "/orders", &[], None).await
    }

    pub async fn order(&self, id: i64) -> Result<Order> {
        self.request(Method::GET, &format!("/orders/{}", id), &[], None)
            .await
    }

    pub async fn pay_order(&self, id: i64) -> Result<Order> {
        self.request(Method::POST, &format!("/orders/{}/pay", id), &[], None)
            .await
    }
}
