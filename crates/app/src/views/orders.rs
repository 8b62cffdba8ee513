//! Order history view.

use std::io::{self, Write};

use storefront::{
    identity::CustomerIdentity,
    orders::{Order, present, sort_newest_first},
    pricing::format_amount,
};
use tracing::debug;

use crate::{
    domain::orders::{OrdersService, OrdersServiceError},
    views::NOT_AVAILABLE,
};

/// Fetches the customer's orders, newest first.
///
/// # Errors
///
/// Returns an error if the order history cannot be fetched.
pub async fn load(
    service: &dyn OrdersService,
    customer: &CustomerIdentity,
) -> Result<Vec<Order>, OrdersServiceError> {
    let mut orders = service.list_orders(&customer.id).await?;

    debug!(customer = %customer.id, orders = orders.len(), "loaded order history");

    sort_newest_first(&mut orders);

    Ok(orders)
}

/// Writes every order with its billing, shipping, payment and product details.
///
/// # Errors
///
/// Returns an error if `out` cannot be written to.
pub fn render(mut out: impl Write, orders: &[Order]) -> io::Result<()> {
    writeln!(out, "Your Orders")?;

    if orders.is_empty() {
        return writeln!(out, "You have no orders yet.");
    }

    for order in orders {
        writeln!(out)?;
        render_order(&mut out, order)?;
    }

    Ok(())
}

fn or_na(value: Option<&str>) -> &str {
    present(value).unwrap_or(NOT_AVAILABLE)
}

fn render_order(out: &mut impl Write, order: &Order) -> io::Result<()> {
    let billing = order.billing();
    let shipping = order.shipping();
    let payment = order.payment();

    writeln!(
        out,
        "Order ID: {}    Total Amount: {}",
        order.id,
        format_amount(order.total_amount)
    )?;
    writeln!(out, "Placed: {}", order.created_at.strftime("%Y-%m-%d %H:%M UTC"))?;

    writeln!(out, "Billing Details")?;
    writeln!(
        out,
        "  Name: {} {}",
        or_na(billing.first_name.as_deref()),
        present(billing.last_name.as_deref()).unwrap_or_default()
    )?;
    writeln!(out, "  Phone: {}", or_na(billing.phone_number.as_deref()))?;
    writeln!(out, "  Town/City: {}", or_na(billing.town_city.as_deref()))?;

    if let Some(company) = present(billing.company_name.as_deref()) {
        writeln!(out, "  Company: {company}")?;
    }

    if let Some(notes) = present(billing.order_notes.as_deref()) {
        writeln!(out, "  Notes: {notes}")?;
    }

    writeln!(out, "Shipping Details")?;
    writeln!(out, "  Method: {}", or_na(shipping.shipping_method.as_deref()))?;
    writeln!(
        out,
        "  Cost: {}",
        shipping
            .shipping_cost
            .map_or_else(|| NOT_AVAILABLE.to_string(), format_amount)
    )?;

    writeln!(out, "Payment Details")?;
    writeln!(out, "  Mpesa Name: {}", or_na(payment.payer_name.as_deref()))?;
    writeln!(
        out,
        "  Mobile Number: {}",
        or_na(payment.payer_mobile_number.as_deref())
    )?;
    writeln!(
        out,
        "  Transaction Code: {}",
        or_na(payment.transaction_code.as_deref())
    )?;

    writeln!(out, "Products")?;

    for item in &order.products {
        match &item.product {
            Some(product) => {
                writeln!(out, "  {}", product.title)?;
                writeln!(out, "    Price: {}", format_amount(product.price))?;
            }
            None => writeln!(out, "  Unavailable product")?,
        }

        if let Some(color) = present(item.color.as_deref()) {
            writeln!(out, "    Color: {color}")?;
        }

        if let Some(size) = present(item.size.as_deref()) {
            writeln!(out, "    Size: {size}")?;
        }

        writeln!(out, "    Quantity: {}", item.quantity)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use crate::domain::orders::MockOrdersService;

    use super::*;

    fn customer() -> CustomerIdentity {
        CustomerIdentity {
            id: "user_1".to_string(),
            email: "fatuma@example.com".to_string(),
            name: "Fatuma Ali".to_string(),
        }
    }

    fn order(id: &str, created_at: &str) -> TestResult<Order> {
        Ok(serde_json::from_value(json!({
            "_id": id,
            "customerClerkId": "user_1",
            "products": [],
            "totalAmount": 100,
            "createdAt": created_at
        }))?)
    }

    #[tokio::test]
    async fn load_sorts_newest_first() -> TestResult {
        let mut service = MockOrdersService::new();
        let orders = vec![
            order("first", "2024-01-10T09:00:00Z")?,
            order("third", "2024-03-10T09:00:00Z")?,
            order("second", "2024-02-10T09:00:00Z")?,
        ];

        service
            .expect_list_orders()
            .once()
            .withf(|customer| customer == "user_1")
            .return_once(move |_| Ok(orders));

        let loaded = load(&service, &customer()).await?;
        let ids: Vec<_> = loaded.iter().map(|o| o.id.as_str()).collect();

        assert_eq!(ids, ["third", "second", "first"]);

        Ok(())
    }

    #[test]
    fn empty_history() -> TestResult {
        let mut out = Vec::new();

        render(&mut out, &[])?;

        assert_eq!(String::from_utf8(out)?, "Your Orders\nYou have no orders yet.\n");

        Ok(())
    }

    #[test]
    fn missing_details_render_as_not_available() -> TestResult {
        let order: Order = serde_json::from_value(json!({
            "_id": "o-1",
            "customerClerkId": "user_1",
            "products": [
                { "product": null, "quantity": 2 },
                {
                    "product": { "_id": "p1", "title": "Servo motor", "price": 650 },
                    "color": "",
                    "size": "SG90",
                    "quantity": 1
                }
            ],
            "billingDetails": { "firstName": "Fatuma", "companyName": "  " },
            "totalAmount": 1950,
            "createdAt": "2024-05-04T12:30:00Z"
        }))?;

        let mut out = Vec::new();

        render(&mut out, &[order])?;

        let output = String::from_utf8(out)?;

        assert!(output.contains("Order ID: o-1"));
        assert!(output.contains("Name: Fatuma"));
        assert!(output.contains("Phone: N/A"));
        assert!(!output.contains("Company:"));
        assert!(output.contains("Method: N/A"));
        assert!(output.contains("Cost: N/A"));
        assert!(output.contains("Transaction Code: N/A"));
        assert!(output.contains("Unavailable product"));
        assert!(output.contains("Servo motor"));
        assert!(output.contains("Size: SG90"));
        assert!(!output.contains("Color:"));
        assert!(output.contains("Placed: 2024-05-04 12:30 UTC"));

        Ok(())
    }
}
