//! Wire-fixture parsing tests for backend response shapes
//!
//! Fixtures mirror real backend payloads: camelCase names, `items`
//! envelopes, optional fields absent rather than null.

use tradedesk_core::{
    AdminProduct, BlogPost, ListingStatus, Notification, NotificationKind, NotificationPriority,
    Product, ProductStatus, Rfq, RfqStatus, Supplier, SupplierStatus,
};

#[derive(serde::Deserialize)]
struct Envelope<T> {
    items: Vec<T>,
}

#[test]
fn parses_product_list_payload() {
    let json = r#"{
      "items": [
        {
          "id": "prod-100",
          "supplierId": "sup-7",
          "categoryId": "cat-metals",
          "name": "Cold-rolled steel sheet",
          "description": "1.5mm, oiled",
          "price": 540.0,
          "currency": "USD",
          "moq": 10,
          "stockQuantity": 220,
          "unit": "set",
          "rating": 4.6,
          "reviewCount": 31,
          "featured": true,
          "status": "active",
          "createdAt": "2024-01-05T09:12:00Z",
          "updatedAt": "2024-02-01T18:30:00Z"
        }
      ]
    }"#;

    let envelope: Envelope<Product> = serde_json::from_str(json).unwrap();
    let product = &envelope.items[0];
    assert_eq!(product.id, "prod-100");
    assert_eq!(product.status, ProductStatus::Active);
    assert_eq!(product.moq, 10);
    assert!(product.featured);
}

#[test]
fn parses_product_without_optional_flags() {
    // `featured` is absent on most rows
    let json = r#"{
      "id": "prod-2",
      "supplierId": "sup-1",
      "categoryId": "cat-1",
      "name": "Wire",
      "description": "",
      "price": 2.5,
      "currency": "EUR",
      "moq": 1000,
      "stockQuantity": 0,
      "unit": "m",
      "rating": 0.0,
      "reviewCount": 0,
      "status": "out_of_stock",
      "createdAt": "2024-03-01T00:00:00Z",
      "updatedAt": "2024-03-01T00:00:00Z"
    }"#;

    let product: Product = serde_json::from_str(json).unwrap();
    assert!(!product.featured);
    assert_eq!(product.status, ProductStatus::OutOfStock);
}

#[test]
fn parses_supplier_payload() {
    let json = r#"{
      "id": "sup-7",
      "companyName": "Hansa Metallwerk",
      "contactName": "J. Brandt",
      "country": "Germany",
      "city": "Bremen",
      "description": "Sheet metal and tubing",
      "verified": true,
      "status": "active",
      "subscription": "gold",
      "rating": 4.8,
      "totalProducts": 64,
      "totalOrders": 412,
      "responseRate": 0.97,
      "established": 1987,
      "createdAt": "2023-06-10T08:00:00Z"
    }"#;

    let supplier: Supplier = serde_json::from_str(json).unwrap();
    assert_eq!(supplier.status, SupplierStatus::Active);
    assert_eq!(supplier.subscription.label(), "Gold");
    assert_eq!(supplier.established, Some(1987));
}

#[test]
fn parses_notification_payload_with_type_keyword() {
    let json = r#"{
      "items": [
        {
          "id": "ntf-1",
          "type": "business",
          "priority": "high",
          "title": "Quote received",
          "message": "Hansa Metallwerk answered RFQ-204",
          "isRead": false,
          "actionUrl": "/rfqs/204",
          "createdAt": "2024-04-02T11:00:00Z"
        },
        {
          "id": "ntf-2",
          "type": "system",
          "priority": "low",
          "title": "Maintenance window",
          "message": "Sunday 02:00-03:00 UTC",
          "isRead": true,
          "createdAt": "2024-04-01T09:00:00Z"
        }
      ]
    }"#;

    let envelope: Envelope<Notification> = serde_json::from_str(json).unwrap();
    assert_eq!(envelope.items.len(), 2);
    assert_eq!(envelope.items[0].kind, NotificationKind::Business);
    assert_eq!(envelope.items[0].priority, NotificationPriority::High);
    assert_eq!(envelope.items[0].action_url.as_deref(), Some("/rfqs/204"));
    assert_eq!(envelope.items[1].action_url, None);
    assert_eq!(tradedesk_core::unread_count(&envelope.items), 1);
}

#[test]
fn parses_blog_post_with_date_only_timestamp() {
    let json = r#"{
      "id": "post-9",
      "title": "Understanding MOQ",
      "excerpt": "A guide to minimum order quantities",
      "authorName": "D. Kim",
      "authorRole": "Business Consultant",
      "category": "Business",
      "tags": ["MOQ", "Negotiation"],
      "publishedAt": "2024-01-08",
      "readTime": 4,
      "views": 890,
      "likes": 54
    }"#;

    let post: BlogPost = serde_json::from_str(json).unwrap();
    assert_eq!(post.tags.len(), 2);
    assert_eq!(post.published_at.to_string(), "2024-01-08");
    assert!(!post.featured);
}

#[test]
fn parses_admin_product_row() {
    let json = r#"{
      "id": "prod-100",
      "name": "Cold-rolled steel sheet",
      "categoryName": "Metals",
      "supplierName": "Hansa Metallwerk",
      "price": 540.0,
      "currency": "USD",
      "stock": 220,
      "status": "pending",
      "views": 1422,
      "orders": 12,
      "rating": 4.6,
      "createdAt": "2024-01-05T09:12:00Z"
    }"#;

    let row: AdminProduct = serde_json::from_str(json).unwrap();
    assert_eq!(row.status, ListingStatus::Pending);
    assert_eq!(row.views, 1422);
}

#[test]
fn parses_created_rfq_response() {
    let json = r#"{
      "id": "rfq-204",
      "buyerId": "usr-3",
      "productId": "prod-100",
      "productName": "Cold-rolled steel sheet",
      "quantity": 50,
      "unit": "set",
      "currency": "USD",
      "status": "submitted",
      "createdAt": "2024-04-02T10:59:00Z"
    }"#;

    let rfq: Rfq = serde_json::from_str(json).unwrap();
    assert_eq!(rfq.id, "rfq-204");
    assert_eq!(rfq.status, RfqStatus::Submitted);
    assert_eq!(rfq.supplier_id, None);
    assert_eq!(rfq.budget, None);
}
